use crate::value::Value;

pub(crate) type Link = Option<Box<Node>>;

/*
 * A single cell of the chain : a value and exclusive ownership of the next cell
 */
#[derive(Debug)]
pub(crate) struct Node {
    pub next: Link,
    pub value: Value,
}

impl Node {
    pub fn new(value: Value) -> Self {
        Node { next: None, value }
    }

    /*
     * Splice this node in front of whatever <link> currently holds
     */
    pub fn link_before(mut self, link: &mut Link) {
        self.next = link.take();
        *link = Some(Box::new(self));
    }
}

/*
 * Walk the chain starting at <link> while <advance> holds for the current node,
 * and return the first link where it does not (possibly the terminal None).
 */
pub(crate) fn seek(mut link: &mut Link, mut advance: impl FnMut(&Value) -> bool) -> &mut Link {
    while link.as_ref().is_some_and(|node| advance(&node.value)) {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    link
}

/*
 * Unlink the node held by <link>, giving back its value
 */
pub(crate) fn unlink(link: &mut Link) -> Option<Value> {
    link.take().map(|node| {
        let node = *node;
        *link = node.next;
        node.value
    })
}

/*
 * Release a chain one node at a time, so long chains do not recurse in drop
 */
pub(crate) fn release(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(values: &[i64]) -> Link {
        let mut head = None;
        for v in values.iter().rev() {
            Node::new(Value::from(*v)).link_before(&mut head);
        }
        head
    }

    fn collect(mut link: &Link) -> Vec<i64> {
        let mut res = vec![];
        while let Some(node) = link {
            res.extend(node.value.as_integer());
            link = &node.next;
        }
        res
    }

    #[test]
    fn seek_stops_at_first_failing_node() {
        let mut head = chain(&[1, 3, 5]);
        let link = seek(&mut head, |v| *v < Value::from(4));
        assert_eq!(link.as_ref().map(|n| n.value.clone()), Some(Value::from(5)));
    }

    #[test]
    fn seek_can_reach_the_end() {
        let mut head = chain(&[1, 3, 5]);
        let link = seek(&mut head, |_| true);
        assert!(link.is_none());
        Node::new(Value::from(9)).link_before(link);
        assert_eq!(collect(&head), vec![1, 3, 5, 9]);
    }

    #[test]
    fn unlink_splices_successor() {
        let mut head = chain(&[1, 3, 5]);
        let link = seek(&mut head, |v| *v < Value::from(3));
        assert_eq!(unlink(link), Some(Value::from(3)));
        assert_eq!(collect(&head), vec![1, 5]);
        assert_eq!(unlink(&mut None), None);
    }

    #[test]
    fn release_long_chain() {
        let mut head = None;
        for v in 0..200_000 {
            Node::new(Value::from(v)).link_before(&mut head);
        }
        release(head);
    }
}
