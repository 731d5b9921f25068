use core::fmt;
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    iter::FusedIterator,
    str::FromStr,
};

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    error::ListError,
    linkedlist::{self, Link, Node},
    value::{IntoValue, Kind, Value},
};

/// Direction a [`SortedList`] keeps its chain in, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /*
     * Three-way comparison in chain order :
     * Less means <a> belongs before <b>.
     */
    fn compare(self, a: &Value, b: &Value) -> Ordering {
        match self {
            Order::Ascending => a.cmp(b),
            Order::Descending => b.cmp(a),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order '{0}', expected 'asc' or 'desc'")]
pub struct ParseOrderError(String);

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            _ => Err(ParseOrderError(s.to_owned())),
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => write!(f, "ascending"),
            Order::Descending => write!(f, "descending"),
        }
    }
}

/// A singly-linked list that keeps its values sorted on every insertion.
///
/// The first value added locks the list to its [`Kind`]; later values of
/// another kind are refused with [`ListError::TypeMismatch`]. Equal values
/// are kept in insertion order.
///
/// ```
/// use sorted_list::{Order, SortedList, Value};
///
/// let mut list = SortedList::new(Order::Ascending);
/// for n in [10, 2, 7, 1] {
///     list.add(n).unwrap();
/// }
/// assert_eq!(list.to_vec(), vec![Value::from(1), Value::from(2), Value::from(7), Value::from(10)]);
/// assert!(list.add("test").is_err());
/// ```
pub struct SortedList {
    order: Order,
    kind: Option<Kind>,
    head: Link,
    len: usize,
}

impl SortedList {
    pub fn new(order: Order) -> Self {
        SortedList {
            order,
            kind: None,
            head: None,
            len: 0,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// The kind this list is locked to, once a value has been added.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` before the first node it does not pass in chain order.
    pub fn add(&mut self, value: impl IntoValue) -> Result<(), ListError> {
        let value = self.admit(value)?;
        if self.kind.is_none() {
            debug!(kind = %value.kind(), "list locked to kind");
            self.kind = Some(value.kind());
        }

        let order = self.order;
        let link = linkedlist::seek(&mut self.head, |existing| {
            order.compare(&value, existing) == Ordering::Greater
        });
        trace!(%value, "inserting");
        Node::new(value).link_before(link);
        self.len += 1;
        Ok(())
    }

    /// Remove the earliest node equal to `value`.
    ///
    /// Returns `Ok(false)` when nothing matched. An empty list answers
    /// `Ok(false)` before the type guard runs, so a value of any kind is
    /// accepted there.
    pub fn remove_by_value(&mut self, value: impl IntoValue) -> Result<bool, ListError> {
        if self.head.is_none() {
            return Ok(false);
        }
        let target = self.admit(value)?;

        let order = self.order;
        let link = linkedlist::seek(&mut self.head, |existing| {
            order.compare(existing, &target) == Ordering::Less
        });
        if !link.as_ref().is_some_and(|node| node.value == target) {
            return Ok(false);
        }
        linkedlist::unlink(link);
        self.len -= 1;
        trace!(%target, len = self.len, "removed");
        Ok(true)
    }

    /// Membership test that stops as soon as the order rules `value` out.
    ///
    /// Like [`SortedList::remove_by_value`], an empty list answers
    /// `Ok(false)` without checking the kind of `value`.
    pub fn contains(&self, value: impl IntoValue) -> Result<bool, ListError> {
        if self.head.is_none() {
            return Ok(false);
        }
        let target = self.admit(value)?;

        for existing in self.iter() {
            match self.order.compare(existing, &target) {
                Ordering::Equal => return Ok(true),
                Ordering::Greater => return Ok(false),
                Ordering::Less => {}
            }
        }
        Ok(false)
    }

    pub fn first(&self) -> Result<&Value, ListError> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or(ListError::EmptyList)
    }

    /// Walks to the tail; no tail pointer is kept.
    pub fn last(&self) -> Result<&Value, ListError> {
        self.iter().last().ok_or(ListError::EmptyList)
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /*
     * Type guard : convert the input and check it against the locked kind.
     * Does not lock anything itself.
     */
    fn admit(&self, value: impl IntoValue) -> Result<Value, ListError> {
        let value = value.into_value().inspect_err(|err| {
            debug!(%err, "value rejected");
        })?;
        match self.kind {
            Some(locked) if locked != value.kind() => {
                debug!(found = %value.kind(), %locked, "value rejected");
                Err(ListError::TypeMismatch {
                    found: value.kind(),
                    locked,
                })
            }
            _ => Ok(value),
        }
    }
}

impl Drop for SortedList {
    fn drop(&mut self) {
        linkedlist::release(self.head.take());
    }
}

/*
 * Display the values head to tail : [1, 2, 7, 10]
 */
impl Display for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl Debug for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedList")
            .field("order", &self.order)
            .field("kind", &self.kind)
            .field("len", &self.len)
            .field("values", &DebugValues(self))
            .finish()
    }
}

struct DebugValues<'a>(&'a SortedList);

impl<'a> Debug for DebugValues<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Forward cursor over the values of a [`SortedList`], head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a SortedList {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
