//! Property tests for `SortedList` over random insert/remove sequences.

use proptest::prelude::*;
use sorted_list::{Order, SortedList, Value};

fn any_order() -> impl Strategy<Value = Order> {
    prop_oneof![Just(Order::Ascending), Just(Order::Descending)]
}

fn is_monotonic(values: &[Value], order: Order) -> bool {
    values.windows(2).all(|w| match order {
        Order::Ascending => w[0] <= w[1],
        Order::Descending => w[0] >= w[1],
    })
}

fn sorted(mut values: Vec<Value>, order: Order) -> Vec<Value> {
    values.sort();
    if order == Order::Descending {
        values.reverse();
    }
    values
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sorted_after_every_add(order in any_order(), values in prop::collection::vec(-50i64..50, 0..40)) {
        let mut list = SortedList::new(order);
        for v in &values {
            list.add(*v).unwrap();
            prop_assert!(is_monotonic(&list.to_vec(), order));
        }
    }

    #[test]
    fn prop_len_matches_iteration(order in any_order(), values in prop::collection::vec(any::<i64>(), 0..40)) {
        let mut list = SortedList::new(order);
        for v in &values {
            list.add(*v).unwrap();
            prop_assert_eq!(list.len(), list.iter().count());
        }
    }

    #[test]
    fn prop_round_trip_text(order in any_order(), values in prop::collection::vec("[a-e]{0,3}", 0..30)) {
        let mut list = SortedList::new(order);
        for v in &values {
            list.add(v.as_str()).unwrap();
        }
        let expected = sorted(values.into_iter().map(Value::from).collect(), order);
        prop_assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn prop_contains_agrees_with_contents(
        order in any_order(),
        values in prop::collection::vec(-20i64..20, 1..30),
        probe in -25i64..25,
    ) {
        let mut list = SortedList::new(order);
        for v in &values {
            list.add(*v).unwrap();
        }
        prop_assert_eq!(list.contains(probe).unwrap(), values.contains(&probe));
    }

    #[test]
    fn prop_remove_takes_exactly_one(
        order in any_order(),
        values in prop::collection::vec(-10i64..10, 1..30),
        target in -12i64..12,
    ) {
        let mut list = SortedList::new(order);
        for v in &values {
            list.add(*v).unwrap();
        }
        let mut expected = list.to_vec();
        let removed = list.remove_by_value(target).unwrap();

        prop_assert_eq!(removed, values.contains(&target));
        if removed {
            let pos = expected.iter().position(|v| *v == Value::from(target)).unwrap();
            expected.remove(pos);
        }
        prop_assert_eq!(list.len(), expected.len());
        prop_assert_eq!(list.to_vec(), expected);
    }
}
