use std::collections::BTreeSet;

use avl_forest::AvlTreeSet;
use proptest::prelude::*;

const N_VALUES: usize = 200;

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Del(u8),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    // A small value domain makes deletes hit present elements often.
    prop_oneof![
        3 => any::<u8>().prop_map(|v| Op::Add(v % 64)),
        2 => any::<u8>().prop_map(|v| Op::Del(v % 64)),
    ]
}

/// Upper bound on the height of an AVL tree holding `n` elements.
fn avl_height_bound(n: usize) -> f64 {
    1.44 * ((n + 2) as f64).log2() - 0.328
}

proptest! {
    /// Random adds and deletes behave like a `BTreeSet` and keep every
    /// invariant after each step.
    #[test]
    fn prop_ops_match_btree_set(ops in prop::collection::vec(arbitrary_op(), 0..N_VALUES)) {
        let mut set = AvlTreeSet::<u8>::new();
        let mut control = BTreeSet::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    prop_assert_eq!(set.add(v), control.insert(v));
                    prop_assert!(set.last_restructures() <= 1);
                }
                Op::Del(v) => prop_assert_eq!(set.del(&v), control.remove(&v)),
            }
            prop_assert!(set.assert_valid().is_ok(), "{:?}", set.assert_valid());
            prop_assert_eq!(set.size(), control.len());
        }

        prop_assert_eq!(set.to_vec(), control.into_iter().collect::<Vec<_>>());
    }

    /// Insertion alone never needs more than one restructuring per element
    /// and stays within the AVL height bound.
    #[test]
    fn prop_insert_height_bound(values in prop::collection::vec(any::<i32>(), 1..N_VALUES)) {
        let mut set = AvlTreeSet::<i32>::new();
        for v in &values {
            set.add(*v);
            prop_assert!(set.last_restructures() <= 1);
        }
        set.assert_valid().unwrap();
        prop_assert!(f64::from(set.height()) <= avl_height_bound(set.size()));
    }

    /// Deleting everything in any order leaves an empty, valid set.
    #[test]
    fn prop_delete_all(values in prop::collection::hash_set(any::<i16>(), 0..N_VALUES)) {
        let mut set: AvlTreeSet<i16> = values.iter().copied().collect();
        prop_assert_eq!(set.size(), values.len());

        for v in &values {
            prop_assert_eq!(set.take(v), Some(*v));
            prop_assert!(set.assert_valid().is_ok());
            prop_assert!(f64::from(set.height()) <= avl_height_bound(set.size()));
        }
        prop_assert!(set.is_empty());
        prop_assert_eq!(set.height(), -1);
    }
}
