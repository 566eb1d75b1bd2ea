//! AVL tree: height-cached rebalancing over the arena base tree, and an
//! ordered set built on it.

pub mod rebalance;
mod set;
mod validate;

pub use rebalance::{
    adjust_height, adjust_heights_after_restructuring, find_trinode, height, height_discrepancy,
    rebalance_after_delete, rebalance_after_insert, recompute_heights, Rebalanced,
};
pub use set::{AvlTreeSet, Iter};
pub use validate::{assert_avl_tree, TreeError};
