//! Arena-based AVL tree with height-cached rebalancing.
//!
//! Nodes live in a caller-owned `Vec<N>` arena and every "pointer" is an
//! `Option<u32>` index into it. The parent link is a plain back-reference
//! used for upward walks.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`HeightNode`] and [`ElemNode`] traits |
//! [`node`] | [`AvlNode`], the arena node used by [`AvlTreeSet`] |
//! [`util`] | `first`, `next`, `prev`, `find` … over node links |
//! [`bst`] | comparator placement, unlinking, trinode `restructure` |
//! [`avl`] | rebalance walks, triple selection, height repair, the set |
//! [`print`] | box-drawing tree dumps |
//!
//! # Example
//!
//! ```
//! use avl_forest::AvlTreeSet;
//!
//! let set: AvlTreeSet<i32> = (1..=7).collect();
//! assert_eq!(set.height(), 2);
//! assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
//! set.assert_valid().unwrap();
//! ```

pub mod avl;
pub mod bst;
pub mod node;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlTreeSet, TreeError};
pub use node::AvlNode;
pub use types::{ElemNode, HeightNode, Node};
pub use util::{first, last, next, prev};
