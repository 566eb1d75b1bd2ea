//! AVL rebalancing over cached subtree heights.
//!
//! The base tree performs a raw insert or unlink and then hands the touched
//! node to [`rebalance_after_insert`] or [`rebalance_after_delete`]. Both
//! walk towards the root, refresh cached heights and, where a node's children
//! differ in height by more than one, pick the restructuring triple and let
//! [`bst::restructure`] relink it.
//!
//! Nothing here reads elements or comparators.

use log::{debug, trace};

use crate::bst;
use crate::types::HeightNode;
use crate::util::{get_l, get_p, get_r};

/// Outcome of a rebalance walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rebalanced {
    /// Root after the walk. Changes when a restructuring lifts a new node to
    /// the top.
    pub root: Option<u32>,
    /// Number of trinode restructurings performed by the walk.
    pub restructures: u32,
}

/// Cached height of `node`; an absent node has height `-1`.
#[inline]
pub fn height<N: HeightNode>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].h())
}

#[inline]
pub fn set_height<N: HeightNode>(arena: &mut [N], node: u32, h: i32) {
    arena[node as usize].set_h(h);
}

/// Absolute difference between the heights of the children of `node`.
#[inline]
pub fn height_discrepancy<N: HeightNode>(arena: &[N], node: u32) -> i32 {
    (height(arena, get_l(arena, node)) - height(arena, get_r(arena, node))).abs()
}

/// Height of the taller child of `node`, `-1` for a leaf.
pub fn tallest_child_height<N: HeightNode>(arena: &[N], node: u32) -> i32 {
    arena[node as usize]
        .children()
        .map(|c| height(arena, Some(c)))
        .max()
        .unwrap_or(-1)
}

/// Recomputes the cached height of `node` from its children.
#[inline]
pub fn adjust_height<N: HeightNode>(arena: &mut [N], node: u32) {
    let h = (tallest_child_height(arena, node) + 1).max(0);
    set_height(arena, node, h);
}

/// Walks from the node just inserted to the root.
///
/// The walk stops as soon as a node with children keeps its height, since no
/// ancestor can change after that, or right after the first restructuring:
/// an insertion never needs more than one.
pub fn rebalance_after_insert<N: HeightNode>(
    arena: &mut [N],
    root: u32,
    inserted: u32,
) -> Rebalanced {
    let mut root = root;
    let mut walk = Some(inserted);
    while let Some(node) = walk {
        let previous = height(arena, Some(node));
        adjust_height(arena, node);
        let n = &arena[node as usize];
        if n.h() == previous && (n.has_l() || n.has_r()) {
            debug!("insert walk settled at node {node}");
            return Rebalanced {
                root: Some(root),
                restructures: 0,
            };
        }
        if height_discrepancy(arena, node) > 1 {
            let top = find_trinode(arena, node);
            if get_p(arena, top).is_none() {
                root = top;
            }
            return Rebalanced {
                root: Some(root),
                restructures: 1,
            };
        }
        walk = get_p(arena, node);
    }
    Rebalanced {
        root: Some(root),
        restructures: 0,
    }
}

/// Walks from the former parent of a removed node to the root.
///
/// Every ancestor is visited: a deletion may need a restructuring at each
/// level, so the walk keeps going after a fix.
pub fn rebalance_after_delete<N: HeightNode>(
    arena: &mut [N],
    root: Option<u32>,
    parent: Option<u32>,
) -> Rebalanced {
    let mut root = root;
    let mut restructures = 0;
    let mut walk = parent;
    while let Some(node) = walk {
        adjust_height(arena, node);
        if height_discrepancy(arena, node) > 1 {
            let top = find_trinode(arena, node);
            restructures += 1;
            if get_p(arena, top).is_none() {
                root = Some(top);
            }
        }
        walk = get_p(arena, node);
    }
    if restructures > 0 {
        debug!("delete walk restructured {restructures} time(s)");
    }
    Rebalanced { root, restructures }
}

/// Picks the restructuring triple for the imbalanced node `z`, relinks it and
/// repairs the three cached heights. Returns the new root of the subtree.
///
/// `y` is the taller child of `z` and `x` the taller child of `y`. When the
/// children of `y` are equally tall, `x` is taken on the same side as `y`,
/// which yields a single rotation.
pub fn find_trinode<N: HeightNode>(arena: &mut [N], z: u32) -> u32 {
    let (zl, zr) = (get_l(arena, z), get_r(arena, z));
    let y_is_left = height(arena, zl) > height(arena, zr);
    let y = if y_is_left { zl } else { zr }.expect("taller child of an imbalanced node exists");

    let (yl, yr) = (get_l(arena, y), get_r(arena, y));
    let (hl, hr) = (height(arena, yl), height(arena, yr));
    let x = if hl > hr {
        yl
    } else if hr > hl {
        yr
    } else if y_is_left {
        yl
    } else {
        yr
    }
    .expect("taller child of y exists");

    let top = bst::restructure(arena, x, y, z);
    adjust_heights_after_restructuring(arena, x, y, z);
    trace!("restructured x={x} y={y} z={z}, subtree root {top}");
    top
}

/// Refreshes the heights of `x`, `y`, `z` after [`bst::restructure`], lowest
/// node first.
///
/// `z` always ends up below the new subtree root. If `x` is still a child of
/// `y` the rotation was single and `y` is the root, otherwise `x` is.
pub fn adjust_heights_after_restructuring<N: HeightNode>(
    arena: &mut [N],
    x: u32,
    y: u32,
    z: u32,
) {
    adjust_height(arena, z);
    if get_p(arena, x) == Some(y) {
        adjust_height(arena, x);
        adjust_height(arena, y);
    } else {
        adjust_height(arena, y);
        adjust_height(arena, x);
    }
}

/// Recomputes every cached height under `root`, children before parents.
///
/// Returns how many slots changed, which is `0` on a tree whose heights are
/// already correct.
pub fn recompute_heights<N: HeightNode>(arena: &mut [N], root: Option<u32>) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut changed = recompute_heights(arena, get_l(arena, root));
    changed += recompute_heights(arena, get_r(arena, root));
    let before = arena[root as usize].h();
    adjust_height(arena, root);
    if arena[root as usize].h() != before {
        changed += 1;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AvlNode;

    fn chain() -> Vec<AvlNode<i32>> {
        // 0 -> 1 (right) -> 2 (right), heights as after raw inserts.
        let mut arena: Vec<AvlNode<i32>> = (0..3).map(AvlNode::new).collect();
        arena[0].r = Some(1);
        arena[1].p = Some(0);
        arena[1].r = Some(2);
        arena[2].p = Some(1);
        arena
    }

    #[test]
    fn absent_node_has_height_minus_one() {
        let arena: Vec<AvlNode<i32>> = vec![AvlNode::new(1)];
        assert_eq!(height(&arena, None), -1);
        assert_eq!(height(&arena, Some(0)), 0);
        assert_eq!(tallest_child_height(&arena, 0), -1);
    }

    #[test]
    fn adjust_height_keeps_leaves_at_zero() {
        let mut arena: Vec<AvlNode<i32>> = vec![AvlNode::new(1)];
        arena[0].h = 7;
        adjust_height(&mut arena, 0);
        assert_eq!(arena[0].h, 0);
    }

    #[test]
    fn recompute_heights_counts_stale_slots() {
        let mut arena = chain();
        assert_eq!(recompute_heights(&mut arena, Some(0)), 2);
        assert_eq!(arena[0].h, 2);
        assert_eq!(arena[1].h, 1);
        assert_eq!(recompute_heights(&mut arena, Some(0)), 0);
    }

    #[test]
    fn straight_line_triple_becomes_single_rotation() {
        let mut arena = chain();
        recompute_heights(&mut arena, Some(0));
        assert_eq!(height_discrepancy(&arena, 0), 2);

        let top = find_trinode(&mut arena, 0);
        assert_eq!(top, 1);
        assert_eq!(arena[1].p, None);
        assert_eq!((arena[1].l, arena[1].r), (Some(0), Some(2)));
        assert_eq!((arena[0].h, arena[1].h, arena[2].h), (0, 1, 0));
    }

    #[test]
    fn zig_zag_triple_becomes_double_rotation() {
        // 0 -> 2 (right) -> 1 (left)
        let mut arena: Vec<AvlNode<i32>> = (0..3).map(AvlNode::new).collect();
        arena[0].r = Some(2);
        arena[2].p = Some(0);
        arena[2].l = Some(1);
        arena[1].p = Some(2);
        recompute_heights(&mut arena, Some(0));

        let top = find_trinode(&mut arena, 0);
        assert_eq!(top, 1);
        assert_eq!((arena[1].l, arena[1].r), (Some(0), Some(2)));
        assert_eq!((arena[0].p, arena[2].p), (Some(1), Some(1)));
        assert_eq!((arena[0].h, arena[1].h, arena[2].h), (0, 1, 0));
    }

    #[test]
    fn insert_walk_reports_new_root() {
        let mut arena = chain();
        arena[0].h = 1;
        arena[1].h = 0;
        let out = rebalance_after_insert(&mut arena, 0, 2);
        assert_eq!(
            out,
            Rebalanced {
                root: Some(1),
                restructures: 1
            }
        );
    }

    #[test]
    fn delete_walk_from_nothing_is_a_no_op() {
        let mut arena: Vec<AvlNode<i32>> = Vec::new();
        let out = rebalance_after_delete(&mut arena, None, None);
        assert_eq!(
            out,
            Rebalanced {
                root: None,
                restructures: 0
            }
        );
    }
}
