//! Base ordered tree: comparator-driven placement, physical unlinking,
//! trinode restructuring and arena slot release.
//!
//! None of these functions look at cached heights. Keeping the tree balanced
//! is the job of [`crate::avl::rebalance`], which is handed the node touched
//! here and calls back into [`restructure`].

use crate::types::{ElemNode, Node};
use crate::util::{get_l, get_p, get_r, last, replace_child, set_l, set_p, set_r};

/// Outcome of [`insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The node was spliced in as a leaf; carries the (possibly new) root.
    Leaf { root: u32 },
    /// An equal element already lives at this index. The new node is left
    /// detached.
    Duplicate(u32),
}

/// Outcome of [`unlink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unlinked {
    /// Root after the removal, `None` when the tree became empty.
    pub root: Option<u32>,
    /// Former parent of the physically removed node.
    pub parent: Option<u32>,
    /// Node that was physically taken out of the tree. It holds the removed
    /// element and has no links left.
    pub removed: u32,
}

/// Places detached node `n` as a leaf under `root`.
pub fn insert<E, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Placement
where
    N: ElemNode<E>,
    C: Fn(&E, &E) -> i32,
{
    let Some(root) = root else {
        return Placement::Leaf { root: n };
    };

    let mut curr = root;
    loop {
        let cmp = comparator(arena[n as usize].elem(), arena[curr as usize].elem());
        if cmp == 0 {
            return Placement::Duplicate(curr);
        }
        let next = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if cmp < 0 {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                return Placement::Leaf { root };
            }
        }
    }
}

/// Physically removes the element stored at `n`.
///
/// A node with two children trades elements with its in-order predecessor,
/// and the predecessor is removed instead, so the node leaving the tree never
/// has more than one child. That child takes its place.
pub fn unlink<E, N>(arena: &mut [N], root: u32, n: u32) -> Unlinked
where
    N: ElemNode<E>,
{
    let mut target = n;
    if let (Some(l), Some(_)) = (get_l(arena, n), get_r(arena, n)) {
        let pred = last(arena, Some(l)).expect("left subtree is not empty");
        swap_elems(arena, n, pred);
        target = pred;
    }

    let parent = get_p(arena, target);
    let child = get_l(arena, target).or(get_r(arena, target));
    if let Some(c) = child {
        set_p(arena, c, parent);
    }
    replace_child(arena, parent, target, child);

    set_p(arena, target, None);
    set_l(arena, target, None);
    set_r(arena, target, None);

    Unlinked {
        root: if parent.is_some() { Some(root) } else { child },
        parent,
        removed: target,
    }
}

fn swap_elems<E, N>(arena: &mut [N], a: u32, b: u32)
where
    N: ElemNode<E>,
{
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    std::mem::swap(head[lo as usize].elem_mut(), tail[0].elem_mut());
}

#[inline]
fn attach_l<N: Node>(arena: &mut [N], parent: u32, child: Option<u32>) {
    set_l(arena, parent, child);
    if let Some(c) = child {
        set_p(arena, c, Some(parent));
    }
}

#[inline]
fn attach_r<N: Node>(arena: &mut [N], parent: u32, child: Option<u32>) {
    set_r(arena, parent, child);
    if let Some(c) = child {
        set_p(arena, c, Some(parent));
    }
}

/// Trinode restructuring of `x`, child of `y`, child of `z`.
///
/// With `(a, b, c)` the three nodes in in-order and `T0..T3` the subtrees
/// hanging off them, `b` takes `z`'s place under `z`'s former parent, `a`
/// gets `T0, T1` and `c` gets `T2, T3`. This is a single rotation when `x`,
/// `y`, `z` lie on a straight line and a double rotation otherwise. Returns
/// `b`, the new root of the local subtree.
pub fn restructure<N: Node>(arena: &mut [N], x: u32, y: u32, z: u32) -> u32 {
    debug_assert_eq!(get_p(arena, x), Some(y), "x must be a child of y");
    debug_assert_eq!(get_p(arena, y), Some(z), "y must be a child of z");

    let y_is_left = get_l(arena, z) == Some(y);
    let x_is_left = get_l(arena, y) == Some(x);
    let (a, b, c, t0, t1, t2, t3) = match (y_is_left, x_is_left) {
        (true, true) => (
            x,
            y,
            z,
            get_l(arena, x),
            get_r(arena, x),
            get_r(arena, y),
            get_r(arena, z),
        ),
        (true, false) => (
            y,
            x,
            z,
            get_l(arena, y),
            get_l(arena, x),
            get_r(arena, x),
            get_r(arena, z),
        ),
        (false, true) => (
            z,
            x,
            y,
            get_l(arena, z),
            get_l(arena, x),
            get_r(arena, x),
            get_r(arena, y),
        ),
        (false, false) => (
            z,
            y,
            x,
            get_l(arena, z),
            get_l(arena, y),
            get_l(arena, x),
            get_r(arena, x),
        ),
    };

    let p = get_p(arena, z);
    replace_child(arena, p, z, Some(b));
    set_p(arena, b, p);

    attach_l(arena, a, t0);
    attach_r(arena, a, t1);
    attach_l(arena, c, t2);
    attach_r(arena, c, t3);
    attach_l(arena, b, Some(a));
    attach_r(arena, b, Some(c));

    b
}

/// Drops detached node `n` from the arena and returns it together with the
/// root, which is re-indexed if it was the node moved into the freed slot.
///
/// The last arena node is moved into slot `n` and every link pointing at it
/// is rewritten, so indices stay dense. Any index held for that moved node
/// is stale afterwards.
pub fn release<N: Node>(arena: &mut Vec<N>, root: Option<u32>, n: u32) -> (N, Option<u32>) {
    debug_assert!(
        get_p(arena, n).is_none() && get_l(arena, n).is_none() && get_r(arena, n).is_none(),
        "released node must be detached"
    );

    let moved = (arena.len() - 1) as u32;
    let node = arena.swap_remove(n as usize);
    if moved == n {
        return (node, root);
    }

    let p = get_p(arena, n);
    replace_child(arena, p, moved, Some(n));
    if let Some(l) = get_l(arena, n) {
        set_p(arena, l, Some(n));
    }
    if let Some(r) = get_r(arena, n) {
        set_p(arena, r, Some(n));
    }

    let root = if root == Some(moved) { Some(n) } else { root };
    (node, root)
}
