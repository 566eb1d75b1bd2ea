//! Link-level (p / l / r) helpers shared by the base tree and the rebalancer:
//! in-order navigation and comparator lookups over any arena of [`Node`]s.

use crate::types::{ElemNode, Node};

/// Reads one link of a node.
type Link<N> = fn(&N) -> Option<u32>;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points `parent`'s link that currently holds `old` at `new`.
///
/// With no parent, `old` was the root and nothing is rewritten.
#[inline]
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    let Some(p) = parent else { return };
    if get_l(arena, p) == Some(old) {
        set_l(arena, p, new);
    } else {
        set_r(arena, p, new);
    }
}

/// Follows `link` down from `from` until it runs out.
fn descend<N: Node>(arena: &[N], from: Option<u32>, link: Link<N>) -> Option<u32> {
    let mut at = from?;
    while let Some(child) = link(&arena[at as usize]) {
        at = child;
    }
    Some(at)
}

/// In-order neighbour on the `toward` side; `away` is the opposite link.
///
/// Either the extreme node of the `toward` subtree, or the first ancestor
/// reached from its `away` side.
fn neighbour<N: Node>(arena: &[N], idx: u32, toward: Link<N>, away: Link<N>) -> Option<u32> {
    if let Some(sub) = toward(&arena[idx as usize]) {
        return descend(arena, Some(sub), away);
    }
    let mut child = idx;
    while let Some(p) = get_p(arena, child) {
        if toward(&arena[p as usize]) != Some(child) {
            return Some(p);
        }
        child = p;
    }
    None
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    descend(arena, root, N::l)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    descend(arena, root, N::r)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    neighbour(arena, idx, N::r, N::l)
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    neighbour(arena, idx, N::l, N::r)
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    std::iter::successors(first(arena, root), |&i| next(arena, i)).count()
}

/// Index of the node whose element compares equal to `elem`.
pub fn find<E, N, C>(arena: &[N], root: Option<u32>, elem: &E, comparator: &C) -> Option<u32>
where
    N: ElemNode<E>,
    C: Fn(&E, &E) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let node = &arena[i as usize];
        curr = match comparator(elem, node.elem()) {
            0 => return Some(i),
            c if c < 0 => node.l(),
            _ => node.r(),
        };
    }
    None
}

/// Like [`find`], but falls back to the greatest node ordered below `elem`.
pub fn find_or_next_lower<E, N, C>(
    arena: &[N],
    root: Option<u32>,
    elem: &E,
    comparator: &C,
) -> Option<u32>
where
    N: ElemNode<E>,
    C: Fn(&E, &E) -> i32,
{
    let mut below = None;
    let mut curr = root;
    while let Some(i) = curr {
        let node = &arena[i as usize];
        match comparator(elem, node.elem()) {
            0 => return Some(i),
            c if c < 0 => curr = node.l(),
            _ => {
                below = Some(i);
                curr = node.r();
            }
        }
    }
    below
}
