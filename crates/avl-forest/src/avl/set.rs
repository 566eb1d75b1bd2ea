use std::fmt;

use log::trace;

use crate::bst::{self, Placement};
use crate::node::AvlNode;
use crate::print::print;
use crate::util::{find, find_or_next_lower, first, last, next, prev};

use super::rebalance::{height, rebalance_after_delete, rebalance_after_insert};
use super::validate::{assert_avl_tree, TreeError};

fn default_comparator<E: Ord>(a: &E, b: &E) -> i32 {
    a.cmp(b) as i32
}

/// Ordered set backed by an arena AVL tree.
///
/// Node indices handed out by [`first`](Self::first), [`next`](Self::next)
/// and friends stay valid until the next deletion.
pub struct AvlTreeSet<E, C = fn(&E, &E) -> i32>
where
    C: Fn(&E, &E) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<E>>,
    restructures: u64,
    last_restructures: u32,
}

impl<E> AvlTreeSet<E, fn(&E, &E) -> i32>
where
    E: Ord,
{
    /// Set ordered by `E`'s [`Ord`] implementation.
    ///
    /// Types with only a partial order (such as `f64`) go through
    /// [`with_comparator`](Self::with_comparator) with a total comparator,
    /// e.g. `f64::total_cmp`.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<E>)
    }
}

impl<E> Default for AvlTreeSet<E, fn(&E, &E) -> i32>
where
    E: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C> AvlTreeSet<E, C>
where
    C: Fn(&E, &E) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
            restructures: 0,
            last_restructures: 0,
        }
    }

    /// Inserts `elem`. Returns `false` if an equal element is already present.
    pub fn add(&mut self, elem: E) -> bool {
        self.last_restructures = 0;
        let n = self.arena.len() as u32;
        self.arena.push(AvlNode::new(elem));
        match bst::insert(&mut self.arena, self.root, n, &self.comparator) {
            Placement::Duplicate(_) => {
                self.arena.pop();
                false
            }
            Placement::Leaf { root } => {
                let out = rebalance_after_insert(&mut self.arena, root, n);
                self.root = out.root;
                self.record(out.restructures);
                true
            }
        }
    }

    /// Inserts every element of `elems`, returning how many were new.
    pub fn add_all<I: IntoIterator<Item = E>>(&mut self, elems: I) -> usize {
        let mut added = 0;
        for e in elems {
            if self.add(e) {
                added += 1;
            }
        }
        added
    }

    /// Removes the element equal to `elem` and returns it.
    pub fn take(&mut self, elem: &E) -> Option<E> {
        self.last_restructures = 0;
        let i = self.find(elem)?;
        let root = self.root.expect("found node implies a root");

        let unlinked = bst::unlink::<E, _>(&mut self.arena, root, i);
        let out = rebalance_after_delete(&mut self.arena, unlinked.root, unlinked.parent);
        self.record(out.restructures);

        let (node, root) = bst::release(&mut self.arena, out.root, unlinked.removed);
        self.root = root;
        Some(node.e)
    }

    /// Removes the element equal to `elem`. Returns `false` if it was absent.
    pub fn del(&mut self, elem: &E) -> bool {
        self.take(elem).is_some()
    }

    /// Drops every element. [`restructures`](Self::restructures) keeps its
    /// running total.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.last_restructures = 0;
    }

    fn record(&mut self, restructures: u32) {
        if restructures > 0 {
            trace!("{restructures} restructuring(s), size {}", self.arena.len());
        }
        self.last_restructures = restructures;
        self.restructures += u64::from(restructures);
    }

    pub fn has(&self, elem: &E) -> bool {
        self.find(elem).is_some()
    }

    pub fn find(&self, elem: &E) -> Option<u32> {
        find(&self.arena, self.root, elem, &self.comparator)
    }

    pub fn get_or_next_lower(&self, elem: &E) -> Option<u32> {
        find_or_next_lower(&self.arena, self.root, elem, &self.comparator)
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, `-1` when empty.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    /// Total trinode restructurings since the set was created.
    pub fn restructures(&self) -> u64 {
        self.restructures
    }

    /// Trinode restructurings performed by the most recent add or delete.
    pub fn last_restructures(&self) -> u32 {
        self.last_restructures
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        next(&self.arena, curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        prev(&self.arena, curr)
    }

    pub fn elem(&self, idx: u32) -> &E {
        &self.arena[idx as usize].e
    }

    /// Arena node at `idx`, for inspecting links and cached heights.
    pub fn node(&self, idx: u32) -> &AvlNode<E> {
        &self.arena[idx as usize]
    }

    pub fn iter(&self) -> Iter<'_, E, C> {
        Iter {
            set: self,
            curr: self.first(),
        }
    }

    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn assert_valid(&self) -> Result<(), TreeError> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    pub fn print(&self) -> String
    where
        E: fmt::Debug,
    {
        print::<E, _>(&self.arena, self.root, "")
    }
}

/// In-order iterator over the elements of an [`AvlTreeSet`].
pub struct Iter<'a, E, C>
where
    C: Fn(&E, &E) -> i32,
{
    set: &'a AvlTreeSet<E, C>,
    curr: Option<u32>,
}

impl<'a, E, C> Iterator for Iter<'a, E, C>
where
    C: Fn(&E, &E) -> i32,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = self.set.next(i);
        Some(self.set.elem(i))
    }
}

impl<'a, E, C> IntoIterator for &'a AvlTreeSet<E, C>
where
    C: Fn(&E, &E) -> i32,
{
    type Item = &'a E;
    type IntoIter = Iter<'a, E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> FromIterator<E> for AvlTreeSet<E, fn(&E, &E) -> i32>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_all(iter);
        set
    }
}

impl<E, C> Extend<E> for AvlTreeSet<E, C>
where
    C: Fn(&E, &E) -> i32,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<E, C> fmt::Display for AvlTreeSet<E, C>
where
    E: fmt::Debug,
    C: Fn(&E, &E) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<E, C> fmt::Debug for AvlTreeSet<E, C>
where
    E: fmt::Debug,
    C: Fn(&E, &E) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
