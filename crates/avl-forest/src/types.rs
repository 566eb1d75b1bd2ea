//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena. Every link is an `Option<u32>` index
//! into that arena, and all tree-manipulation functions take the arena as a
//! slice and work with indices.
//!
//! - [`Node`]: structural links (`p`, `l`, `r`).
//! - [`HeightNode`]: the auxiliary slot the rebalancer uses as a cached
//!   subtree height.
//! - [`ElemNode`]: access to the stored element, used by comparator-driven
//!   placement only.

/// Structural links (`p`, `l`, `r`).
///
/// The parent link is a back-reference for upward walks; the arena, not the
/// parent, owns the node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    #[inline]
    fn has_l(&self) -> bool {
        self.l().is_some()
    }

    #[inline]
    fn has_r(&self) -> bool {
        self.r().is_some()
    }

    /// Existing children, left first.
    fn children(&self) -> impl Iterator<Item = u32> {
        self.l().into_iter().chain(self.r())
    }
}

/// Auxiliary numeric slot holding a cached subtree height.
pub trait HeightNode: Node {
    fn h(&self) -> i32;
    fn set_h(&mut self, h: i32);
}

/// Element access for ordered placement.
pub trait ElemNode<E>: Node {
    fn elem(&self) -> &E;
    fn elem_mut(&mut self) -> &mut E;
}
