use crate::types::{ElemNode, HeightNode, Node};

/// Arena node of an AVL tree.
#[derive(Clone, Debug)]
pub struct AvlNode<E> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub e: E,
    /// Cached height of the subtree rooted here. A fresh leaf starts at `0`.
    pub h: i32,
}

impl<E> AvlNode<E> {
    pub fn new(e: E) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            e,
            h: 0,
        }
    }
}

impl<E> Node for AvlNode<E> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<E> HeightNode for AvlNode<E> {
    fn h(&self) -> i32 {
        self.h
    }

    fn set_h(&mut self, h: i32) {
        self.h = h;
    }
}

impl<E> ElemNode<E> for AvlNode<E> {
    fn elem(&self) -> &E {
        &self.e
    }

    fn elem_mut(&mut self) -> &mut E {
        &mut self.e
    }
}
