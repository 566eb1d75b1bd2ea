use thiserror::Error;

use crate::types::{ElemNode, HeightNode};
use crate::util::{first, get_l, get_p, get_r, next};

use super::rebalance::height;

/// First invariant violation found by [`assert_avl_tree`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("root has a parent")]
    RootHasParent,
    #[error("broken parent link below node {node}")]
    BrokenParentLink { node: u32 },
    #[error("node {node} caches height {cached}, actual height is {actual}")]
    HeightMismatch { node: u32, cached: i32, actual: i32 },
    #[error("node {node} is unbalanced: left height {left}, right height {right}")]
    Unbalanced { node: u32, left: i32, right: i32 },
    #[error("node {node} is out of order")]
    OrderViolated { node: u32 },
}

/// Checks links, cached heights and balance below `node`, returning the
/// actual height of the subtree.
fn validate_links_and_heights<N: HeightNode>(arena: &[N], node: u32) -> Result<i32, TreeError> {
    let l = get_l(arena, node);
    let r = get_r(arena, node);

    let mut lh = -1;
    if let Some(l) = l {
        if get_p(arena, l) != Some(node) {
            return Err(TreeError::BrokenParentLink { node });
        }
        lh = validate_links_and_heights(arena, l)?;
    }
    let mut rh = -1;
    if let Some(r) = r {
        if get_p(arena, r) != Some(node) {
            return Err(TreeError::BrokenParentLink { node });
        }
        rh = validate_links_and_heights(arena, r)?;
    }

    let actual = 1 + lh.max(rh);
    let cached = height(arena, Some(node));
    if cached != actual {
        return Err(TreeError::HeightMismatch {
            node,
            cached,
            actual,
        });
    }
    if (lh - rh).abs() > 1 {
        return Err(TreeError::Unbalanced {
            node,
            left: lh,
            right: rh,
        });
    }

    Ok(actual)
}

/// Verifies every structural invariant of an AVL tree: parent links,
/// cached heights against heights recomputed from scratch, the balance
/// condition, and strictly increasing in-order elements.
pub fn assert_avl_tree<E, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), TreeError>
where
    N: HeightNode + ElemNode<E>,
    C: Fn(&E, &E) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err(TreeError::RootHasParent);
    }

    validate_links_and_heights(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].elem(), arena[i as usize].elem()) >= 0 {
                return Err(TreeError::OrderViolated { node: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
