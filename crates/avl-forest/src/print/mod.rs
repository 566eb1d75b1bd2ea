//! Text dumps of arena trees.

use std::fmt::{Debug, Write};

use crate::types::{ElemNode, HeightNode};

/// Dumps the subtree under `node`, one node per line, with its cached height.
///
/// `tab` is the indentation that continuation lines start with. A node with
/// a single child still lists the missing side as `∅`.
///
/// ```text
/// 1 (h=1)
/// ├─ L: 0 (h=0)
/// └─ R: 2 (h=0)
/// ```
pub fn print<E, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    E: Debug,
    N: HeightNode + ElemNode<E>,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i as usize];
    let mut out = format!("{:?} (h={})", n.elem(), n.h());
    if !n.has_l() && !n.has_r() {
        return out;
    }

    for (label, child, closing) in [("L", n.l(), false), ("R", n.r(), true)] {
        let (branch, rail) = if closing { ("└─", ' ') } else { ("├─", '│') };
        let sub = print::<E, N>(arena, child, &format!("{tab}{rail}  "));
        // Writing into a String cannot fail.
        let _ = write!(out, "\n{tab}{branch} {label}: {sub}");
    }
    out
}
