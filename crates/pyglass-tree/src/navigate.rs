//! Ancestor-chain and position queries over a linked parse tree.
//!
//! Every query here is a pure read-only walk: downward through the generic
//! child enumerator ([`ParseTree::children`]) for the offset search, upward
//! through parent back-references for the enclosure and containment
//! queries. Termination is guaranteed by the tree invariant that parent
//! links are acyclic and rooted at a [`Module`](crate::nodes::Module).
//!
//! Absence is an answer, not an error: an offset outside a node's span or a
//! position outside the file resolves to `None`.

use tracing::trace;

use pyglass_core::{LineIndex, Position};

use crate::nodes::{NodeId, NodeKind, ParseTree};

/// Length of the parent chain from `node` to the root, counting `node`
/// itself. The root has depth 1.
pub fn node_depth(tree: &ParseTree, node: NodeId) -> usize {
    let mut depth = 1;
    let mut current = node;
    while let Some(parent) = tree.parent(current) {
        depth += 1;
        current = parent;
    }
    depth
}

/// Find the deepest node under `node` whose span contains `offset`.
///
/// Containment is inclusive at both span boundaries. The search recurses
/// into the first containing child in document order; children of a
/// well-formed tree never overlap, so at most one child can match. `node`
/// itself is the fallback when no child contains the offset; `None` means
/// the offset lies outside `node` entirely.
pub fn find_node_by_offset(tree: &ParseTree, node: NodeId, offset: usize) -> Option<NodeId> {
    let found = find_by_offset_recursive(tree, node, offset);
    trace!(offset, found = ?found, "offset lookup");
    found
}

fn find_by_offset_recursive(tree: &ParseTree, node: NodeId, offset: usize) -> Option<NodeId> {
    if !tree[node].span.contains_offset(offset) {
        return None;
    }
    for child in tree.children(node) {
        if let Some(found) = find_by_offset_recursive(tree, child, offset) {
            return Some(found);
        }
    }
    Some(node)
}

/// Find the deepest node under `node` at a line:column position.
///
/// The position is converted through `lines` first; a position that does
/// not map into the file (line out of range, column past the end of its
/// line) short-circuits to `None` without walking the tree.
pub fn find_node_by_position(
    tree: &ParseTree,
    node: NodeId,
    position: Position,
    lines: &LineIndex,
) -> Option<NodeId> {
    let Some(offset) = lines.offset_at(position) else {
        trace!(%position, "position does not map to an offset");
        return None;
    };
    find_node_by_offset(tree, node, offset)
}

/// Find the closest `Class` ancestor of `node`.
///
/// The walk starts at `node`'s parent and ends without a match at the
/// enclosing `Module` (class scope never crosses a module boundary). With
/// `stop_at_function` set, a `Function` ancestor encountered before any
/// class also ends the walk.
pub fn enclosing_class(tree: &ParseTree, node: NodeId, stop_at_function: bool) -> Option<NodeId> {
    let mut current = tree.parent(node);
    while let Some(ancestor) = current {
        match &tree[ancestor].kind {
            NodeKind::Class(_) => return Some(ancestor),
            NodeKind::Module(_) => return None,
            NodeKind::Function(_) if stop_at_function => return None,
            _ => {}
        }
        current = tree.parent(ancestor);
    }
    None
}

/// Find the closest `Class` or `Module` ancestor of `node`.
///
/// Same walk as [`enclosing_class`], but the enclosing `Module` is itself a
/// match instead of a boundary.
pub fn enclosing_class_or_module(
    tree: &ParseTree,
    node: NodeId,
    stop_at_function: bool,
) -> Option<NodeId> {
    let mut current = tree.parent(node);
    while let Some(ancestor) = current {
        match &tree[ancestor].kind {
            NodeKind::Class(_) | NodeKind::Module(_) => return Some(ancestor),
            NodeKind::Function(_) if stop_at_function => return None,
            _ => {}
        }
        current = tree.parent(ancestor);
    }
    None
}

/// Find the closest `Function` ancestor of `node`.
///
/// A `Class` ancestor encountered first ends the walk: in the upward
/// direction a function does not implicitly enclose code on the other side
/// of a class body.
pub fn enclosing_function(tree: &ParseTree, node: NodeId) -> Option<NodeId> {
    let mut current = tree.parent(node);
    while let Some(ancestor) = current {
        match &tree[ancestor].kind {
            NodeKind::Function(_) => return Some(ancestor),
            NodeKind::Class(_) => return None,
            _ => {}
        }
        current = tree.parent(ancestor);
    }
    None
}

/// Whether `ancestor` appears on `node`'s parent chain.
///
/// The chain starts at `node`'s parent, so a node is never contained
/// within itself.
pub fn is_node_contained_within(tree: &ParseTree, node: NodeId, ancestor: NodeId) -> bool {
    let mut current = tree.parent(node);
    while let Some(candidate) = current {
        if candidate == ancestor {
            return true;
        }
        current = tree.parent(candidate);
    }
    false
}
