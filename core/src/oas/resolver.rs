#![deny(missing_docs)]

//! # Schema Resolver
//!
//! Dereferences `$ref` nodes and collapses `allOf` against an explicit schema table.
//!
//! `allOf` resolves to its **first member only**. Properties contributed by the other
//! members are not merged in, so samples for composed schemas can be smaller than
//! the real request shape.
//!
//! Every dereference hop consumes one unit of the caller's depth budget, and no hop is
//! taken once the budget is exceeded. A chain that outlives the budget, or a reference
//! cycle with no concrete node in it, resolves to [`SchemaNode::Unknown`].

use crate::oas::schema::{SchemaNode, SchemaTable};

static UNKNOWN: SchemaNode = SchemaNode::Unknown;

/// Resolves `node` until it is neither a reference nor a composition.
///
/// # Arguments
///
/// * `node` - The schema node to resolve.
/// * `table` - Named schemas the references point into.
/// * `depth` - Depth already consumed by the caller.
/// * `max_depth` - Ceiling shared with sample synthesis.
pub fn resolve<'a>(
    node: &'a SchemaNode,
    table: &'a SchemaTable,
    depth: usize,
    max_depth: usize,
) -> &'a SchemaNode {
    let mut current = node;
    let mut depth = depth;

    loop {
        match current {
            SchemaNode::Reference(_) | SchemaNode::AllOf(_) if depth > max_depth => {
                return &UNKNOWN;
            }
            SchemaNode::Reference(name) => match table.get(name) {
                Some(target) => current = target,
                None => {
                    tracing::debug!(schema = %name, "unresolved schema reference");
                    return &UNKNOWN;
                }
            },
            SchemaNode::AllOf(members) => match members.first() {
                Some(first) => current = first,
                None => return &UNKNOWN,
            },
            concrete => return concrete,
        }
        depth += 1;
    }
}
