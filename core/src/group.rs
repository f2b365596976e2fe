#![deny(missing_docs)]

//! # Domain Grouping
//!
//! Buckets extracted operations into [`Domain`]s by exact tag and orders the
//! result deterministically, independent of input order:
//! - operations by `(path, method)`,
//! - domains by `label`, then `tag`.

use crate::models::{Domain, TaggedOperation};
use crate::naming::{humanize_tag, slugify};
use indexmap::IndexMap;

/// Groups operations by tag into sorted domains.
pub fn group_operations(operations: Vec<TaggedOperation>) -> Vec<Domain> {
    let mut buckets: IndexMap<String, Vec<_>> = IndexMap::new();
    for TaggedOperation { tag, operation } in operations {
        buckets.entry(tag).or_default().push(operation);
    }

    let mut domains: Vec<Domain> = buckets
        .into_iter()
        .map(|(tag, mut operations)| {
            operations.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));
            Domain {
                key: slugify(&tag),
                label: humanize_tag(&tag),
                tag,
                operations,
            }
        })
        .collect();

    domains.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.tag.cmp(&b.tag)));
    domains
}
