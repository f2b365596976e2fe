#![deny(missing_docs)]

//! # Operation Extraction
//!
//! Walks every path x method pair of an [`ApiDocument`] and builds one
//! [`Operation`] per pair. Nothing is skipped or merged here: cardinality of the
//! output equals cardinality of the input.

use crate::models::{Operation, TaggedOperation, DEFAULT_TAG};
use crate::naming::{extract_path_params, operation_key, strip_api_prefix};
use crate::oas::document::ApiDocument;
use crate::oas::shims::{ShimOperation, ShimParameter, ShimPathItem};
use crate::sample::SampleSynthesizer;

/// API root stripped from every path unless configured otherwise.
pub const DEFAULT_API_PREFIX: &str = "/admin-api";

/// Media type whose schema produces `sampleBody`.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Extracts every operation of `doc`, in document order.
///
/// `api_prefix` is stripped from each path template; request body samples come
/// from `synth`.
pub fn extract_operations(
    doc: &ApiDocument,
    synth: &SampleSynthesizer<'_>,
    api_prefix: &str,
) -> Vec<TaggedOperation> {
    let mut out = Vec::with_capacity(doc.operation_count());

    for (path_template, item) in &doc.paths {
        for (method, op) in item.operations() {
            out.push(build_operation(
                doc,
                synth,
                api_prefix,
                path_template,
                method,
                item,
                op,
            ));
        }
    }

    tracing::debug!(count = out.len(), "extracted operations");
    out
}

fn build_operation(
    doc: &ApiDocument,
    synth: &SampleSynthesizer<'_>,
    api_prefix: &str,
    path_template: &str,
    method: &str,
    item: &ShimPathItem,
    op: &ShimOperation,
) -> TaggedOperation {
    let method = method.to_uppercase();
    let path = strip_api_prefix(path_template, api_prefix);

    let tag = op
        .tags
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_TAG.to_string());

    let label = non_blank(op.summary.as_deref())
        .or_else(|| non_blank(op.operation_id.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", method, path));

    let query_params = collect_parameters(doc, item, op)
        .into_iter()
        .filter(|p| p.parameter_in == "query")
        .map(|p| p.name.clone())
        .collect();

    let body_schema = op
        .request_body
        .as_ref()
        .and_then(|body| doc.resolve_request_body(body))
        .and_then(|body| body.content.get(JSON_MEDIA_TYPE))
        .and_then(|media| media.schema.as_ref());
    let sample_body = body_schema.map(|schema| synth.render(schema));

    TaggedOperation {
        tag,
        operation: Operation {
            key: operation_key(&method, &path),
            path_params: extract_path_params(&path),
            has_body: sample_body.is_some(),
            sample_body,
            query_params,
            label,
            method,
            path,
        },
    }
}

/// Path-level parameters followed by operation-level ones.
///
/// An operation parameter with the same `name` and `in` replaces the path-level one
/// in place. Unresolvable references are dropped.
fn collect_parameters<'a>(
    doc: &'a ApiDocument,
    item: &'a ShimPathItem,
    op: &'a ShimOperation,
) -> Vec<&'a ShimParameter> {
    let mut params: Vec<&ShimParameter> = item
        .parameters
        .iter()
        .filter_map(|p| doc.resolve_parameter(p))
        .collect();

    for param in op.parameters.iter().filter_map(|p| doc.resolve_parameter(p)) {
        let existing = params
            .iter()
            .position(|p| p.name == param.name && p.parameter_in == param.parameter_in);
        match existing {
            Some(idx) => params[idx] = param,
            None => params.push(param),
        }
    }
    params
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
