#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for turning `$ref` strings into component names.
//!
//! Only document-local references are followed. We never fetch external documents,
//! so a remote reference degrades to its last path segment and will usually miss
//! the component table.

use percent_encoding::percent_decode_str;

/// Extracts a component name from a `$ref` pointing at `#/components/{section}/{name}`.
///
/// Returns `None` if the reference is not local or targets another section.
pub(crate) fn extract_component_name(ref_str: &str, section: &str) -> Option<String> {
    let pointer = ref_str.strip_prefix('#')?.trim_start_matches('/');
    let segments: Vec<&str> = pointer.split('/').collect();

    if segments.len() != 3 {
        return None;
    }
    if segments[0] != "components" || segments[1] != section {
        return None;
    }

    let name = decode_pointer_segment(segments[2]);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Resolves a schema `$ref` to the name used as a key in the schema table.
///
/// `#/components/schemas/User` yields `User`. Any other shape falls back to the
/// decoded last path segment, which lets `definitions`-style or remote refs still
/// hit a same-named local schema.
pub(crate) fn schema_ref_name(ref_str: &str) -> String {
    if let Some(name) = extract_component_name(ref_str, "schemas") {
        return name;
    }
    let last = ref_str.rsplit(['/', '#']).next().unwrap_or(ref_str);
    decode_pointer_segment(last)
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_component_name_success() {
        let name = extract_component_name("#/components/parameters/Limit", "parameters");
        assert_eq!(name.as_deref(), Some("Limit"));
    }

    #[test]
    fn test_extract_component_name_wrong_section() {
        let name = extract_component_name("#/components/responses/Limit", "parameters");
        assert!(name.is_none());
    }

    #[test]
    fn test_extract_component_name_remote() {
        let name = extract_component_name(
            "https://example.com/openapi.yaml#/components/schemas/User",
            "schemas",
        );
        assert!(name.is_none());
    }

    #[test]
    fn test_schema_ref_name_fallbacks() {
        assert_eq!(schema_ref_name("#/components/schemas/User"), "User");
        assert_eq!(schema_ref_name("#/definitions/Legacy"), "Legacy");
        assert_eq!(
            schema_ref_name("https://example.com/openapi.yaml#/components/schemas/Remote"),
            "Remote"
        );
    }

    #[test]
    fn test_decode_pointer_segment_percent_encoding() {
        let decoded = decode_pointer_segment("User%20Profile~1details");
        assert_eq!(decoded, "User Profile/details");
    }
}
