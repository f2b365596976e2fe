#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving stable keys and display labels from OpenAPI paths
//! and tags.

use regex::Regex;
use std::sync::OnceLock;

/// Fallback slug for input with no alphanumeric characters.
pub const FALLBACK_SLUG: &str = "misc";

/// Fallback label for tags that humanize to nothing.
pub const FALLBACK_LABEL: &str = "Misc";

/// Lower-cases `s` and joins its alphanumeric runs with single hyphens.
///
/// Never returns an empty string: input without any `[a-z0-9]` yields [`FALLBACK_SLUG`].
///
/// e.g. `PUT-/admins/id` -> `put-admins-id`
pub fn slugify(s: &str) -> String {
    static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();
    let non_alnum =
        NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex"));

    let lowered = s.to_lowercase();
    let slug = non_alnum.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Turns a tag such as `AdminKycJobController` into a display label (`Kyc Job`).
///
/// Steps, in order: split lower->upper boundaries, drop a trailing `Controller`,
/// drop a leading `Admin` word, collapse whitespace, trim. Empty results become
/// [`FALLBACK_LABEL`].
pub fn humanize_tag(tag: &str) -> String {
    static CAMEL_RE: OnceLock<Regex> = OnceLock::new();
    static CONTROLLER_RE: OnceLock<Regex> = OnceLock::new();
    static ADMIN_RE: OnceLock<Regex> = OnceLock::new();
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

    let camel = CAMEL_RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid regex"));
    // Acronyms run straight into the suffix (`SMSController`), so no word boundary.
    let controller =
        CONTROLLER_RE.get_or_init(|| Regex::new(r"Controller$").expect("Invalid regex"));
    let admin = ADMIN_RE.get_or_init(|| Regex::new(r"^Admin\b").expect("Invalid regex"));
    let whitespace = WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex"));

    let spaced = camel.replace_all(tag, "$1 $2");
    let spaced = controller.replace(&spaced, "");
    let spaced = admin.replace(&spaced, "");
    let collapsed = whitespace.replace_all(&spaced, " ");
    let label = collapsed.trim();
    if label.is_empty() {
        FALLBACK_LABEL.to_string()
    } else {
        label.to_string()
    }
}

/// Removes the API root `prefix` from `path`, defaulting to `/` when nothing is left.
pub fn strip_api_prefix(path: &str, prefix: &str) -> String {
    let stripped = if prefix.is_empty() {
        path
    } else {
        path.strip_prefix(prefix).unwrap_or(path)
    };
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Names of `{param}` tokens in a path template, in order of appearance.
pub fn extract_path_params(path: &str) -> Vec<String> {
    static PATH_PARAM_RE: OnceLock<Regex> = OnceLock::new();
    let path_param =
        PATH_PARAM_RE.get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("Invalid regex"));

    path_param
        .captures_iter(path)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Derives the catalog key of an operation, e.g. `PUT /admins/{id}` -> `put-admins-id`.
pub fn operation_key(method: &str, path: &str) -> String {
    let bare = path.replace(['{', '}'], "");
    slugify(&format!("{}-{}", method, bare))
}
