//! Guarded text replacement.
//!
//! Every mutation in this crate rewrites schema text through one of these two
//! primitives. Both fail with [`EditError::PatternNotFound`] when the target
//! is absent instead of silently returning the input unchanged, so a caller
//! can never believe a rewrite happened when it did not.

use regex_lite::Regex;

use crate::error::{EditError, EditResult};

/// Replace the first match of `pattern` in `content`.
///
/// The replacement string may use `${n}` to expand capture groups.
pub fn replace_matching(content: &str, pattern: &Regex, replacement: &str) -> EditResult<String> {
    if !pattern.is_match(content) {
        return Err(EditError::pattern_not_found(pattern.as_str()));
    }
    Ok(pattern.replace(content, replacement).into_owned())
}

/// Replace the first occurrence of the exact substring `anchor` in `content`.
///
/// Anchoring on a substring captured during parsing, rather than re-matching
/// a broad pattern, is what keeps rewrites from touching similar-looking text
/// elsewhere in the file.
pub fn replace_anchored(content: &str, anchor: &str, replacement: &str) -> EditResult<String> {
    if !content.contains(anchor) {
        return Err(EditError::pattern_not_found(anchor));
    }
    Ok(content.replacen(anchor, replacement, 1))
}
