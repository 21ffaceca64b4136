//! Single-block locator for `datasource` blocks.
//!
//! The locator is an explicit two-phase scan rather than a regex with
//! lookaround: phase one finds live occurrences of the block keyword (any
//! occurrence behind a `//` on its own line is dead), phase two captures the
//! brace-delimited body, rejecting candidates with a nested `{`.

use smol_str::SmolStr;

use crate::error::{EditError, EditResult};

/// Keyword that introduces a datasource block.
const DATASOURCE_KEYWORD: &str = "datasource";

/// A located block: its identifier and the text between its braces.
///
/// `body` borrows from the scanned source, so any slice of it is also an
/// exact substring of the original text and can anchor a later replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'src> {
    /// The block identifier (`db` in `datasource db { ... }`).
    pub name: SmolStr,
    /// Verbatim body text, braces excluded.
    pub body: &'src str,
}

/// Find the single live `datasource` block in `source`.
///
/// Fails with [`EditError::NoDatasourceBlock`] when no live block exists and
/// with [`EditError::MultipleDatasourceBlocks`] when more than one does.
/// Ambiguity is never resolved by taking the first.
pub fn find_datasource_block(source: &str) -> EditResult<Block<'_>> {
    let mut blocks = scan_blocks(source, DATASOURCE_KEYWORD);
    match blocks.len() {
        0 => Err(EditError::NoDatasourceBlock),
        1 => Ok(blocks.remove(0)),
        count => Err(EditError::MultipleDatasourceBlocks { count }),
    }
}

/// Collect every live, well-formed `<keyword> <ident> { body }` occurrence.
fn scan_blocks<'src>(source: &'src str, keyword: &str) -> Vec<Block<'src>> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(start) = find_live_keyword(source, keyword, pos) {
        match read_block(source, start + keyword.len()) {
            Some((block, end)) => {
                blocks.push(block);
                pos = end;
            }
            // Malformed candidate (no braces, or nested `{`): skip past the
            // keyword and keep scanning.
            None => pos = start + keyword.len(),
        }
    }

    blocks
}

/// Find the next occurrence of `keyword` at or after `from` that starts a
/// statement and is not commented out on its line.
fn find_live_keyword(source: &str, keyword: &str, mut from: usize) -> Option<usize> {
    while let Some(rel) = source[from..].find(keyword) {
        let at = from + rel;
        from = at + keyword.len();

        // The keyword must be followed by whitespace, not glued to an ident.
        let followed = source[at + keyword.len()..]
            .chars()
            .next()
            .map_or(false, char::is_whitespace);
        if !followed {
            continue;
        }

        let line_start = source[..at].rfind('\n').map_or(0, |i| i + 1);
        let prefix = &source[line_start..at];

        // A `//` anywhere before the keyword on this line kills the candidate.
        if prefix.contains("//") {
            continue;
        }

        // The keyword must sit at the start of the line or after whitespace.
        if prefix.chars().next_back().is_some_and(|c| !c.is_whitespace()) {
            continue;
        }

        return Some(at);
    }

    None
}

/// Read `<ident> { body }` starting right after the keyword.
///
/// Returns the block and the offset just past the closing brace. Returns
/// `None` when the candidate is malformed or its body contains a nested `{`.
fn read_block(source: &str, mut pos: usize) -> Option<(Block<'_>, usize)> {
    // At least one whitespace character separates keyword and name.
    let rest = &source[pos..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }
    pos += rest.len() - trimmed.len();

    // Name: everything up to whitespace or `{`, non-empty.
    let name_len = source[pos..]
        .find(|c: char| c.is_whitespace() || c == '{')
        .unwrap_or(source.len() - pos);
    if name_len == 0 {
        return None;
    }
    let name = &source[pos..pos + name_len];
    pos += name_len;

    // Opening brace, optionally separated by whitespace.
    let rest = &source[pos..];
    let trimmed = rest.trim_start();
    pos += rest.len() - trimmed.len();
    if !trimmed.starts_with('{') {
        return None;
    }
    pos += 1;

    // Body runs to the next `}`; a nested `{` disqualifies the candidate.
    let rel = source[pos..].find(['{', '}'])?;
    if source[pos..].as_bytes()[rel] == b'{' {
        return None;
    }

    let block = Block {
        name: SmolStr::new(name),
        body: &source[pos..pos + rel],
    };
    Some((block, pos + rel + 1))
}
