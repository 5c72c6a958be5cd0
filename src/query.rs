//! Dotted/bracketed path queries over a flat, pre-order token array.
//!
//! `toks[0]` is always the document root, so there is no separate
//! "virtual root" wrapper to thread through the walk — the root token's
//! own `children`/`sub` already describe the whole document, and the
//! very first path segment is matched against it directly, whether it's
//! a name (root is an object) or an index (root is an array).

use crate::scalar::tok_eq_str;
use crate::token::{Token, TokenKind};

/// Path delimiter between name segments. A single byte, fixed at
/// compile time — this crate has no runtime path-syntax configuration.
pub const PATH_DELIMITER: u8 = b'.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'p> {
    Name(&'p str),
    Index(usize),
}

fn parse_path(path: &str) -> Option<Vec<Segment<'_>>> {
    let delim = PATH_DELIMITER as char;
    let mut segs = Vec::new();
    let mut rest = path;

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix(delim) {
            rest = stripped;
            continue;
        }
        if let Some(after_bracket) = rest.strip_prefix('[') {
            let end = after_bracket.find(']')?;
            let idx: usize = after_bracket[..end].parse().ok()?;
            segs.push(Segment::Index(idx));
            rest = &after_bracket[end + 1..];
            continue;
        }
        let end = rest
            .find(|c| c == delim || c == '[')
            .unwrap_or(rest.len());
        if end == 0 {
            return None; // empty name segment, e.g. two dots in a row
        }
        segs.push(Segment::Name(&rest[..end]));
        rest = &rest[end..];
    }

    Some(segs)
}

/// Skip past element/value at `idx`, returning the index of what
/// follows it in pre-order (`idx`'s next sibling).
fn next_sibling(toks: &[Token], idx: usize) -> usize {
    idx + 1 + toks[idx].sub
}

/// Resolves `path` against a loaded token array. `path = None` (or the
/// empty string) returns the document root.
pub fn query<'a>(toks: &[Token<'a>], path: Option<&str>) -> Option<Token<'a>> {
    if toks.is_empty() {
        return None;
    }
    let path = path.unwrap_or("");
    if path.is_empty() {
        return Some(toks[0]);
    }

    let segments = parse_path(path)?;
    let mut cur = 0usize;

    for seg in segments {
        let container = toks[cur];
        match seg {
            Segment::Index(n) => {
                if container.kind != TokenKind::Array || n >= container.children {
                    return None;
                }
                let mut elem = cur + 1;
                for _ in 0..n {
                    elem = next_sibling(toks, elem);
                }
                cur = elem;
            }
            Segment::Name(name) => {
                if container.kind != TokenKind::Object {
                    return None;
                }
                let mut key = cur + 1;
                let mut found = None;
                for _ in 0..container.children {
                    if tok_eq_str(&toks[key], name) {
                        found = Some(key + 1);
                        break;
                    }
                    key = next_sibling(toks, key + 1);
                }
                cur = found?;
            }
        }
    }

    Some(toks[cur])
}

/// Resolves `path` and, if it names a `Number`, converts it. The kind
/// is always returned so callers can distinguish "wrong type" from
/// "malformed number" from "no such path".
pub fn query_number(toks: &[Token], path: Option<&str>) -> (TokenKind, Option<f64>) {
    match query(toks, path) {
        Some(t) if t.kind == TokenKind::Number => (TokenKind::Number, crate::scalar::to_f64(&t)),
        Some(t) => (t.kind, None),
        None => (TokenKind::None, None),
    }
}

/// Resolves `path`, requires a `String`, and bounded-copies its bytes
/// into `dst`. Returns the resolved kind and the number of bytes
/// copied (`0` unless the kind is `String`).
pub fn query_string(dst: &mut [u8], toks: &[Token], path: Option<&str>) -> (TokenKind, usize) {
    match query(toks, path) {
        Some(t) if t.kind == TokenKind::String => {
            (TokenKind::String, crate::scalar::copy_bounded(&t, dst))
        }
        Some(t) => (t.kind, 0),
        None => (TokenKind::None, 0),
    }
}

pub fn query_type(toks: &[Token], path: Option<&str>) -> TokenKind {
    query(toks, path).map(|t| t.kind).unwrap_or(TokenKind::None)
}
