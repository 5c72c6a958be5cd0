//! Drives the tokenizer to fill a caller-supplied token array in
//! document pre-order.
//!
//! [`load`] recurses once per container by re-scanning the container's
//! *interior* — its byte span with the outer brace/bracket stripped
//! from both ends — which is what lets a single, call-local-depth
//! [`crate::reader::Reader::read`] stand in for a literal cross-call
//! iterator without re-deriving a container's own span twice. See
//! `DESIGN.md` for the trace that justifies this against the documented
//! end-to-end scenarios.

use log::warn;

use crate::error::Status;
use crate::reader::Reader;
use crate::token::Token;

/// Number of flat tokens `bytes` will expand into. Callers use this to
/// size the array passed to [`load`].
pub fn num(bytes: &[u8]) -> usize {
    let mut r = Reader::new(bytes);
    let mut count = 0;
    while let Some(t) = r.read() {
        count += 1 + t.sub;
    }
    count
}

fn interior<'a>(t: &Token<'a>) -> Option<&'a [u8]> {
    if t.is_container() && t.str.len() >= 2 {
        Some(&t.str[1..t.str.len() - 1])
    } else {
        None
    }
}

/// Populates `toks` in pre-order, advancing `read_idx` as it goes.
/// Recurses on the native call stack once per nested container — use
/// [`load_iterative`] instead when input nesting depth is untrusted.
pub fn load<'a>(toks: &mut [Token<'a>], read_idx: &mut usize, bytes: &'a [u8]) -> Result<(), Status> {
    if toks.is_empty() {
        return Err(Status::Invalid);
    }

    let mut r = Reader::new(bytes);
    while let Some(t) = r.read() {
        if *read_idx >= toks.len() {
            warn!(
                "loader out of capacity: needed slot {} of {}",
                *read_idx,
                toks.len()
            );
            return Err(Status::OutOfToken);
        }
        let inner = interior(&t);
        toks[*read_idx] = t;
        *read_idx += 1;
        if let Some(inner) = inner {
            load(toks, read_idx, inner)?;
        }
    }

    if r.err {
        return Err(Status::ParseError);
    }
    Ok(())
}

/// Equivalent to [`load`] but trades native recursion for an explicit,
/// heap-allocated stack of in-flight readers, so adversarially deep
/// nesting can't blow the call stack.
pub fn load_iterative<'a>(
    toks: &mut [Token<'a>],
    read_idx: &mut usize,
    bytes: &'a [u8],
) -> Result<(), Status> {
    if toks.is_empty() {
        return Err(Status::Invalid);
    }

    let mut stack: Vec<Reader<'a>> = vec![Reader::new(bytes)];
    while let Some(mut r) = stack.pop() {
        match r.read() {
            Some(t) => {
                if *read_idx >= toks.len() {
                    warn!(
                        "loader out of capacity: needed slot {} of {}",
                        *read_idx,
                        toks.len()
                    );
                    return Err(Status::OutOfToken);
                }
                let inner = interior(&t);
                toks[*read_idx] = t;
                *read_idx += 1;
                stack.push(r);
                if let Some(inner) = inner {
                    stack.push(Reader::new(inner));
                }
            }
            None => {
                if r.err {
                    return Err(Status::ParseError);
                }
                // frame exhausted; don't push it back.
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};

    fn load_fixture(src: &'static [u8]) -> Vec<Token<'static>> {
        let n = num(src);
        let mut toks = vec![Token::NULL; n];
        let mut idx = 0;
        load(&mut toks, &mut idx, src).unwrap();
        assert_eq!(idx, n);
        toks
    }

    #[test]
    fn scenario_1_flat_layout() {
        let toks = load_fixture(br#"{"a":1,"b":"hi"}"#);
        assert_eq!(toks.len(), 5);
        assert_eq!(toks[0].kind, TokenKind::Object);
        assert_eq!(toks[0].children, 2);
        assert_eq!(toks[0].sub, 4);
        assert_eq!(toks[1].kind, TokenKind::String);
        assert_eq!(toks[1].str, b"a");
        assert_eq!(toks[2].kind, TokenKind::Number);
        assert_eq!(toks[2].str, b"1");
        assert_eq!(toks[3].str, b"b");
        assert_eq!(toks[4].str, b"hi");
    }

    #[test]
    fn scenario_5_nested_array_layout() {
        let toks = load_fixture(b"[[1,2],[3,4]]");
        assert_eq!(toks.len(), 7);
        assert_eq!(toks[0].kind, TokenKind::Array);
        assert_eq!(toks[0].children, 2);
        assert_eq!(toks[0].sub, 6);
        assert_eq!(toks[1].kind, TokenKind::Array);
        assert_eq!(toks[1].children, 2);
        assert_eq!(toks[1].sub, 2);
        assert_eq!(toks[2].str, b"1");
        assert_eq!(toks[3].str, b"2");
        assert_eq!(toks[4].kind, TokenKind::Array);
        assert_eq!(toks[5].str, b"3");
        assert_eq!(toks[6].str, b"4");
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let mut toks: Vec<Token> = Vec::new();
        let mut idx = 0;
        assert_eq!(load(&mut toks, &mut idx, b"1").unwrap_err(), Status::Invalid);
    }

    #[test]
    fn undersized_array_reports_out_of_token() {
        let src = br#"{"a":1,"b":2}"#;
        let mut toks = vec![Token::NULL; 2];
        let mut idx = 0;
        assert_eq!(
            load(&mut toks, &mut idx, src).unwrap_err(),
            Status::OutOfToken
        );
    }

    #[test]
    fn recursive_and_iterative_loaders_agree() {
        let src: &[u8] = br#"{"xs":[1,2,[3,4]],"y":{"z":true}}"#;
        let n = num(src);

        let mut a = vec![Token::NULL; n];
        let mut ai = 0;
        load(&mut a, &mut ai, src).unwrap();

        let mut b = vec![Token::NULL; n];
        let mut bi = 0;
        load_iterative(&mut b, &mut bi, src).unwrap();

        assert_eq!(ai, bi);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_containers_load_as_single_token() {
        assert_eq!(num(b"{}"), 1);
        assert_eq!(num(b"[]"), 1);
    }
}
