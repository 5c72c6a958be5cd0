//! Byte-level helpers shared by the loader and query engine: lenient
//! token/string comparison, bounded copying, and numeric conversion.
//!
//! None of these allocate or touch the source buffer beyond reading it.

use crate::directive::{Directive, GO_NUM};
use crate::token::Token;

/// Byte-wise equality over `min(token.len, s.len())`. Deliberately
/// prefix-tolerant: a 3-byte token matches the first 3 bytes of a longer
/// string. This is load-bearing for [`crate::query::query`]'s key
/// lookup and is not treated as a defect.
pub fn tok_eq_str(tok: &Token, s: &str) -> bool {
    tok_eq_bytes(tok, s.as_bytes())
}

pub fn tok_eq_bytes(tok: &Token, other: &[u8]) -> bool {
    let n = tok.str.len().min(other.len());
    tok.str[..n] == other[..n]
}

pub fn tok_eq_tok(a: &Token, b: &Token) -> bool {
    tok_eq_bytes(a, b.str)
}

/// Copies at most `dst.len() - 1` bytes of `tok` into `dst`, leaving
/// room the way a C-string NUL terminator would even though this API
/// never writes one. Returns the number of bytes copied.
pub fn copy_bounded(tok: &Token, dst: &mut [u8]) -> usize {
    let max = dst.len().saturating_sub(1);
    let n = tok.str.len().min(max);
    dst[..n].copy_from_slice(&tok.str[..n]);
    n
}

fn parse_signed_int(bytes: &[u8]) -> Option<i64> {
    if bytes.is_empty() {
        return None;
    }
    let (sign, digits): (i64, &[u8]) = match bytes[0] {
        b'-' => (-1, &bytes[1..]),
        b'+' => (1, &bytes[1..]),
        _ => (1, bytes),
    };
    if digits.is_empty() {
        return None;
    }
    let mut value: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (b - b'0') as i64;
    }
    Some(sign * value)
}

fn parse_frac(bytes: &[u8]) -> Option<f64> {
    let mut value = 0.0f64;
    let mut scale = 0.1f64;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        value += (b - b'0') as f64 * scale;
        scale *= 0.1;
    }
    Some(value)
}

struct Split<'a> {
    int_part: &'a [u8],
    frac_part: Option<&'a [u8]>,
    exp_part: Option<&'a [u8]>,
}

/// Walks `bytes` through [`GO_NUM`] to locate (at most) one `.` and one
/// `e`/`E` boundary, the same table the source uses to drive numeric
/// conversion. A second `.` or `e`, or any byte outside the table's
/// recognized set, faults the split.
fn split_number(bytes: &[u8]) -> Option<Split<'_>> {
    let mut dot_pos = None;
    let mut exp_pos = None;

    for (i, &b) in bytes.iter().enumerate() {
        match GO_NUM[b as usize] {
            Directive::NumLoop => {}
            Directive::NumFlt => {
                if dot_pos.is_some() || exp_pos.is_some() {
                    return None;
                }
                dot_pos = Some(i);
            }
            Directive::NumExp => {
                if exp_pos.is_some() {
                    return None;
                }
                exp_pos = Some(i);
            }
            Directive::NumBreak => break,
            _ => return None,
        }
    }

    let int_end = dot_pos.or(exp_pos).unwrap_or(bytes.len());
    let int_part = &bytes[..int_end];

    let frac_part = dot_pos.map(|d| {
        let frac_end = exp_pos.unwrap_or(bytes.len());
        &bytes[d + 1..frac_end]
    });

    let exp_part = exp_pos.map(|e| &bytes[e + 1..]);

    Some(Split {
        int_part,
        frac_part,
        exp_part,
    })
}

/// Converts a `Number` token's bytes into an `f64`, splitting at most
/// once on `.` and once on `e`/`E`. Returns `None` on malformed
/// structure (e.g. a `.` appearing after `e`, or an empty mantissa).
pub fn to_f64(tok: &Token) -> Option<f64> {
    let split = split_number(tok.str)?;

    let int_val = parse_signed_int(split.int_part)?;
    let frac_val = match split.frac_part {
        Some(f) => parse_frac(f)?,
        None => 0.0,
    };
    let exp_val = match split.exp_part {
        Some(e) => parse_signed_int(e)?,
        None => 0,
    };

    let sign = if int_val < 0 { -1.0 } else { 1.0 };
    let mantissa = int_val as f64 + sign * frac_val;
    Some(mantissa * 10f64.powi(exp_val as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn num(s: &'static str) -> Token<'static> {
        Token {
            kind: TokenKind::Number,
            str: s.as_bytes(),
            len: s.len(),
            children: 0,
            sub: 0,
        }
    }

    #[test]
    fn plain_integer() {
        assert_eq!(to_f64(&num("42")), Some(42.0));
        assert_eq!(to_f64(&num("-7")), Some(-7.0));
    }

    #[test]
    fn decimal() {
        assert_eq!(to_f64(&num("1.5")), Some(1.5));
        assert_eq!(to_f64(&num("-2.25")), Some(-2.25));
    }

    #[test]
    fn scenario_3_exponents() {
        assert_eq!(to_f64(&num("1.5e1")), Some(15.0));
        assert_eq!(to_f64(&num("1e-3")), Some(1e-3));
    }

    #[test]
    fn malformed_returns_none() {
        assert_eq!(to_f64(&num("1.2.3")), None);
        assert_eq!(to_f64(&num("1e2.3")), None);
    }

    #[test]
    fn lenient_prefix_compare() {
        let t = Token {
            kind: TokenKind::String,
            str: b"abc",
            len: 3,
            children: 0,
            sub: 0,
        };
        assert!(tok_eq_str(&t, "abcdef"));
        assert!(!tok_eq_str(&t, "xyz"));
    }

    #[test]
    fn bounded_copy_truncates() {
        let t = Token {
            kind: TokenKind::String,
            str: b"hello",
            len: 5,
            children: 0,
            sub: 0,
        };
        let mut dst = [0u8; 3];
        let n = copy_bounded(&t, &mut dst);
        assert_eq!(n, 2);
        assert_eq!(&dst, &[b'h', b'e', 0]);
    }

    #[test]
    fn bounded_copy_handles_zero_length_dst() {
        let t = Token {
            kind: TokenKind::String,
            str: b"x",
            len: 1,
            children: 0,
            sub: 0,
        };
        let mut dst: [u8; 0] = [];
        assert_eq!(copy_bounded(&t, &mut dst), 0);
    }
}
