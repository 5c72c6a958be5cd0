//! Streaming tokenizer. [`Reader::read`] resolves one complete entity —
//! a scalar lexeme, or an entire container together with everything
//! nested inside it — per call, using a depth counter that starts fresh
//! at zero every time `read` is invoked. [`crate::loader`] is what turns
//! repeated calls into a flat, fully-annotated token array.

use log::warn;

use crate::directive::{Directive, GO_BARE, GO_ESC, GO_STRING, GO_STRUCT, GO_UTF8};
use crate::token::{Pair, Token, TokenKind};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Active {
    Struct,
    Bare,
    String,
    Utf8,
    Esc,
}

/// Cursor over a byte slice. `Copy`, not `Iterator` — every advance is an
/// explicit `read()` call rather than implicit `next()` state mutation,
/// matching the value-semantics iterator handle the source models.
#[derive(Clone, Copy)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    pub err: bool,
}

fn bare_kind(first: u8) -> TokenKind {
    match first {
        b't' => TokenKind::True,
        b'f' => TokenKind::False,
        b'n' => TokenKind::Null,
        _ => TokenKind::Number,
    }
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Reader {
            bytes,
            pos: 0,
            err: false,
        }
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Resolve the next complete entity. Returns `None` at end of input
    /// or once a prior call has faulted.
    pub fn read(&mut self) -> Option<Token<'a>> {
        if self.err {
            return None;
        }

        let mut active = Active::Struct;
        let mut depth: i64 = 0;
        let mut tok_start = self.pos;
        let mut started = false;
        let mut pending_kind = TokenKind::None;
        let mut children: usize = 0;
        let mut sub: usize = 0;
        let mut utf8_remain: u8 = 0;
        let mut str_start = self.pos;

        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            let directive = match active {
                Active::Struct => GO_STRUCT[byte as usize],
                Active::Bare => GO_BARE[byte as usize],
                Active::String => GO_STRING[byte as usize],
                Active::Utf8 => GO_UTF8[byte as usize],
                Active::Esc => GO_ESC[byte as usize],
            };

            match directive {
                Directive::Loop => {
                    self.pos += 1;
                }
                Directive::Sep => {
                    if depth == 1 {
                        children = children.saturating_sub(1);
                    }
                    self.pos += 1;
                }
                Directive::Up => {
                    if depth >= 1 {
                        sub += 1;
                        if depth == 1 {
                            children += 1;
                        }
                    } else {
                        tok_start = self.pos;
                        started = true;
                        pending_kind = if byte == b'{' {
                            TokenKind::Object
                        } else {
                            TokenKind::Array
                        };
                    }
                    depth += 1;
                    self.pos += 1;
                }
                Directive::Down => {
                    depth -= 1;
                    self.pos += 1;
                    if depth == 0 {
                        let len = self.pos - tok_start;
                        return Some(Token {
                            kind: pending_kind,
                            str: &self.bytes[tok_start..self.pos],
                            len,
                            children,
                            sub,
                        });
                    }
                }
                Directive::Qup => {
                    active = Active::String;
                    if depth == 0 {
                        started = true;
                        pending_kind = TokenKind::String;
                        str_start = self.pos + 1;
                    } else {
                        sub += 1;
                        if depth == 1 {
                            children += 1;
                        }
                    }
                    self.pos += 1;
                }
                Directive::Qdown => {
                    active = Active::Struct;
                    self.pos += 1;
                    if depth == 0 {
                        let len = self.pos - 1 - str_start;
                        return Some(Token {
                            kind: TokenKind::String,
                            str: &self.bytes[str_start..str_start + len],
                            len,
                            children: 0,
                            sub: 0,
                        });
                    }
                }
                Directive::Esc => {
                    active = Active::Esc;
                    self.pos += 1;
                }
                Directive::Unesc => {
                    active = Active::String;
                    self.pos += 1;
                }
                Directive::Bare => {
                    active = Active::Bare;
                    if depth == 0 {
                        tok_start = self.pos;
                        started = true;
                        pending_kind = bare_kind(byte);
                    } else {
                        sub += 1;
                        if depth == 1 {
                            children += 1;
                        }
                    }
                    self.pos += 1;
                }
                Directive::Unbare => {
                    active = Active::Struct;
                    if depth == 0 {
                        let len = self.pos - tok_start;
                        return Some(Token {
                            kind: pending_kind,
                            str: &self.bytes[tok_start..self.pos],
                            len,
                            children: 0,
                            sub: 0,
                        });
                    }
                    // re-dispatch this same byte under GO_STRUCT.
                }
                Directive::Utf8_2 => {
                    active = Active::Utf8;
                    utf8_remain = 1;
                    self.pos += 1;
                }
                Directive::Utf8_3 => {
                    active = Active::Utf8;
                    utf8_remain = 2;
                    self.pos += 1;
                }
                Directive::Utf8_4 => {
                    active = Active::Utf8;
                    utf8_remain = 3;
                    self.pos += 1;
                }
                Directive::Utf8Next => {
                    utf8_remain -= 1;
                    self.pos += 1;
                    if utf8_remain == 0 {
                        active = Active::String;
                    }
                }
                Directive::Failed | Directive::NumFailed | Directive::NumLoop
                | Directive::NumFlt | Directive::NumExp | Directive::NumBreak => {
                    warn!(
                        "tokenizer fault: byte {:#04x} unexpected in table",
                        byte
                    );
                    self.err = true;
                    return None;
                }
            }
        }

        // Ran off the end of the buffer mid-scan.
        if !started {
            return None;
        }
        if depth != 0 {
            warn!("tokenizer fault: unterminated container at end of input");
            self.err = true;
            return None;
        }
        match active {
            Active::Bare => {
                let len = self.pos - tok_start;
                Some(Token {
                    kind: pending_kind,
                    str: &self.bytes[tok_start..self.pos],
                    len,
                    children: 0,
                    sub: 0,
                })
            }
            Active::String => {
                warn!("tokenizer fault: unterminated string at end of input");
                self.err = true;
                None
            }
            _ => None,
        }
    }

    /// Two consecutive tokens bundled as a key/value pair.
    pub fn parse(&mut self) -> Option<Pair<'a>> {
        let name = self.read()?;
        let value = self.read()?;
        Some(Pair { name, value })
    }
}
