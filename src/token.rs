//! Flat token representation. A `Token<'a>` never owns bytes — it borrows
//! a range of the caller's source buffer, so the crate never copies or
//! interns string data during tokenization.

/// What kind of lexical unit a [`Token`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    None,
    Object,
    Array,
    Number,
    String,
    True,
    False,
    Null,
}

impl Default for TokenKind {
    fn default() -> Self {
        TokenKind::None
    }
}

/// One lexical unit borrowed from the source document.
///
/// `str`/`len` describe a byte range inside the buffer that produced this
/// token. For `Object`/`Array`, the range spans the opening bracket
/// through the matching closing one, inclusive. For `String`, the quotes
/// are stripped. `children` counts direct members (pairs for an object,
/// elements for an array); `sub` counts every descendant token in
/// pre-order, so a container's subtree occupies indices `[i, i + sub]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub str: &'a [u8],
    pub len: usize,
    pub children: usize,
    pub sub: usize,
}

impl<'a> Token<'a> {
    pub const NULL: Token<'static> = Token {
        kind: TokenKind::None,
        str: &[],
        len: 0,
        children: 0,
        sub: 0,
    };

    pub fn is_container(&self) -> bool {
        matches!(self.kind, TokenKind::Object | TokenKind::Array)
    }

    /// Index of this token's next sibling in a flat pre-order array,
    /// relative to its own index `i`.
    pub fn sibling_offset(&self) -> usize {
        self.sub + 1
    }

    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.str).ok()
    }
}

/// A key/value bundle returned by [`crate::reader::Reader::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'a> {
    pub name: Token<'a>,
    pub value: Token<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_token_has_zero_fields() {
        let t = Token::NULL;
        assert_eq!(t.kind, TokenKind::None);
        assert_eq!(t.len, 0);
        assert_eq!(t.children, 0);
        assert_eq!(t.sub, 0);
    }

    #[test]
    fn sibling_offset_accounts_for_descendants() {
        let t = Token {
            kind: TokenKind::Array,
            str: b"[1,2]",
            len: 5,
            children: 2,
            sub: 2,
        };
        assert_eq!(t.sibling_offset(), 3);
    }
}
