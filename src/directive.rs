//! Classification tables driving the tokenizer's table-based dispatch.
//!
//! Six 256-entry byte→directive tables, built once at compile time via
//! `const fn`. There is no runtime initialization step and nothing to
//! race on: by the time the binary exists, the tables already do.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Directive {
    #[default]
    Failed,
    Loop,
    Sep,
    Up,
    Down,
    Qup,
    Qdown,
    Esc,
    Unesc,
    Bare,
    Unbare,
    Utf8_2,
    Utf8_3,
    Utf8_4,
    Utf8Next,
    NumLoop,
    NumFlt,
    NumExp,
    NumBreak,
    NumFailed,
}

type Table = [Directive; 256];

const fn fill_range(table: &mut Table, lo: u8, hi: u8, directive: Directive) {
    let mut b = lo as usize;
    let hi = hi as usize;
    while b <= hi {
        table[b] = directive;
        b += 1;
    }
}

const fn build_go_struct() -> Table {
    let mut t = [Directive::Failed; 256];
    t[b' ' as usize] = Directive::Loop;
    t[b'\t' as usize] = Directive::Loop;
    t[b'\n' as usize] = Directive::Loop;
    t[b'\r' as usize] = Directive::Loop;
    t[b',' as usize] = Directive::Loop;
    t[b'"' as usize] = Directive::Qup;
    t[b':' as usize] = Directive::Sep;
    t[b'=' as usize] = Directive::Sep;
    t[b'[' as usize] = Directive::Up;
    t[b'{' as usize] = Directive::Up;
    t[b']' as usize] = Directive::Down;
    t[b'}' as usize] = Directive::Down;
    t[b'-' as usize] = Directive::Bare;
    t[b't' as usize] = Directive::Bare;
    t[b'f' as usize] = Directive::Bare;
    t[b'n' as usize] = Directive::Bare;
    fill_range(&mut t, b'0', b'9', Directive::Bare);
    t
}

const fn build_go_bare() -> Table {
    let mut t = [Directive::Failed; 256];
    fill_range(&mut t, 32, 126, Directive::Loop);
    t[b' ' as usize] = Directive::Unbare;
    t[b'\t' as usize] = Directive::Unbare;
    t[b'\n' as usize] = Directive::Unbare;
    t[b'\r' as usize] = Directive::Unbare;
    t[b',' as usize] = Directive::Unbare;
    t[b']' as usize] = Directive::Unbare;
    t[b'}' as usize] = Directive::Unbare;
    t
}

const fn build_go_string() -> Table {
    let mut t = [Directive::Failed; 256];
    fill_range(&mut t, 32, 126, Directive::Loop);
    t[b'\\' as usize] = Directive::Esc;
    t[b'"' as usize] = Directive::Qdown;
    fill_range(&mut t, 0xC0, 0xDF, Directive::Utf8_2);
    fill_range(&mut t, 0xE0, 0xEF, Directive::Utf8_3);
    fill_range(&mut t, 0xF0, 0xF7, Directive::Utf8_4);
    t
}

const fn build_go_utf8() -> Table {
    let mut t = [Directive::Failed; 256];
    fill_range(&mut t, 0x80, 0xBF, Directive::Utf8Next);
    t
}

const fn build_go_esc() -> Table {
    let mut t = [Directive::Failed; 256];
    t[b'"' as usize] = Directive::Unesc;
    t[b'\\' as usize] = Directive::Unesc;
    t[b'/' as usize] = Directive::Unesc;
    t[b'b' as usize] = Directive::Unesc;
    t[b'f' as usize] = Directive::Unesc;
    t[b'n' as usize] = Directive::Unesc;
    t[b'r' as usize] = Directive::Unesc;
    t[b't' as usize] = Directive::Unesc;
    t[b'u' as usize] = Directive::Unesc;
    t
}

const fn build_go_num() -> Table {
    let mut t = [Directive::NumFailed; 256];
    fill_range(&mut t, b'0', b'9', Directive::NumLoop);
    t[b'-' as usize] = Directive::NumLoop;
    t[b'+' as usize] = Directive::NumLoop;
    t[b'.' as usize] = Directive::NumFlt;
    t[b'e' as usize] = Directive::NumExp;
    t[b'E' as usize] = Directive::NumExp;
    t[b' ' as usize] = Directive::NumBreak;
    t[b'\t' as usize] = Directive::NumBreak;
    t[b'\n' as usize] = Directive::NumBreak;
    t[b'\r' as usize] = Directive::NumBreak;
    t
}

pub static GO_STRUCT: Table = build_go_struct();
pub static GO_BARE: Table = build_go_bare();
pub static GO_STRING: Table = build_go_string();
pub static GO_UTF8: Table = build_go_utf8();
pub static GO_ESC: Table = build_go_esc();
pub static GO_NUM: Table = build_go_num();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_table_classifies_punctuation() {
        assert_eq!(GO_STRUCT[b'{' as usize], Directive::Up);
        assert_eq!(GO_STRUCT[b'}' as usize], Directive::Down);
        assert_eq!(GO_STRUCT[b':' as usize], Directive::Sep);
        assert_eq!(GO_STRUCT[b'=' as usize], Directive::Sep);
        assert_eq!(GO_STRUCT[b'"' as usize], Directive::Qup);
        assert_eq!(GO_STRUCT[b'9' as usize], Directive::Bare);
        assert_eq!(GO_STRUCT[b'x' as usize], Directive::Failed);
    }

    #[test]
    fn bare_table_breaks_on_terminators() {
        assert_eq!(GO_BARE[b'1' as usize], Directive::Loop);
        assert_eq!(GO_BARE[b',' as usize], Directive::Unbare);
        assert_eq!(GO_BARE[b']' as usize], Directive::Unbare);
    }

    #[test]
    fn string_table_routes_escapes_and_utf8() {
        assert_eq!(GO_STRING[b'\\' as usize], Directive::Esc);
        assert_eq!(GO_STRING[b'"' as usize], Directive::Qdown);
        assert_eq!(GO_STRING[0xC2], Directive::Utf8_2);
        assert_eq!(GO_STRING[0xE2], Directive::Utf8_3);
        assert_eq!(GO_STRING[0xF0], Directive::Utf8_4);
    }

    #[test]
    fn unmapped_bytes_default_to_failed() {
        assert_eq!(GO_STRUCT[1], Directive::Failed);
        assert_eq!(GO_NUM[b'x' as usize], Directive::NumFailed);
    }
}
