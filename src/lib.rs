//! A zero-allocation JSON tokenizer, flat-array loader, and path query
//! engine.
//!
//! Tokens borrow directly from the caller's buffer — nothing here heap
//! allocates on the hot path except the token array the caller chooses
//! to back with a `Vec`. The tokenizer is lenient: `=` is accepted
//! alongside `:` as a key/value separator, and `true`/`false`/`null`
//! are recognized by their first letter.
//!
//! ```
//! use flatjson::{load, num, query_number, Token, TokenKind};
//!
//! let src = br#"{"a":1,"b":"hi"}"#;
//! let mut toks = vec![Token::NULL; num(src)];
//! let mut idx = 0;
//! load(&mut toks, &mut idx, src).unwrap();
//!
//! assert_eq!(query_number(&toks, Some("a")), (TokenKind::Number, Some(1.0)));
//! ```

mod directive;
mod error;
mod loader;
mod query;
mod reader;
mod scalar;
mod token;

pub use error::Status;
pub use loader::{load, load_iterative, num};
pub use query::{query, query_number, query_string, query_type, PATH_DELIMITER};
pub use reader::Reader;
pub use scalar::{copy_bounded, tok_eq_str, tok_eq_tok, to_f64};
pub use token::{Pair, Token, TokenKind};
