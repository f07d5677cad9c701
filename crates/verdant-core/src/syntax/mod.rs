//! Lossless syntax trees for JSON with comments
//!
//! Two layers:
//!
//! - [`green`]: immutable, position-free, shareable nodes built once per
//!   parse. Lengths are cached; identical leaves are shared.
//! - [`red`]: a lightweight projection that adds parents and absolute
//!   positions, created on demand while navigating.
//!
//! Every byte of the source belongs to exactly one terminal, so the text of
//! any node can be recovered from its range and nothing is lost for
//! malformed input.
//!
//! ```
//! use verdant_core::syntax::{parse, JsonSyntaxNode};
//!
//! let root = parse(r#"{ "a" : 1 , "b" : }"#);
//! assert_eq!(root.errors().len(), 1);
//! assert_eq!(root.errors()[0].start(), 18);
//! assert_eq!(root.syntax().length(), 19);
//! ```

pub mod diagnostic;
pub mod green;
pub mod kind;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod red;
pub mod span_list;

#[cfg(test)]
mod tests;

pub use diagnostic::{JsonErrorCode, JsonErrorInfo, JsonErrorInfoParameter, JsonErrorLevel};
pub use green::{GreenRoot, GreenSymbol};
pub use kind::{ForegroundRole, NodeKind, SymbolClass, SymbolKind, SyntaxKind};
pub use lexer::tokenize;
pub use parser::{parse, parse_symbols, parse_with_options};
pub use printer::dump_tree;
pub use red::{JsonRootSyntax, JsonSyntax, JsonSyntaxNode};
pub use span_list::{SeparatedSpanList, SpanList, Spanned};
