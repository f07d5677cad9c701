//! Green tree: immutable, position-free nodes
//!
//! The green tree is the sole owner of structure and symbol data. Nodes are
//! built bottom-up, know only their own length, and are `Send + Sync`, so one
//! parsed tree can back any number of red projections on any thread.

mod background;
mod symbol;
mod value;
pub mod visitor;
mod walk;

pub use background::GreenBackgroundList;
pub use symbol::{
    COLON, COMMA, CURLY_CLOSE, CURLY_OPEN, FALSE, GreenBooleanLiteral, GreenComment,
    GreenErrorString, GreenIntegerLiteral, GreenPunctuation, GreenStringLiteral, GreenSymbol,
    GreenUndefinedValue, GreenUnexpectedValueDelimiter, GreenUnknownSymbol,
    GreenUnterminatedMultiLineComment, GreenWhitespace, SHARED_WHITESPACE_LENGTH,
    SQUARE_BRACKET_CLOSE, SQUARE_BRACKET_OPEN, TRUE,
};
pub use value::{
    GreenKeyValue, GreenList, GreenMap, GreenMissingValue, GreenMultiValue, GreenValue,
    GreenValueWithBackground, MISSING_VALUE,
};
pub use visitor::{GreenSymbolVisitor, GreenSymbolVisitorResult, GreenSymbolVisitorWithArg};

use super::diagnostic::{JsonErrorInfo, sort_in_source_order};
use std::sync::Arc;

/// Root-level wrapper around a parsed document
///
/// Holds the top-level value slot and every diagnostic of the document in
/// absolute offsets: the ones terminals carry and the ones the parser found.
#[derive(Debug, PartialEq, Eq)]
pub struct GreenRoot {
    syntax: Arc<GreenMultiValue>,
    errors: Box<[JsonErrorInfo]>,
}

impl GreenRoot {
    /// `parser_errors` must be absolute offsets into the document.
    pub fn new(syntax: Arc<GreenMultiValue>, parser_errors: Vec<JsonErrorInfo>) -> Self {
        let mut errors = syntax.errors(0);
        errors.extend(parser_errors);
        sort_in_source_order(&mut errors);
        assert!(
            errors.iter().all(|e| e.end() <= syntax.length()),
            "diagnostics must lie within the document"
        );
        Self {
            syntax,
            errors: errors.into_boxed_slice(),
        }
    }

    pub fn syntax(&self) -> &Arc<GreenMultiValue> {
        &self.syntax
    }

    /// All diagnostics, in source order
    pub fn errors(&self) -> &[JsonErrorInfo] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn length(&self) -> usize {
        self.syntax.length()
    }
}
