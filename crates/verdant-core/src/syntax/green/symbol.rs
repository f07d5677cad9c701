//! Terminal green symbols
//!
//! Symbols know their length and kind but never their position. Kinds
//! without variable content are process-wide singletons, and whitespace runs
//! up to [`SHARED_WHITESPACE_LENGTH`] bytes come from a shared table, so the
//! common tokens of a document cost no allocation at all.

use super::visitor::{GreenSymbolVisitor, GreenSymbolVisitorResult, GreenSymbolVisitorWithArg};
use crate::syntax::diagnostic::{JsonErrorCode, JsonErrorInfo, sort_in_source_order};
use crate::syntax::kind::SymbolKind;
use crate::syntax::span_list::Spanned;
use std::sync::{Arc, LazyLock};

/// Whitespace runs up to this length are shared instances
pub const SHARED_WHITESPACE_LENGTH: usize = 255;

static WHITESPACE_TABLE: LazyLock<Box<[Arc<GreenWhitespace>]>> = LazyLock::new(|| {
    (1..=SHARED_WHITESPACE_LENGTH)
        .map(|length| Arc::new(GreenWhitespace { length }))
        .collect()
});

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenWhitespace {
    length: usize,
}

impl GreenWhitespace {
    /// Panics if `length` is zero.
    pub fn create(length: usize) -> Arc<Self> {
        assert!(length > 0, "whitespace must span at least one byte");
        if length <= SHARED_WHITESPACE_LENGTH {
            Arc::clone(&WHITESPACE_TABLE[length - 1])
        } else {
            Arc::new(Self { length })
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A `//` comment or a terminated `/* */` comment
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenComment {
    length: usize,
}

impl GreenComment {
    pub fn new(length: usize) -> Self {
        assert!(length >= 2, "a comment spans at least its opening delimiter");
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A `/*` comment running to the end of the source
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenUnterminatedMultiLineComment {
    length: usize,
}

impl GreenUnterminatedMultiLineComment {
    pub fn new(length: usize) -> Self {
        assert!(length >= 2, "a comment spans at least its opening delimiter");
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn error(&self, start: usize) -> JsonErrorInfo {
        JsonErrorInfo::new(JsonErrorCode::UnterminatedMultiLineComment, start, self.length)
    }
}

/// Single-character structural symbol
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenPunctuation {
    kind: SymbolKind,
    character: char,
}

impl GreenPunctuation {
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn length(&self) -> usize {
        1
    }
}

pub static COLON: GreenPunctuation = GreenPunctuation {
    kind: SymbolKind::Colon,
    character: ':',
};
pub static COMMA: GreenPunctuation = GreenPunctuation {
    kind: SymbolKind::Comma,
    character: ',',
};
pub static CURLY_OPEN: GreenPunctuation = GreenPunctuation {
    kind: SymbolKind::CurlyOpen,
    character: '{',
};
pub static CURLY_CLOSE: GreenPunctuation = GreenPunctuation {
    kind: SymbolKind::CurlyClose,
    character: '}',
};
pub static SQUARE_BRACKET_OPEN: GreenPunctuation = GreenPunctuation {
    kind: SymbolKind::SquareBracketOpen,
    character: '[',
};
pub static SQUARE_BRACKET_CLOSE: GreenPunctuation = GreenPunctuation {
    kind: SymbolKind::SquareBracketClose,
    character: ']',
};

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenBooleanLiteral {
    value: bool,
}

impl GreenBooleanLiteral {
    pub fn value(&self) -> bool {
        self.value
    }

    pub fn length(&self) -> usize {
        if self.value { 4 } else { 5 }
    }
}

pub static FALSE: GreenBooleanLiteral = GreenBooleanLiteral { value: false };
pub static TRUE: GreenBooleanLiteral = GreenBooleanLiteral { value: true };

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenIntegerLiteral {
    value: i64,
    length: usize,
}

impl GreenIntegerLiteral {
    pub fn new(value: i64, length: usize) -> Self {
        assert!(length > 0, "an integer literal spans at least one digit");
        Self { value, length }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A well-formed string literal, with its unescaped value
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenStringLiteral {
    value: String,
    length: usize,
}

impl GreenStringLiteral {
    pub fn new(value: impl Into<String>, length: usize) -> Self {
        assert!(length >= 2, "a string literal spans at least its quotes");
        Self {
            value: value.into(),
            length,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A string literal with errors in its content
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenErrorString {
    length: usize,
    errors: Box<[JsonErrorInfo]>,
}

impl GreenErrorString {
    /// `errors` are relative to the start of the string and get stored in
    /// source order. Panics if there are none or one of them lies outside
    /// the string.
    pub fn new(length: usize, mut errors: Vec<JsonErrorInfo>) -> Self {
        assert!(!errors.is_empty(), "an error string must carry errors");
        assert!(
            errors.iter().all(|e| e.end() <= length),
            "error string diagnostics must lie within the string"
        );
        sort_in_source_order(&mut errors);
        Self {
            length,
            errors: errors.into_boxed_slice(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn errors(&self, start: usize) -> impl Iterator<Item = JsonErrorInfo> + '_ {
        self.errors.iter().map(move |e| e.translate(start))
    }
}

/// A single character the tokenizer does not recognize
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenUnknownSymbol {
    display_char: char,
}

impl GreenUnknownSymbol {
    pub fn new(display_char: char) -> Self {
        Self { display_char }
    }

    pub fn display_char(&self) -> char {
        self.display_char
    }

    pub fn length(&self) -> usize {
        self.display_char.len_utf8()
    }

    pub fn error(&self, start: usize) -> JsonErrorInfo {
        JsonErrorInfo::new(JsonErrorCode::UnexpectedSymbol, start, self.length())
            .with_parameters([self.display_char])
    }
}

/// A word that is not a known literal
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenUndefinedValue {
    text: String,
}

impl GreenUndefinedValue {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.is_empty(), "an undefined value spans at least one byte");
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Words starting like a number are reported as invalid numbers
    pub fn looks_numeric(&self) -> bool {
        let digits = self.text.strip_prefix(['-', '+']).unwrap_or(&self.text);
        digits.starts_with(|c: char| c.is_ascii_digit())
    }

    pub fn error(&self, start: usize) -> JsonErrorInfo {
        let code = if self.looks_numeric() {
            JsonErrorCode::InvalidNumber
        } else {
            JsonErrorCode::UnrecognizedValue
        };
        JsonErrorInfo::new(code, start, self.length()).with_parameters([self.text.as_str()])
    }
}

/// A value delimiter no enclosing structure accepts, kept as background
///
/// Every delimiter at root level ends up here. The parser reports the
/// context-dependent error; the symbol itself only preserves the text.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GreenUnexpectedValueDelimiter {
    delimiter: GreenSymbol,
}

impl GreenUnexpectedValueDelimiter {
    /// Panics if `delimiter` is not a value delimiter.
    pub fn new(delimiter: GreenSymbol) -> Self {
        assert!(
            delimiter.is_value_delimiter(),
            "{} is not a value delimiter",
            delimiter.kind()
        );
        Self { delimiter }
    }

    pub fn delimiter(&self) -> &GreenSymbol {
        &self.delimiter
    }

    pub fn length(&self) -> usize {
        self.delimiter.length()
    }
}

/// Any terminal green symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GreenSymbol {
    Whitespace(Arc<GreenWhitespace>),
    Comment(Arc<GreenComment>),
    UnterminatedMultiLineComment(Arc<GreenUnterminatedMultiLineComment>),
    UnexpectedValueDelimiter(Arc<GreenUnexpectedValueDelimiter>),
    Colon(&'static GreenPunctuation),
    Comma(&'static GreenPunctuation),
    CurlyClose(&'static GreenPunctuation),
    SquareBracketClose(&'static GreenPunctuation),
    CurlyOpen(&'static GreenPunctuation),
    SquareBracketOpen(&'static GreenPunctuation),
    BooleanLiteral(&'static GreenBooleanLiteral),
    IntegerLiteral(Arc<GreenIntegerLiteral>),
    StringLiteral(Arc<GreenStringLiteral>),
    ErrorString(Arc<GreenErrorString>),
    UnknownSymbol(Arc<GreenUnknownSymbol>),
    UndefinedValue(Arc<GreenUndefinedValue>),
}

impl GreenSymbol {
    pub fn whitespace(length: usize) -> Self {
        GreenSymbol::Whitespace(GreenWhitespace::create(length))
    }

    pub fn comment(length: usize) -> Self {
        GreenSymbol::Comment(Arc::new(GreenComment::new(length)))
    }

    pub fn unterminated_multi_line_comment(length: usize) -> Self {
        GreenSymbol::UnterminatedMultiLineComment(Arc::new(GreenUnterminatedMultiLineComment::new(
            length,
        )))
    }

    pub fn unexpected_value_delimiter(delimiter: GreenSymbol) -> Self {
        GreenSymbol::UnexpectedValueDelimiter(Arc::new(GreenUnexpectedValueDelimiter::new(
            delimiter,
        )))
    }

    pub fn colon() -> Self {
        GreenSymbol::Colon(&COLON)
    }

    pub fn comma() -> Self {
        GreenSymbol::Comma(&COMMA)
    }

    pub fn curly_open() -> Self {
        GreenSymbol::CurlyOpen(&CURLY_OPEN)
    }

    pub fn curly_close() -> Self {
        GreenSymbol::CurlyClose(&CURLY_CLOSE)
    }

    pub fn square_bracket_open() -> Self {
        GreenSymbol::SquareBracketOpen(&SQUARE_BRACKET_OPEN)
    }

    pub fn square_bracket_close() -> Self {
        GreenSymbol::SquareBracketClose(&SQUARE_BRACKET_CLOSE)
    }

    pub fn boolean(value: bool) -> Self {
        GreenSymbol::BooleanLiteral(if value { &TRUE } else { &FALSE })
    }

    pub fn integer(value: i64, length: usize) -> Self {
        GreenSymbol::IntegerLiteral(Arc::new(GreenIntegerLiteral::new(value, length)))
    }

    pub fn string(value: impl Into<String>, length: usize) -> Self {
        GreenSymbol::StringLiteral(Arc::new(GreenStringLiteral::new(value, length)))
    }

    pub fn error_string(length: usize, errors: Vec<JsonErrorInfo>) -> Self {
        GreenSymbol::ErrorString(Arc::new(GreenErrorString::new(length, errors)))
    }

    pub fn unknown_symbol(display_char: char) -> Self {
        GreenSymbol::UnknownSymbol(Arc::new(GreenUnknownSymbol::new(display_char)))
    }

    pub fn undefined_value(text: impl Into<String>) -> Self {
        GreenSymbol::UndefinedValue(Arc::new(GreenUndefinedValue::new(text)))
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            GreenSymbol::Whitespace(_) => SymbolKind::Whitespace,
            GreenSymbol::Comment(_) => SymbolKind::Comment,
            GreenSymbol::UnterminatedMultiLineComment(_) => SymbolKind::UnterminatedMultiLineComment,
            GreenSymbol::UnexpectedValueDelimiter(_) => SymbolKind::UnexpectedValueDelimiter,
            GreenSymbol::Colon(_) => SymbolKind::Colon,
            GreenSymbol::Comma(_) => SymbolKind::Comma,
            GreenSymbol::CurlyClose(_) => SymbolKind::CurlyClose,
            GreenSymbol::SquareBracketClose(_) => SymbolKind::SquareBracketClose,
            GreenSymbol::CurlyOpen(_) => SymbolKind::CurlyOpen,
            GreenSymbol::SquareBracketOpen(_) => SymbolKind::SquareBracketOpen,
            GreenSymbol::BooleanLiteral(_) => SymbolKind::BooleanLiteral,
            GreenSymbol::IntegerLiteral(_) => SymbolKind::IntegerLiteral,
            GreenSymbol::StringLiteral(_) => SymbolKind::StringLiteral,
            GreenSymbol::ErrorString(_) => SymbolKind::ErrorString,
            GreenSymbol::UnknownSymbol(_) => SymbolKind::UnknownSymbol,
            GreenSymbol::UndefinedValue(_) => SymbolKind::UndefinedValue,
        }
    }

    pub fn length(&self) -> usize {
        match self {
            GreenSymbol::Whitespace(node) => node.length(),
            GreenSymbol::Comment(node) => node.length(),
            GreenSymbol::UnterminatedMultiLineComment(node) => node.length(),
            GreenSymbol::UnexpectedValueDelimiter(node) => node.length(),
            GreenSymbol::Colon(node)
            | GreenSymbol::Comma(node)
            | GreenSymbol::CurlyClose(node)
            | GreenSymbol::SquareBracketClose(node)
            | GreenSymbol::CurlyOpen(node)
            | GreenSymbol::SquareBracketOpen(node) => node.length(),
            GreenSymbol::BooleanLiteral(node) => node.length(),
            GreenSymbol::IntegerLiteral(node) => node.length(),
            GreenSymbol::StringLiteral(node) => node.length(),
            GreenSymbol::ErrorString(node) => node.length(),
            GreenSymbol::UnknownSymbol(node) => node.length(),
            GreenSymbol::UndefinedValue(node) => node.length(),
        }
    }

    pub fn is_background(&self) -> bool {
        self.kind().is_background()
    }

    pub fn is_value_starter(&self) -> bool {
        self.kind().is_value_starter()
    }

    pub fn is_value_delimiter(&self) -> bool {
        self.kind().is_value_delimiter()
    }

    /// Whether [`GreenSymbol::errors`] would return anything
    pub fn has_errors(&self) -> bool {
        matches!(
            self,
            GreenSymbol::UnterminatedMultiLineComment(_)
                | GreenSymbol::ErrorString(_)
                | GreenSymbol::UnknownSymbol(_)
                | GreenSymbol::UndefinedValue(_)
        )
    }

    /// Diagnostics of this symbol, given the offset it starts at
    pub fn errors(&self, start: usize) -> Vec<JsonErrorInfo> {
        if self.has_errors() {
            self.accept_with_arg(&mut IntrinsicErrors, start)
        } else {
            Vec::new()
        }
    }

    /// Identity comparison: true if both symbols are the same shared instance
    pub fn ptr_eq(&self, other: &GreenSymbol) -> bool {
        self.kind() == other.kind() && std::ptr::eq(self.data_ptr(), other.data_ptr())
    }

    fn data_ptr(&self) -> *const () {
        match self {
            GreenSymbol::Whitespace(node) => Arc::as_ptr(node).cast(),
            GreenSymbol::Comment(node) => Arc::as_ptr(node).cast(),
            GreenSymbol::UnterminatedMultiLineComment(node) => Arc::as_ptr(node).cast(),
            GreenSymbol::UnexpectedValueDelimiter(node) => Arc::as_ptr(node).cast(),
            GreenSymbol::Colon(node)
            | GreenSymbol::Comma(node)
            | GreenSymbol::CurlyClose(node)
            | GreenSymbol::SquareBracketClose(node)
            | GreenSymbol::CurlyOpen(node)
            | GreenSymbol::SquareBracketOpen(node) => std::ptr::from_ref(*node).cast(),
            GreenSymbol::BooleanLiteral(node) => std::ptr::from_ref(*node).cast(),
            GreenSymbol::IntegerLiteral(node) => Arc::as_ptr(node).cast(),
            GreenSymbol::StringLiteral(node) => Arc::as_ptr(node).cast(),
            GreenSymbol::ErrorString(node) => Arc::as_ptr(node).cast(),
            GreenSymbol::UnknownSymbol(node) => Arc::as_ptr(node).cast(),
            GreenSymbol::UndefinedValue(node) => Arc::as_ptr(node).cast(),
        }
    }

    pub fn accept<V: GreenSymbolVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            GreenSymbol::Whitespace(node) => visitor.visit_whitespace(node),
            GreenSymbol::Comment(node) => visitor.visit_comment(node),
            GreenSymbol::UnterminatedMultiLineComment(node) => {
                visitor.visit_unterminated_multi_line_comment(node)
            }
            GreenSymbol::UnexpectedValueDelimiter(node) => {
                visitor.visit_unexpected_value_delimiter(node)
            }
            GreenSymbol::Colon(node) => visitor.visit_colon(node),
            GreenSymbol::Comma(node) => visitor.visit_comma(node),
            GreenSymbol::CurlyClose(node) => visitor.visit_curly_close(node),
            GreenSymbol::SquareBracketClose(node) => visitor.visit_square_bracket_close(node),
            GreenSymbol::CurlyOpen(node) => visitor.visit_curly_open(node),
            GreenSymbol::SquareBracketOpen(node) => visitor.visit_square_bracket_open(node),
            GreenSymbol::BooleanLiteral(node) => visitor.visit_boolean_literal(node),
            GreenSymbol::IntegerLiteral(node) => visitor.visit_integer_literal(node),
            GreenSymbol::StringLiteral(node) => visitor.visit_string_literal(node),
            GreenSymbol::ErrorString(node) => visitor.visit_error_string(node),
            GreenSymbol::UnknownSymbol(node) => visitor.visit_unknown_symbol(node),
            GreenSymbol::UndefinedValue(node) => visitor.visit_undefined_value(node),
        }
    }

    pub fn accept_result<V: GreenSymbolVisitorResult + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            GreenSymbol::Whitespace(node) => visitor.visit_whitespace(node),
            GreenSymbol::Comment(node) => visitor.visit_comment(node),
            GreenSymbol::UnterminatedMultiLineComment(node) => {
                visitor.visit_unterminated_multi_line_comment(node)
            }
            GreenSymbol::UnexpectedValueDelimiter(node) => {
                visitor.visit_unexpected_value_delimiter(node)
            }
            GreenSymbol::Colon(node) => visitor.visit_colon(node),
            GreenSymbol::Comma(node) => visitor.visit_comma(node),
            GreenSymbol::CurlyClose(node) => visitor.visit_curly_close(node),
            GreenSymbol::SquareBracketClose(node) => visitor.visit_square_bracket_close(node),
            GreenSymbol::CurlyOpen(node) => visitor.visit_curly_open(node),
            GreenSymbol::SquareBracketOpen(node) => visitor.visit_square_bracket_open(node),
            GreenSymbol::BooleanLiteral(node) => visitor.visit_boolean_literal(node),
            GreenSymbol::IntegerLiteral(node) => visitor.visit_integer_literal(node),
            GreenSymbol::StringLiteral(node) => visitor.visit_string_literal(node),
            GreenSymbol::ErrorString(node) => visitor.visit_error_string(node),
            GreenSymbol::UnknownSymbol(node) => visitor.visit_unknown_symbol(node),
            GreenSymbol::UndefinedValue(node) => visitor.visit_undefined_value(node),
        }
    }

    pub fn accept_with_arg<V: GreenSymbolVisitorWithArg + ?Sized>(
        &self,
        visitor: &mut V,
        arg: V::Arg,
    ) -> V::Output {
        match self {
            GreenSymbol::Whitespace(node) => visitor.visit_whitespace(node, arg),
            GreenSymbol::Comment(node) => visitor.visit_comment(node, arg),
            GreenSymbol::UnterminatedMultiLineComment(node) => {
                visitor.visit_unterminated_multi_line_comment(node, arg)
            }
            GreenSymbol::UnexpectedValueDelimiter(node) => {
                visitor.visit_unexpected_value_delimiter(node, arg)
            }
            GreenSymbol::Colon(node) => visitor.visit_colon(node, arg),
            GreenSymbol::Comma(node) => visitor.visit_comma(node, arg),
            GreenSymbol::CurlyClose(node) => visitor.visit_curly_close(node, arg),
            GreenSymbol::SquareBracketClose(node) => visitor.visit_square_bracket_close(node, arg),
            GreenSymbol::CurlyOpen(node) => visitor.visit_curly_open(node, arg),
            GreenSymbol::SquareBracketOpen(node) => visitor.visit_square_bracket_open(node, arg),
            GreenSymbol::BooleanLiteral(node) => visitor.visit_boolean_literal(node, arg),
            GreenSymbol::IntegerLiteral(node) => visitor.visit_integer_literal(node, arg),
            GreenSymbol::StringLiteral(node) => visitor.visit_string_literal(node, arg),
            GreenSymbol::ErrorString(node) => visitor.visit_error_string(node, arg),
            GreenSymbol::UnknownSymbol(node) => visitor.visit_unknown_symbol(node, arg),
            GreenSymbol::UndefinedValue(node) => visitor.visit_undefined_value(node, arg),
        }
    }
}

impl Spanned for GreenSymbol {
    fn length(&self) -> usize {
        GreenSymbol::length(self)
    }
}

/// Collects the diagnostics a symbol carries, given its start
struct IntrinsicErrors;

impl GreenSymbolVisitorWithArg for IntrinsicErrors {
    type Arg = usize;
    type Output = Vec<JsonErrorInfo>;

    fn visit_whitespace(&mut self, _: &GreenWhitespace, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_comment(&mut self, _: &GreenComment, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_unterminated_multi_line_comment(
        &mut self,
        node: &GreenUnterminatedMultiLineComment,
        start: usize,
    ) -> Self::Output {
        vec![node.error(start)]
    }

    fn visit_unexpected_value_delimiter(
        &mut self,
        _: &GreenUnexpectedValueDelimiter,
        _: usize,
    ) -> Self::Output {
        Vec::new()
    }

    fn visit_colon(&mut self, _: &GreenPunctuation, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_comma(&mut self, _: &GreenPunctuation, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_curly_close(&mut self, _: &GreenPunctuation, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_square_bracket_close(&mut self, _: &GreenPunctuation, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_curly_open(&mut self, _: &GreenPunctuation, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_square_bracket_open(&mut self, _: &GreenPunctuation, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_boolean_literal(&mut self, _: &GreenBooleanLiteral, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_integer_literal(&mut self, _: &GreenIntegerLiteral, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_string_literal(&mut self, _: &GreenStringLiteral, _: usize) -> Self::Output {
        Vec::new()
    }

    fn visit_error_string(&mut self, node: &GreenErrorString, start: usize) -> Self::Output {
        node.errors(start).collect()
    }

    fn visit_unknown_symbol(&mut self, node: &GreenUnknownSymbol, start: usize) -> Self::Output {
        vec![node.error(start)]
    }

    fn visit_undefined_value(&mut self, node: &GreenUndefinedValue, start: usize) -> Self::Output {
        vec![node.error(start)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_singletons() {
        assert!(GreenSymbol::comma().ptr_eq(&GreenSymbol::comma()));
        assert!(GreenSymbol::curly_open().ptr_eq(&GreenSymbol::curly_open()));
        assert!(!GreenSymbol::comma().ptr_eq(&GreenSymbol::colon()));
        assert!(GreenSymbol::boolean(true).ptr_eq(&GreenSymbol::boolean(true)));
    }

    #[test]
    fn test_shared_whitespace_table() {
        let a = GreenSymbol::whitespace(4);
        let b = GreenSymbol::whitespace(4);
        assert!(a.ptr_eq(&b));

        let max_a = GreenSymbol::whitespace(SHARED_WHITESPACE_LENGTH);
        let max_b = GreenSymbol::whitespace(SHARED_WHITESPACE_LENGTH);
        assert!(max_a.ptr_eq(&max_b));
    }

    #[test]
    fn test_long_whitespace_is_value_equal() {
        let a = GreenSymbol::whitespace(SHARED_WHITESPACE_LENGTH + 1);
        let b = GreenSymbol::whitespace(SHARED_WHITESPACE_LENGTH + 1);
        assert_eq!(a, b);
        assert_eq!(a.length(), SHARED_WHITESPACE_LENGTH + 1);
    }

    #[test]
    #[should_panic(expected = "at least one byte")]
    fn test_empty_whitespace_fails_fast() {
        GreenSymbol::whitespace(0);
    }

    #[test]
    fn test_literal_lengths() {
        assert_eq!(GreenSymbol::boolean(false).length(), 5);
        assert_eq!(GreenSymbol::boolean(true).length(), 4);
        assert_eq!(GreenSymbol::unknown_symbol('€').length(), 3);
        assert_eq!(GreenSymbol::string("a\n", 6).length(), 6);
    }

    #[test]
    fn test_intrinsic_errors_are_relative_to_start() {
        let unknown = GreenSymbol::unknown_symbol('*');
        let errors = unknown.errors(10);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code(), JsonErrorCode::UnexpectedSymbol);
        assert_eq!(errors[0].start(), 10);
        assert_eq!(errors[0].parameters()[0].untyped_value(), "*");

        let string = GreenSymbol::error_string(
            6,
            vec![JsonErrorInfo::new(JsonErrorCode::UnrecognizedEscapeSequence, 2, 2)],
        );
        assert_eq!(string.errors(3)[0].start(), 5);
    }

    #[test]
    fn test_undefined_value_error_codes() {
        let number = GreenSymbol::undefined_value("-1.5");
        assert_eq!(number.errors(0)[0].error_code(), JsonErrorCode::InvalidNumber);

        let word = GreenSymbol::undefined_value("null");
        assert_eq!(word.errors(0)[0].error_code(), JsonErrorCode::UnrecognizedValue);

        let signed = GreenSymbol::undefined_value("+3");
        assert_eq!(signed.errors(0)[0].error_code(), JsonErrorCode::InvalidNumber);
    }

    #[test]
    fn test_error_string_errors_are_in_source_order() {
        let string = GreenSymbol::error_string(
            4,
            vec![
                JsonErrorInfo::new(JsonErrorCode::UnrecognizedEscapeSequence, 2, 2),
                JsonErrorInfo::new(JsonErrorCode::UnterminatedString, 0, 4),
            ],
        );
        let starts: Vec<usize> = string.errors(5).iter().map(|e| e.start()).collect();
        assert_eq!(starts, vec![5, 7]);
    }

    #[test]
    fn test_has_errors_matches_errors() {
        let symbols = [
            GreenSymbol::whitespace(1),
            GreenSymbol::comment(4),
            GreenSymbol::unterminated_multi_line_comment(4),
            GreenSymbol::unexpected_value_delimiter(GreenSymbol::comma()),
            GreenSymbol::colon(),
            GreenSymbol::integer(7, 1),
            GreenSymbol::unknown_symbol('#'),
        ];
        for symbol in symbols {
            assert_eq!(symbol.has_errors(), !symbol.errors(0).is_empty(), "{symbol:?}");
        }
    }

    #[test]
    #[should_panic(expected = "not a value delimiter")]
    fn test_unexpected_value_delimiter_validates() {
        GreenSymbol::unexpected_value_delimiter(GreenSymbol::curly_open());
    }

    #[test]
    #[should_panic(expected = "must carry errors")]
    fn test_error_string_without_errors_fails_fast() {
        GreenSymbol::error_string(2, Vec::new());
    }
}
