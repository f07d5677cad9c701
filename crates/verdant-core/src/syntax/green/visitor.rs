//! Double dispatch over the closed set of green symbol kinds
//!
//! Each trait has one required method per [`GreenSymbol`](super::GreenSymbol)
//! variant and no default implementations. Adding a symbol kind therefore
//! breaks every visitor until it handles the new kind.
//!
//! Three call shapes exist: side-effecting visits, visits returning a value,
//! and visits returning a value computed from one caller-supplied argument
//! (such as the offset a symbol starts at).

use super::symbol::{
    GreenBooleanLiteral, GreenComment, GreenErrorString, GreenIntegerLiteral, GreenPunctuation,
    GreenStringLiteral, GreenUndefinedValue, GreenUnexpectedValueDelimiter, GreenUnknownSymbol,
    GreenUnterminatedMultiLineComment, GreenWhitespace,
};

pub trait GreenSymbolVisitor {
    fn visit_whitespace(&mut self, node: &GreenWhitespace);
    fn visit_comment(&mut self, node: &GreenComment);
    fn visit_unterminated_multi_line_comment(&mut self, node: &GreenUnterminatedMultiLineComment);
    fn visit_unexpected_value_delimiter(&mut self, node: &GreenUnexpectedValueDelimiter);
    fn visit_colon(&mut self, node: &GreenPunctuation);
    fn visit_comma(&mut self, node: &GreenPunctuation);
    fn visit_curly_close(&mut self, node: &GreenPunctuation);
    fn visit_square_bracket_close(&mut self, node: &GreenPunctuation);
    fn visit_curly_open(&mut self, node: &GreenPunctuation);
    fn visit_square_bracket_open(&mut self, node: &GreenPunctuation);
    fn visit_boolean_literal(&mut self, node: &GreenBooleanLiteral);
    fn visit_integer_literal(&mut self, node: &GreenIntegerLiteral);
    fn visit_string_literal(&mut self, node: &GreenStringLiteral);
    fn visit_error_string(&mut self, node: &GreenErrorString);
    fn visit_unknown_symbol(&mut self, node: &GreenUnknownSymbol);
    fn visit_undefined_value(&mut self, node: &GreenUndefinedValue);
}

pub trait GreenSymbolVisitorResult {
    type Output;

    fn visit_whitespace(&mut self, node: &GreenWhitespace) -> Self::Output;
    fn visit_comment(&mut self, node: &GreenComment) -> Self::Output;
    fn visit_unterminated_multi_line_comment(
        &mut self,
        node: &GreenUnterminatedMultiLineComment,
    ) -> Self::Output;
    fn visit_unexpected_value_delimiter(
        &mut self,
        node: &GreenUnexpectedValueDelimiter,
    ) -> Self::Output;
    fn visit_colon(&mut self, node: &GreenPunctuation) -> Self::Output;
    fn visit_comma(&mut self, node: &GreenPunctuation) -> Self::Output;
    fn visit_curly_close(&mut self, node: &GreenPunctuation) -> Self::Output;
    fn visit_square_bracket_close(&mut self, node: &GreenPunctuation) -> Self::Output;
    fn visit_curly_open(&mut self, node: &GreenPunctuation) -> Self::Output;
    fn visit_square_bracket_open(&mut self, node: &GreenPunctuation) -> Self::Output;
    fn visit_boolean_literal(&mut self, node: &GreenBooleanLiteral) -> Self::Output;
    fn visit_integer_literal(&mut self, node: &GreenIntegerLiteral) -> Self::Output;
    fn visit_string_literal(&mut self, node: &GreenStringLiteral) -> Self::Output;
    fn visit_error_string(&mut self, node: &GreenErrorString) -> Self::Output;
    fn visit_unknown_symbol(&mut self, node: &GreenUnknownSymbol) -> Self::Output;
    fn visit_undefined_value(&mut self, node: &GreenUndefinedValue) -> Self::Output;
}

pub trait GreenSymbolVisitorWithArg {
    type Arg;
    type Output;

    fn visit_whitespace(&mut self, node: &GreenWhitespace, arg: Self::Arg) -> Self::Output;
    fn visit_comment(&mut self, node: &GreenComment, arg: Self::Arg) -> Self::Output;
    fn visit_unterminated_multi_line_comment(
        &mut self,
        node: &GreenUnterminatedMultiLineComment,
        arg: Self::Arg,
    ) -> Self::Output;
    fn visit_unexpected_value_delimiter(
        &mut self,
        node: &GreenUnexpectedValueDelimiter,
        arg: Self::Arg,
    ) -> Self::Output;
    fn visit_colon(&mut self, node: &GreenPunctuation, arg: Self::Arg) -> Self::Output;
    fn visit_comma(&mut self, node: &GreenPunctuation, arg: Self::Arg) -> Self::Output;
    fn visit_curly_close(&mut self, node: &GreenPunctuation, arg: Self::Arg) -> Self::Output;
    fn visit_square_bracket_close(&mut self, node: &GreenPunctuation, arg: Self::Arg)
    -> Self::Output;
    fn visit_curly_open(&mut self, node: &GreenPunctuation, arg: Self::Arg) -> Self::Output;
    fn visit_square_bracket_open(&mut self, node: &GreenPunctuation, arg: Self::Arg)
    -> Self::Output;
    fn visit_boolean_literal(&mut self, node: &GreenBooleanLiteral, arg: Self::Arg)
    -> Self::Output;
    fn visit_integer_literal(&mut self, node: &GreenIntegerLiteral, arg: Self::Arg)
    -> Self::Output;
    fn visit_string_literal(&mut self, node: &GreenStringLiteral, arg: Self::Arg) -> Self::Output;
    fn visit_error_string(&mut self, node: &GreenErrorString, arg: Self::Arg) -> Self::Output;
    fn visit_unknown_symbol(&mut self, node: &GreenUnknownSymbol, arg: Self::Arg) -> Self::Output;
    fn visit_undefined_value(&mut self, node: &GreenUndefinedValue, arg: Self::Arg)
    -> Self::Output;
}
