//! Source-order traversal of the terminals below a value slot

use super::background::GreenBackgroundList;
use super::symbol::{
    GreenBooleanLiteral, GreenComment, GreenErrorString, GreenIntegerLiteral, GreenPunctuation,
    GreenStringLiteral, GreenSymbol, GreenUndefinedValue, GreenUnexpectedValueDelimiter,
    GreenUnknownSymbol, GreenUnterminatedMultiLineComment, GreenWhitespace,
};
use super::value::{GreenKeyValue, GreenMultiValue, GreenValue};
use super::visitor::GreenSymbolVisitor;

impl GreenMultiValue {
    /// Every terminal symbol in source order, punctuation included
    ///
    /// Concatenating the source text of the returned symbols reproduces the
    /// slot exactly. Missing values contribute nothing.
    pub fn symbols(&self) -> Vec<GreenSymbol> {
        let mut symbols = Vec::new();
        push_multi_value(self, &mut symbols);
        symbols
    }

    /// Offsets, relative to this slot, of every symbol that starts a value
    pub fn value_start_positions(&self) -> Vec<usize> {
        let mut collector = ValueStartCollector::default();
        for symbol in self.symbols() {
            symbol.accept(&mut collector);
        }
        collector.starts
    }
}

fn push_multi_value(node: &GreenMultiValue, out: &mut Vec<GreenSymbol>) {
    for value_node in node.value_nodes() {
        push_background(value_node.background_before(), out);
        push_value(value_node.content(), out);
    }
    push_background(node.background_after(), out);
}

fn push_background(node: &GreenBackgroundList, out: &mut Vec<GreenSymbol>) {
    out.extend(node.background().iter().cloned());
}

fn push_value(value: &GreenValue, out: &mut Vec<GreenSymbol>) {
    match value {
        GreenValue::List(list) => {
            out.push(GreenSymbol::square_bracket_open());
            for (i, item) in list.list_items().iter().enumerate() {
                if i > 0 {
                    out.push(GreenSymbol::comma());
                }
                push_multi_value(item, out);
            }
            if !list.missing_square_bracket_close() {
                out.push(GreenSymbol::square_bracket_close());
            }
        }
        GreenValue::Map(map) => {
            out.push(GreenSymbol::curly_open());
            for (i, key_value) in map.key_value_nodes().iter().enumerate() {
                if i > 0 {
                    out.push(GreenSymbol::comma());
                }
                push_key_value(key_value, out);
            }
            if !map.missing_curly_close() {
                out.push(GreenSymbol::curly_close());
            }
        }
        leaf => out.extend(leaf.as_symbol()),
    }
}

fn push_key_value(node: &GreenKeyValue, out: &mut Vec<GreenSymbol>) {
    for (i, section) in node.value_section_nodes().iter().enumerate() {
        if i > 0 {
            out.push(GreenSymbol::colon());
        }
        push_multi_value(section, out);
    }
}

/// Tracks a running offset over a symbol stream and records where each
/// value starter begins
#[derive(Default)]
struct ValueStartCollector {
    offset: usize,
    starts: Vec<usize>,
}

impl ValueStartCollector {
    fn skip(&mut self, length: usize) {
        self.offset += length;
    }

    fn start_value(&mut self, length: usize) {
        self.starts.push(self.offset);
        self.offset += length;
    }
}

impl GreenSymbolVisitor for ValueStartCollector {
    fn visit_whitespace(&mut self, node: &GreenWhitespace) {
        self.skip(node.length());
    }

    fn visit_comment(&mut self, node: &GreenComment) {
        self.skip(node.length());
    }

    fn visit_unterminated_multi_line_comment(&mut self, node: &GreenUnterminatedMultiLineComment) {
        self.skip(node.length());
    }

    fn visit_unexpected_value_delimiter(&mut self, node: &GreenUnexpectedValueDelimiter) {
        self.skip(node.length());
    }

    fn visit_colon(&mut self, node: &GreenPunctuation) {
        self.skip(node.length());
    }

    fn visit_comma(&mut self, node: &GreenPunctuation) {
        self.skip(node.length());
    }

    fn visit_curly_close(&mut self, node: &GreenPunctuation) {
        self.skip(node.length());
    }

    fn visit_square_bracket_close(&mut self, node: &GreenPunctuation) {
        self.skip(node.length());
    }

    fn visit_curly_open(&mut self, node: &GreenPunctuation) {
        self.start_value(node.length());
    }

    fn visit_square_bracket_open(&mut self, node: &GreenPunctuation) {
        self.start_value(node.length());
    }

    fn visit_boolean_literal(&mut self, node: &GreenBooleanLiteral) {
        self.start_value(node.length());
    }

    fn visit_integer_literal(&mut self, node: &GreenIntegerLiteral) {
        self.start_value(node.length());
    }

    fn visit_string_literal(&mut self, node: &GreenStringLiteral) {
        self.start_value(node.length());
    }

    fn visit_error_string(&mut self, node: &GreenErrorString) {
        self.start_value(node.length());
    }

    fn visit_unknown_symbol(&mut self, node: &GreenUnknownSymbol) {
        self.start_value(node.length());
    }

    fn visit_undefined_value(&mut self, node: &GreenUndefinedValue) {
        self.start_value(node.length());
    }
}
