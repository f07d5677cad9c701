//! Indented text dump of a red tree, one node per line
//!
//! Each line shows the node kind and its absolute range, followed by the
//! literal content for symbols that have any. Empty background runs are
//! left out.

use super::green::{
    GreenBooleanLiteral, GreenComment, GreenErrorString, GreenIntegerLiteral, GreenPunctuation,
    GreenStringLiteral, GreenSymbolVisitorResult, GreenUndefinedValue,
    GreenUnexpectedValueDelimiter, GreenUnknownSymbol, GreenUnterminatedMultiLineComment,
    GreenWhitespace,
};
use super::red::{
    JsonBackgroundListSyntax, JsonKeyValueSyntax, JsonListSyntax, JsonMapSyntax,
    JsonMultiValueSyntax, JsonRootSyntax, JsonSyntax, JsonSyntaxNode, JsonSyntaxVisitor,
    JsonSyntaxVisitorResult, JsonTokenSyntax, JsonValueLeafSyntax, JsonValueWithBackgroundSyntax,
};

/// Render the whole tree below `root`
pub fn dump_tree(root: &JsonRootSyntax) -> String {
    let mut printer = TreePrinter::default();
    root.syntax().accept(&mut printer);
    printer.lines.join("\n")
}

#[derive(Default)]
struct TreePrinter {
    lines: Vec<String>,
    depth: usize,
}

impl TreePrinter {
    fn enter(&mut self, node: JsonSyntax) {
        let header = node.accept_result(&mut NodeHeader);
        self.lines.push(format!("{:indent$}{header}", "", indent = self.depth * 2));

        self.depth += 1;
        for child in node.children() {
            child.accept(self);
        }
        self.depth -= 1;
    }
}

impl JsonSyntaxVisitor for TreePrinter {
    fn visit_multi_value(&mut self, node: &JsonMultiValueSyntax) {
        self.enter(node.clone().into());
    }

    fn visit_value_with_background(&mut self, node: &JsonValueWithBackgroundSyntax) {
        self.enter(node.clone().into());
    }

    fn visit_background_list(&mut self, node: &JsonBackgroundListSyntax) {
        if node.length() > 0 {
            self.enter(node.clone().into());
        }
    }

    fn visit_list(&mut self, node: &JsonListSyntax) {
        self.enter(node.clone().into());
    }

    fn visit_map(&mut self, node: &JsonMapSyntax) {
        self.enter(node.clone().into());
    }

    fn visit_key_value(&mut self, node: &JsonKeyValueSyntax) {
        self.enter(node.clone().into());
    }

    fn visit_value_leaf(&mut self, node: &JsonValueLeafSyntax) {
        self.enter(node.clone().into());
    }

    fn visit_token(&mut self, node: &JsonTokenSyntax) {
        self.enter(node.clone().into());
    }
}

/// First line of a node: kind, range and, for terminals, a content label
struct NodeHeader;

impl NodeHeader {
    fn plain(node: &impl JsonSyntaxNode) -> String {
        format!("{} {}..{}", node.kind(), node.start(), node.end())
    }

    fn labeled(node: &impl JsonSyntaxNode, label: Option<String>) -> String {
        match label {
            Some(label) => format!("{} {label}", Self::plain(node)),
            None => Self::plain(node),
        }
    }
}

impl JsonSyntaxVisitorResult for NodeHeader {
    type Output = String;

    fn visit_multi_value(&mut self, node: &JsonMultiValueSyntax) -> String {
        Self::plain(node)
    }

    fn visit_value_with_background(&mut self, node: &JsonValueWithBackgroundSyntax) -> String {
        Self::plain(node)
    }

    fn visit_background_list(&mut self, node: &JsonBackgroundListSyntax) -> String {
        Self::plain(node)
    }

    fn visit_list(&mut self, node: &JsonListSyntax) -> String {
        Self::plain(node)
    }

    fn visit_map(&mut self, node: &JsonMapSyntax) -> String {
        Self::plain(node)
    }

    fn visit_key_value(&mut self, node: &JsonKeyValueSyntax) -> String {
        Self::plain(node)
    }

    fn visit_value_leaf(&mut self, node: &JsonValueLeafSyntax) -> String {
        let label = node
            .symbol()
            .and_then(|symbol| symbol.accept_result(&mut SymbolLabel));
        Self::labeled(node, label)
    }

    fn visit_token(&mut self, node: &JsonTokenSyntax) -> String {
        Self::labeled(node, node.green().accept_result(&mut SymbolLabel))
    }
}

/// Literal content worth showing next to a symbol's kind
struct SymbolLabel;

impl GreenSymbolVisitorResult for SymbolLabel {
    type Output = Option<String>;

    fn visit_whitespace(&mut self, _node: &GreenWhitespace) -> Option<String> {
        None
    }

    fn visit_comment(&mut self, _node: &GreenComment) -> Option<String> {
        None
    }

    fn visit_unterminated_multi_line_comment(
        &mut self,
        _node: &GreenUnterminatedMultiLineComment,
    ) -> Option<String> {
        None
    }

    fn visit_unexpected_value_delimiter(
        &mut self,
        node: &GreenUnexpectedValueDelimiter,
    ) -> Option<String> {
        Some(node.delimiter().kind().to_string())
    }

    fn visit_colon(&mut self, _node: &GreenPunctuation) -> Option<String> {
        None
    }

    fn visit_comma(&mut self, _node: &GreenPunctuation) -> Option<String> {
        None
    }

    fn visit_curly_close(&mut self, _node: &GreenPunctuation) -> Option<String> {
        None
    }

    fn visit_square_bracket_close(&mut self, _node: &GreenPunctuation) -> Option<String> {
        None
    }

    fn visit_curly_open(&mut self, _node: &GreenPunctuation) -> Option<String> {
        None
    }

    fn visit_square_bracket_open(&mut self, _node: &GreenPunctuation) -> Option<String> {
        None
    }

    fn visit_boolean_literal(&mut self, node: &GreenBooleanLiteral) -> Option<String> {
        Some(node.value().to_string())
    }

    fn visit_integer_literal(&mut self, node: &GreenIntegerLiteral) -> Option<String> {
        Some(node.value().to_string())
    }

    fn visit_string_literal(&mut self, node: &GreenStringLiteral) -> Option<String> {
        Some(format!("{:?}", node.value()))
    }

    fn visit_error_string(&mut self, _node: &GreenErrorString) -> Option<String> {
        None
    }

    fn visit_unknown_symbol(&mut self, node: &GreenUnknownSymbol) -> Option<String> {
        Some(format!("{:?}", node.display_char()))
    }

    fn visit_undefined_value(&mut self, node: &GreenUndefinedValue) -> Option<String> {
        Some(node.text().to_string())
    }
}
