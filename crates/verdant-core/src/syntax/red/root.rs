use super::nodes::{
    JsonBackgroundListSyntax, JsonKeyValueSyntax, JsonListSyntax, JsonMapSyntax,
    JsonMultiValueSyntax, JsonTokenSyntax, JsonValueLeafSyntax, JsonValueWithBackgroundSyntax,
    MultiValueParent,
};
use super::visitor::JsonSyntaxVisitorWithArg;
use super::{JsonSyntax, JsonSyntaxNode};
use crate::syntax::diagnostic::JsonErrorInfo;
use crate::syntax::green::GreenRoot;
use std::sync::Arc;

/// Entry point of a red projection
///
/// Cheap to clone. Each clone shares the green root it was created from.
#[derive(Debug, Clone)]
pub struct JsonRootSyntax {
    green: Arc<GreenRoot>,
}

impl JsonRootSyntax {
    pub fn new(green: Arc<GreenRoot>) -> Self {
        Self { green }
    }

    pub fn green(&self) -> &Arc<GreenRoot> {
        &self.green
    }

    /// The top-level value slot
    pub fn syntax(&self) -> JsonMultiValueSyntax {
        JsonMultiValueSyntax::new(
            MultiValueParent::Root(self.clone()),
            Arc::clone(self.green.syntax()),
        )
    }

    /// All diagnostics of the document in source order
    pub fn errors(&self) -> &[JsonErrorInfo] {
        self.green.errors()
    }

    pub fn has_errors(&self) -> bool {
        self.green.has_errors()
    }

    pub fn length(&self) -> usize {
        self.green.length()
    }

    /// Deepest node covering `offset`, or `None` past the end of the document
    ///
    /// Zero-length nodes such as missing values never cover an offset.
    pub fn find_syntax_at(&self, offset: usize) -> Option<JsonSyntax> {
        if offset >= self.length() {
            return None;
        }
        Some(JsonSyntax::MultiValue(self.syntax()).accept_with_arg(&mut DeepestAt, offset))
    }

    /// Terminals in source order: every token and every non-missing value leaf
    pub fn terminals(&self) -> Vec<JsonSyntax> {
        let mut terminals = Vec::new();
        collect_terminals(JsonSyntax::MultiValue(self.syntax()), &mut terminals);
        terminals
    }

    /// Absolute offsets of every symbol that starts a value
    pub fn value_start_positions(&self) -> Vec<usize> {
        self.green.syntax().value_start_positions()
    }
}

fn collect_terminals(node: JsonSyntax, out: &mut Vec<JsonSyntax>) {
    if node.child_count() == 0 {
        if node.length() > 0 {
            out.push(node);
        }
        return;
    }
    for child in node.children() {
        collect_terminals(child, out);
    }
}

/// Descends to the deepest node covering an absolute offset
///
/// Each step looks the covering child up through the green offset tables
/// instead of scanning the children.
struct DeepestAt;

impl DeepestAt {
    fn descend(&mut self, child: JsonSyntax, offset: usize) -> JsonSyntax {
        child.accept_with_arg(self, offset)
    }
}

impl JsonSyntaxVisitorWithArg for DeepestAt {
    type Arg = usize;
    type Output = JsonSyntax;

    fn visit_multi_value(&mut self, node: &JsonMultiValueSyntax, offset: usize) -> JsonSyntax {
        let relative = offset - node.start();
        match node.green().value_nodes().child_index_at(relative) {
            Some(index) => {
                self.descend(JsonSyntax::ValueWithBackground(node.value_node(index)), offset)
            }
            None => self.descend(JsonSyntax::BackgroundList(node.background_after()), offset),
        }
    }

    fn visit_value_with_background(
        &mut self,
        node: &JsonValueWithBackgroundSyntax,
        offset: usize,
    ) -> JsonSyntax {
        let relative = offset - node.start();
        if relative < node.green().content_offset() {
            self.descend(JsonSyntax::BackgroundList(node.background_before()), offset)
        } else {
            self.descend(node.content().into(), offset)
        }
    }

    fn visit_background_list(
        &mut self,
        node: &JsonBackgroundListSyntax,
        offset: usize,
    ) -> JsonSyntax {
        let relative = offset - node.start();
        match node.green().background().child_index_at(relative) {
            Some(index) => JsonSyntax::Token(node.symbol(index)),
            None => JsonSyntax::BackgroundList(node.clone()),
        }
    }

    fn visit_list(&mut self, node: &JsonListSyntax, offset: usize) -> JsonSyntax {
        let relative = offset - node.start();
        let index = match relative.checked_sub(1) {
            None => 0,
            Some(inner) => match node.green().list_items().child_index_at(inner) {
                Some(child) => child + 1,
                None => node.child_count() - 1,
            },
        };
        self.descend(node.child(index), offset)
    }

    fn visit_map(&mut self, node: &JsonMapSyntax, offset: usize) -> JsonSyntax {
        let relative = offset - node.start();
        let index = match relative.checked_sub(1) {
            None => 0,
            Some(inner) => match node.green().key_value_nodes().child_index_at(inner) {
                Some(child) => child + 1,
                None => node.child_count() - 1,
            },
        };
        self.descend(node.child(index), offset)
    }

    fn visit_key_value(&mut self, node: &JsonKeyValueSyntax, offset: usize) -> JsonSyntax {
        let relative = offset - node.start();
        match node.green().value_section_nodes().child_index_at(relative) {
            Some(index) => self.descend(node.child(index), offset),
            None => JsonSyntax::KeyValue(node.clone()),
        }
    }

    fn visit_value_leaf(&mut self, node: &JsonValueLeafSyntax, _offset: usize) -> JsonSyntax {
        JsonSyntax::ValueLeaf(node.clone())
    }

    fn visit_token(&mut self, node: &JsonTokenSyntax, _offset: usize) -> JsonSyntax {
        JsonSyntax::Token(node.clone())
    }
}
