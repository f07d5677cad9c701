//! Composite green nodes: values, lists, maps and their building blocks
//!
//! Every composite computes its length once, at construction, from its
//! children and caches whether anything below it carries diagnostics.
//! Children never point back at their parents, so any subtree can be shared
//! between documents.

use super::background::GreenBackgroundList;
use super::symbol::{
    GreenBooleanLiteral, GreenErrorString, GreenIntegerLiteral, GreenStringLiteral, GreenSymbol,
    GreenUndefinedValue, GreenUnknownSymbol,
};
use crate::syntax::diagnostic::JsonErrorInfo;
use crate::syntax::kind::{NodeKind, SymbolKind, SyntaxKind};
use crate::syntax::span_list::{SeparatedSpanList, SpanList, Spanned};
use std::sync::Arc;

/// Zero-length placeholder for a value slot without content
#[derive(Debug, PartialEq, Eq)]
pub struct GreenMissingValue {
    _private: (),
}

pub static MISSING_VALUE: GreenMissingValue = GreenMissingValue { _private: () };

/// Content of a value slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreenValue {
    List(Arc<GreenList>),
    Map(Arc<GreenMap>),
    BooleanLiteral(&'static GreenBooleanLiteral),
    IntegerLiteral(Arc<GreenIntegerLiteral>),
    StringLiteral(Arc<GreenStringLiteral>),
    ErrorString(Arc<GreenErrorString>),
    UnknownSymbol(Arc<GreenUnknownSymbol>),
    UndefinedValue(Arc<GreenUndefinedValue>),
    Missing(&'static GreenMissingValue),
}

impl GreenValue {
    pub fn missing() -> Self {
        GreenValue::Missing(&MISSING_VALUE)
    }

    /// Value for a literal symbol. `None` for anything but a literal value
    /// starter; lists and maps are assembled from several symbols.
    pub fn from_symbol(symbol: &GreenSymbol) -> Option<Self> {
        match symbol {
            GreenSymbol::BooleanLiteral(node) => Some(GreenValue::BooleanLiteral(*node)),
            GreenSymbol::IntegerLiteral(node) => Some(GreenValue::IntegerLiteral(Arc::clone(node))),
            GreenSymbol::StringLiteral(node) => Some(GreenValue::StringLiteral(Arc::clone(node))),
            GreenSymbol::ErrorString(node) => Some(GreenValue::ErrorString(Arc::clone(node))),
            GreenSymbol::UnknownSymbol(node) => Some(GreenValue::UnknownSymbol(Arc::clone(node))),
            GreenSymbol::UndefinedValue(node) => Some(GreenValue::UndefinedValue(Arc::clone(node))),
            _ => None,
        }
    }

    /// The terminal symbol this value consists of, if it is a literal
    pub fn as_symbol(&self) -> Option<GreenSymbol> {
        match self {
            GreenValue::BooleanLiteral(node) => Some(GreenSymbol::BooleanLiteral(*node)),
            GreenValue::IntegerLiteral(node) => Some(GreenSymbol::IntegerLiteral(Arc::clone(node))),
            GreenValue::StringLiteral(node) => Some(GreenSymbol::StringLiteral(Arc::clone(node))),
            GreenValue::ErrorString(node) => Some(GreenSymbol::ErrorString(Arc::clone(node))),
            GreenValue::UnknownSymbol(node) => Some(GreenSymbol::UnknownSymbol(Arc::clone(node))),
            GreenValue::UndefinedValue(node) => Some(GreenSymbol::UndefinedValue(Arc::clone(node))),
            GreenValue::List(_) | GreenValue::Map(_) | GreenValue::Missing(_) => None,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            GreenValue::List(_) => NodeKind::List.into(),
            GreenValue::Map(_) => NodeKind::Map.into(),
            GreenValue::BooleanLiteral(_) => SymbolKind::BooleanLiteral.into(),
            GreenValue::IntegerLiteral(_) => SymbolKind::IntegerLiteral.into(),
            GreenValue::StringLiteral(_) => SymbolKind::StringLiteral.into(),
            GreenValue::ErrorString(_) => SymbolKind::ErrorString.into(),
            GreenValue::UnknownSymbol(_) => SymbolKind::UnknownSymbol.into(),
            GreenValue::UndefinedValue(_) => SymbolKind::UndefinedValue.into(),
            GreenValue::Missing(_) => NodeKind::MissingValue.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, GreenValue::Missing(_))
    }

    pub fn length(&self) -> usize {
        match self {
            GreenValue::List(node) => node.length(),
            GreenValue::Map(node) => node.length(),
            GreenValue::BooleanLiteral(node) => node.length(),
            GreenValue::IntegerLiteral(node) => node.length(),
            GreenValue::StringLiteral(node) => node.length(),
            GreenValue::ErrorString(node) => node.length(),
            GreenValue::UnknownSymbol(node) => node.length(),
            GreenValue::UndefinedValue(node) => node.length(),
            GreenValue::Missing(_) => 0,
        }
    }

    pub fn has_errors(&self) -> bool {
        match self {
            GreenValue::List(node) => node.has_errors(),
            GreenValue::Map(node) => node.has_errors(),
            GreenValue::Missing(_) => false,
            _ => self.as_symbol().is_some_and(|symbol| symbol.has_errors()),
        }
    }

    pub fn errors(&self, start: usize) -> Vec<JsonErrorInfo> {
        match self {
            GreenValue::List(node) => node.errors(start),
            GreenValue::Map(node) => node.errors(start),
            GreenValue::Missing(_) => Vec::new(),
            _ => self
                .as_symbol()
                .map(|symbol| symbol.errors(start))
                .unwrap_or_default(),
        }
    }
}

/// A value together with the background preceding it
#[derive(Debug, PartialEq, Eq)]
pub struct GreenValueWithBackground {
    background_before: Arc<GreenBackgroundList>,
    content: GreenValue,
    length: usize,
}

impl GreenValueWithBackground {
    pub fn new(background_before: Arc<GreenBackgroundList>, content: GreenValue) -> Self {
        let length = background_before.length() + content.length();
        Self {
            background_before,
            content,
            length,
        }
    }

    pub fn background_before(&self) -> &Arc<GreenBackgroundList> {
        &self.background_before
    }

    pub fn content(&self) -> &GreenValue {
        &self.content
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Offset of the content node
    pub fn content_offset(&self) -> usize {
        self.background_before.length()
    }

    pub fn has_errors(&self) -> bool {
        self.background_before.has_errors() || self.content.has_errors()
    }

    pub fn errors(&self, start: usize) -> Vec<JsonErrorInfo> {
        let mut errors = self.background_before.errors(start);
        errors.extend(self.content.errors(start + self.content_offset()));
        errors
    }
}

impl Spanned for GreenValueWithBackground {
    fn length(&self) -> usize {
        self.length
    }
}

/// One value slot: normally a single value, followed by background
///
/// A slot always holds at least one value node; an empty slot holds a
/// missing value. Further value nodes only appear after error recovery.
#[derive(Debug, PartialEq, Eq)]
pub struct GreenMultiValue {
    value_nodes: SpanList<Arc<GreenValueWithBackground>>,
    background_after: Arc<GreenBackgroundList>,
    length: usize,
    contains_errors: bool,
}

impl GreenMultiValue {
    /// Panics if `value_nodes` is empty.
    pub fn new(
        value_nodes: Vec<Arc<GreenValueWithBackground>>,
        background_after: Arc<GreenBackgroundList>,
    ) -> Self {
        assert!(
            !value_nodes.is_empty(),
            "a multi value needs at least one value node"
        );
        let contains_errors =
            background_after.has_errors() || value_nodes.iter().any(|node| node.has_errors());
        let value_nodes = SpanList::new(value_nodes);
        let length = value_nodes.length() + background_after.length();
        Self {
            value_nodes,
            background_after,
            length,
            contains_errors,
        }
    }

    /// Slot with a missing value preceded by `background`
    pub fn missing(background: Arc<GreenBackgroundList>) -> Self {
        Self::new(
            vec![Arc::new(GreenValueWithBackground::new(
                background,
                GreenValue::missing(),
            ))],
            GreenBackgroundList::empty(),
        )
    }

    pub fn value_nodes(&self) -> &SpanList<Arc<GreenValueWithBackground>> {
        &self.value_nodes
    }

    pub fn background_after(&self) -> &Arc<GreenBackgroundList> {
        &self.background_after
    }

    /// Content of the first value node
    pub fn value(&self) -> &GreenValue {
        self.value_nodes[0].content()
    }

    /// Whether the slot has no content at all
    pub fn is_missing(&self) -> bool {
        self.value_nodes.len() == 1 && self.value().is_missing()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn value_node_offset(&self, index: usize) -> usize {
        self.value_nodes.element_offset(index)
    }

    pub fn background_after_offset(&self) -> usize {
        self.value_nodes.length()
    }

    /// Value nodes followed by the background after them
    pub fn child_count(&self) -> usize {
        self.value_nodes.len() + 1
    }

    pub fn child_offset(&self, index: usize) -> usize {
        if index < self.value_nodes.len() {
            self.value_node_offset(index)
        } else {
            assert_eq!(index, self.value_nodes.len(), "child index out of range");
            self.background_after_offset()
        }
    }

    pub fn has_errors(&self) -> bool {
        self.contains_errors
    }

    pub fn errors(&self, start: usize) -> Vec<JsonErrorInfo> {
        if !self.contains_errors {
            return Vec::new();
        }
        let mut errors: Vec<JsonErrorInfo> = self
            .value_nodes
            .iter()
            .enumerate()
            .flat_map(|(i, node)| node.errors(start + self.value_node_offset(i)))
            .collect();
        errors.extend(
            self.background_after
                .errors(start + self.background_after_offset()),
        );
        errors
    }
}

impl Spanned for GreenMultiValue {
    fn length(&self) -> usize {
        self.length
    }
}

/// `[` followed by comma separated value slots and an optional `]`
#[derive(Debug, PartialEq, Eq)]
pub struct GreenList {
    list_items: SeparatedSpanList<Arc<GreenMultiValue>>,
    missing_square_bracket_close: bool,
    length: usize,
    contains_errors: bool,
}

impl GreenList {
    /// Panics if `list_items` is empty; `[]` holds one missing value.
    pub fn new(list_items: Vec<Arc<GreenMultiValue>>, missing_square_bracket_close: bool) -> Self {
        let contains_errors = list_items.iter().any(|item| item.has_errors());
        let list_items = SeparatedSpanList::new(list_items, GreenSymbol::comma());
        let length = 1 + list_items.length() + usize::from(!missing_square_bracket_close);
        Self {
            list_items,
            missing_square_bracket_close,
            length,
            contains_errors,
        }
    }

    pub fn list_items(&self) -> &SeparatedSpanList<Arc<GreenMultiValue>> {
        &self.list_items
    }

    pub fn missing_square_bracket_close(&self) -> bool {
        self.missing_square_bracket_close
    }

    /// Number of items, not counting an empty slot after a trailing comma
    /// or the single empty slot of `[]`
    pub fn filtered_list_item_count(&self) -> usize {
        let count = self.list_items.len();
        if self.list_items[count - 1].is_missing() {
            count - 1
        } else {
            count
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn list_item_offset(&self, index: usize) -> usize {
        1 + self.list_items.element_offset(index)
    }

    pub fn comma_offset(&self, index: usize) -> usize {
        1 + self.list_items.separator_offset(index)
    }

    /// `[`, the interleaved items and commas, then `]` unless missing
    pub fn child_count(&self) -> usize {
        1 + self.list_items.all_children_count() + usize::from(!self.missing_square_bracket_close)
    }

    pub fn child_offset(&self, index: usize) -> usize {
        let interleaved = self.list_items.all_children_count();
        match index {
            0 => 0,
            i if i <= interleaved => 1 + self.list_items.child_offset(i - 1),
            i => {
                assert!(
                    i == interleaved + 1 && !self.missing_square_bracket_close,
                    "child index out of range"
                );
                self.length - 1
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        self.contains_errors
    }

    pub fn errors(&self, start: usize) -> Vec<JsonErrorInfo> {
        if !self.contains_errors {
            return Vec::new();
        }
        self.list_items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| item.errors(start + self.list_item_offset(i)))
            .collect()
    }
}

/// `{` followed by comma separated key-value nodes and an optional `}`
#[derive(Debug, PartialEq, Eq)]
pub struct GreenMap {
    key_value_nodes: SeparatedSpanList<Arc<GreenKeyValue>>,
    missing_curly_close: bool,
    length: usize,
    contains_errors: bool,
}

impl GreenMap {
    /// Panics if `key_value_nodes` is empty; `{}` holds one empty node.
    pub fn new(key_value_nodes: Vec<Arc<GreenKeyValue>>, missing_curly_close: bool) -> Self {
        let contains_errors = key_value_nodes.iter().any(|node| node.has_errors());
        let key_value_nodes = SeparatedSpanList::new(key_value_nodes, GreenSymbol::comma());
        let length = 1 + key_value_nodes.length() + usize::from(!missing_curly_close);
        Self {
            key_value_nodes,
            missing_curly_close,
            length,
            contains_errors,
        }
    }

    pub fn key_value_nodes(&self) -> &SeparatedSpanList<Arc<GreenKeyValue>> {
        &self.key_value_nodes
    }

    pub fn missing_curly_close(&self) -> bool {
        self.missing_curly_close
    }

    /// Number of key-value nodes, not counting a trailing empty one
    pub fn filtered_key_value_count(&self) -> usize {
        let count = self.key_value_nodes.len();
        if self.key_value_nodes[count - 1].is_empty() {
            count - 1
        } else {
            count
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn key_value_node_offset(&self, index: usize) -> usize {
        1 + self.key_value_nodes.element_offset(index)
    }

    pub fn comma_offset(&self, index: usize) -> usize {
        1 + self.key_value_nodes.separator_offset(index)
    }

    /// `{`, the interleaved key-value nodes and commas, then `}` unless missing
    pub fn child_count(&self) -> usize {
        1 + self.key_value_nodes.all_children_count() + usize::from(!self.missing_curly_close)
    }

    pub fn child_offset(&self, index: usize) -> usize {
        let interleaved = self.key_value_nodes.all_children_count();
        match index {
            0 => 0,
            i if i <= interleaved => 1 + self.key_value_nodes.child_offset(i - 1),
            i => {
                assert!(
                    i == interleaved + 1 && !self.missing_curly_close,
                    "child index out of range"
                );
                self.length - 1
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        self.contains_errors
    }

    pub fn errors(&self, start: usize) -> Vec<JsonErrorInfo> {
        if !self.contains_errors {
            return Vec::new();
        }
        self.key_value_nodes
            .iter()
            .enumerate()
            .flat_map(|(i, node)| node.errors(start + self.key_value_node_offset(i)))
            .collect()
    }
}

/// Colon separated sections of one map entry; the first section is the key
#[derive(Debug, PartialEq, Eq)]
pub struct GreenKeyValue {
    valid_key: Option<Arc<GreenStringLiteral>>,
    value_section_nodes: SeparatedSpanList<Arc<GreenMultiValue>>,
    contains_errors: bool,
}

impl GreenKeyValue {
    /// Panics if `valid_key` is given but is not the value of the first
    /// section, or if there are no sections.
    pub fn new(
        valid_key: Option<Arc<GreenStringLiteral>>,
        value_section_nodes: Vec<Arc<GreenMultiValue>>,
    ) -> Self {
        let contains_errors = value_section_nodes.iter().any(|node| node.has_errors());
        let value_section_nodes = SeparatedSpanList::new(value_section_nodes, GreenSymbol::colon());
        if let Some(key) = &valid_key {
            let is_first_value = matches!(
                value_section_nodes[0].value(),
                GreenValue::StringLiteral(first) if Arc::ptr_eq(first, key)
            );
            assert!(is_first_value, "a valid key must be the value of the key section");
        }
        Self {
            valid_key,
            value_section_nodes,
            contains_errors,
        }
    }

    pub fn valid_key(&self) -> Option<&Arc<GreenStringLiteral>> {
        self.valid_key.as_ref()
    }

    pub fn value_section_nodes(&self) -> &SeparatedSpanList<Arc<GreenMultiValue>> {
        &self.value_section_nodes
    }

    /// The key section
    pub fn key_node(&self) -> &Arc<GreenMultiValue> {
        &self.value_section_nodes[0]
    }

    /// The section after the first colon, if there is one
    pub fn first_value_node(&self) -> Option<&Arc<GreenMultiValue>> {
        self.value_section_nodes.get(1)
    }

    /// A lone empty key section, as in `{}` or after a trailing comma
    pub fn is_empty(&self) -> bool {
        self.value_section_nodes.len() == 1 && self.key_node().is_missing()
    }

    pub fn length(&self) -> usize {
        self.value_section_nodes.length()
    }

    pub fn value_section_offset(&self, index: usize) -> usize {
        self.value_section_nodes.element_offset(index)
    }

    pub fn colon_offset(&self, index: usize) -> usize {
        self.value_section_nodes.separator_offset(index)
    }

    /// Sections interleaved with colons
    pub fn child_count(&self) -> usize {
        self.value_section_nodes.all_children_count()
    }

    pub fn child_offset(&self, index: usize) -> usize {
        self.value_section_nodes.child_offset(index)
    }

    pub fn has_errors(&self) -> bool {
        self.contains_errors
    }

    pub fn errors(&self, start: usize) -> Vec<JsonErrorInfo> {
        if !self.contains_errors {
            return Vec::new();
        }
        self.value_section_nodes
            .iter()
            .enumerate()
            .flat_map(|(i, node)| node.errors(start + self.value_section_offset(i)))
            .collect()
    }
}

impl Spanned for GreenKeyValue {
    fn length(&self) -> usize {
        GreenKeyValue::length(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(symbol: GreenSymbol) -> Arc<GreenMultiValue> {
        value_with_background(GreenBackgroundList::empty(), symbol)
    }

    fn value_with_background(
        background: Arc<GreenBackgroundList>,
        symbol: GreenSymbol,
    ) -> Arc<GreenMultiValue> {
        let content = GreenValue::from_symbol(&symbol).unwrap();
        Arc::new(GreenMultiValue::new(
            vec![Arc::new(GreenValueWithBackground::new(background, content))],
            GreenBackgroundList::empty(),
        ))
    }

    #[test]
    fn test_list_length_and_offsets() {
        // [1,22,333]
        let list = GreenList::new(
            vec![
                value(GreenSymbol::integer(1, 1)),
                value(GreenSymbol::integer(22, 2)),
                value(GreenSymbol::integer(333, 3)),
            ],
            false,
        );
        assert_eq!(list.length(), 10);
        assert_eq!(list.list_item_offset(0), 1);
        assert_eq!(list.comma_offset(0), 2);
        assert_eq!(list.list_item_offset(1), 3);
        assert_eq!(list.comma_offset(1), 5);
        assert_eq!(list.list_item_offset(2), 6);
        assert_eq!(list.child_count(), 7);
        assert_eq!(list.child_offset(6), 9);
    }

    #[test]
    fn test_list_missing_close() {
        let list = GreenList::new(vec![value(GreenSymbol::integer(1, 1))], true);
        assert_eq!(list.length(), 2);
        assert_eq!(list.child_count(), 2);
    }

    #[test]
    fn test_filtered_list_item_count() {
        let empty = GreenList::new(
            vec![Arc::new(GreenMultiValue::missing(GreenBackgroundList::empty()))],
            false,
        );
        assert_eq!(empty.filtered_list_item_count(), 0);

        let trailing = GreenList::new(
            vec![
                value(GreenSymbol::boolean(true)),
                Arc::new(GreenMultiValue::missing(GreenBackgroundList::empty())),
            ],
            false,
        );
        assert_eq!(trailing.filtered_list_item_count(), 1);
    }

    #[test]
    fn test_key_value_sections() {
        // "a":1
        let key = GreenSymbol::string("a", 3);
        let GreenSymbol::StringLiteral(literal) = &key else {
            unreachable!()
        };
        let key_value = GreenKeyValue::new(
            Some(Arc::clone(literal)),
            vec![value(key.clone()), value(GreenSymbol::integer(1, 1))],
        );
        assert_eq!(key_value.length(), 5);
        assert_eq!(key_value.colon_offset(0), 3);
        assert_eq!(key_value.value_section_offset(1), 4);
        assert_eq!(key_value.valid_key().unwrap().value(), "a");
    }

    #[test]
    #[should_panic(expected = "valid key")]
    fn test_key_value_rejects_foreign_key() {
        let GreenSymbol::StringLiteral(literal) = GreenSymbol::string("a", 3) else {
            unreachable!()
        };
        GreenKeyValue::new(
            Some(literal),
            vec![value(GreenSymbol::string("a", 3)), value(GreenSymbol::integer(1, 1))],
        );
    }

    #[test]
    fn test_errors_bubble_up_with_offsets() {
        // [ *]
        let background = GreenBackgroundList::create(vec![GreenSymbol::whitespace(1)]);
        let list = GreenList::new(
            vec![value_with_background(background, GreenSymbol::unknown_symbol('*'))],
            false,
        );
        assert!(list.has_errors());

        let errors = list.errors(5);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].start(), 7);
    }

    #[test]
    fn test_missing_value_is_zero_length() {
        let background = GreenBackgroundList::create(vec![GreenSymbol::whitespace(2)]);
        let slot = GreenMultiValue::missing(background);
        assert!(slot.is_missing());
        assert_eq!(slot.length(), 2);
        assert_eq!(slot.background_after_offset(), 2);
    }

    #[test]
    #[should_panic(expected = "at least one value node")]
    fn test_empty_multi_value_fails_fast() {
        GreenMultiValue::new(Vec::new(), GreenBackgroundList::empty());
    }
}
