//! Red node types
//!
//! Each red node is an `Rc` around two references: its green node and its
//! red parent. Where a green shape can live in more than one kind of parent,
//! the parent is an enum and every position or parent query matches it
//! exhaustively. The absolute start is computed on first request and cached.

use super::root::JsonRootSyntax;
use super::{JsonSyntax, JsonSyntaxNode};
use crate::syntax::diagnostic::JsonErrorInfo;
use crate::syntax::green::{
    GreenBackgroundList, GreenKeyValue, GreenList, GreenMap, GreenMultiValue, GreenSymbol,
    GreenValue, GreenValueWithBackground,
};
use crate::syntax::kind::{NodeKind, SyntaxKind};
use crate::syntax::span_list::SeparatedChild;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

macro_rules! impl_debug {
    ($ty:ident) => {
        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("range", &self.range())
                    .finish()
            }
        }
    };
}

// ============================================================================
// Multi value
// ============================================================================

/// Containers of a value slot
#[derive(Debug, Clone)]
pub enum MultiValueParent {
    Root(JsonRootSyntax),
    ListItem { list: JsonListSyntax, index: usize },
    ValueSection { key_value: JsonKeyValueSyntax, index: usize },
}

#[derive(Clone)]
pub struct JsonMultiValueSyntax(Rc<MultiValueData>);

struct MultiValueData {
    parent: MultiValueParent,
    green: Arc<GreenMultiValue>,
    start: OnceCell<usize>,
}

impl JsonMultiValueSyntax {
    pub(crate) fn new(parent: MultiValueParent, green: Arc<GreenMultiValue>) -> Self {
        Self(Rc::new(MultiValueData {
            parent,
            green,
            start: OnceCell::new(),
        }))
    }

    pub fn parent(&self) -> &MultiValueParent {
        &self.0.parent
    }

    pub fn green(&self) -> &Arc<GreenMultiValue> {
        &self.0.green
    }

    pub fn value_node_count(&self) -> usize {
        self.0.green.value_nodes().len()
    }

    pub fn value_node(&self, index: usize) -> JsonValueWithBackgroundSyntax {
        let green = Arc::clone(&self.0.green.value_nodes()[index]);
        JsonValueWithBackgroundSyntax::new(self.clone(), index, green)
    }

    pub fn value_nodes(&self) -> impl Iterator<Item = JsonValueWithBackgroundSyntax> + '_ {
        (0..self.value_node_count()).map(|i| self.value_node(i))
    }

    /// Content of the first value node
    pub fn value(&self) -> JsonValueSyntax {
        self.value_node(0).content()
    }

    pub fn background_after(&self) -> JsonBackgroundListSyntax {
        JsonBackgroundListSyntax::new(
            BackgroundListParent::After(self.clone()),
            Arc::clone(self.0.green.background_after()),
        )
    }
}

impl JsonSyntaxNode for JsonMultiValueSyntax {
    fn start(&self) -> usize {
        *self.0.start.get_or_init(|| match &self.0.parent {
            MultiValueParent::Root(_) => 0,
            MultiValueParent::ListItem { list, index } => {
                list.start() + list.green().list_item_offset(*index)
            }
            MultiValueParent::ValueSection { key_value, index } => {
                key_value.start() + key_value.green().value_section_offset(*index)
            }
        })
    }

    fn length(&self) -> usize {
        self.0.green.length()
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        match &self.0.parent {
            MultiValueParent::Root(_) => None,
            MultiValueParent::ListItem { list, .. } => Some(JsonSyntax::List(list.clone())),
            MultiValueParent::ValueSection { key_value, .. } => {
                Some(JsonSyntax::KeyValue(key_value.clone()))
            }
        }
    }

    fn kind(&self) -> SyntaxKind {
        NodeKind::MultiValue.into()
    }

    fn child_count(&self) -> usize {
        self.0.green.child_count()
    }

    fn child(&self, index: usize) -> JsonSyntax {
        let value_node_count = self.value_node_count();
        if index < value_node_count {
            JsonSyntax::ValueWithBackground(self.value_node(index))
        } else {
            assert_eq!(index, value_node_count, "child index out of range");
            JsonSyntax::BackgroundList(self.background_after())
        }
    }

    fn child_start_position(&self, index: usize) -> usize {
        self.0.green.child_offset(index)
    }

    fn has_errors(&self) -> bool {
        self.0.green.has_errors()
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        self.0.green.errors(self.start())
    }
}

impl_debug!(JsonMultiValueSyntax);

// ============================================================================
// Value with background
// ============================================================================

#[derive(Clone)]
pub struct JsonValueWithBackgroundSyntax(Rc<ValueWithBackgroundData>);

struct ValueWithBackgroundData {
    parent: JsonMultiValueSyntax,
    index: usize,
    green: Arc<GreenValueWithBackground>,
    start: OnceCell<usize>,
}

impl JsonValueWithBackgroundSyntax {
    fn new(
        parent: JsonMultiValueSyntax,
        index: usize,
        green: Arc<GreenValueWithBackground>,
    ) -> Self {
        Self(Rc::new(ValueWithBackgroundData {
            parent,
            index,
            green,
            start: OnceCell::new(),
        }))
    }

    pub fn parent(&self) -> &JsonMultiValueSyntax {
        &self.0.parent
    }

    /// Position among the value nodes of the parent
    pub fn index(&self) -> usize {
        self.0.index
    }

    pub fn green(&self) -> &Arc<GreenValueWithBackground> {
        &self.0.green
    }

    pub fn background_before(&self) -> JsonBackgroundListSyntax {
        JsonBackgroundListSyntax::new(
            BackgroundListParent::Before(self.clone()),
            Arc::clone(self.0.green.background_before()),
        )
    }

    pub fn content(&self) -> JsonValueSyntax {
        match self.0.green.content() {
            GreenValue::List(green) => {
                JsonValueSyntax::List(JsonListSyntax::new(self.clone(), Arc::clone(green)))
            }
            GreenValue::Map(green) => {
                JsonValueSyntax::Map(JsonMapSyntax::new(self.clone(), Arc::clone(green)))
            }
            leaf => JsonValueSyntax::Leaf(JsonValueLeafSyntax::new(self.clone(), leaf.clone())),
        }
    }
}

impl JsonSyntaxNode for JsonValueWithBackgroundSyntax {
    fn start(&self) -> usize {
        *self.0.start.get_or_init(|| {
            self.0.parent.start() + self.0.parent.green().value_node_offset(self.0.index)
        })
    }

    fn length(&self) -> usize {
        self.0.green.length()
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        Some(JsonSyntax::MultiValue(self.0.parent.clone()))
    }

    fn kind(&self) -> SyntaxKind {
        NodeKind::ValueWithBackground.into()
    }

    fn child_count(&self) -> usize {
        2
    }

    fn child(&self, index: usize) -> JsonSyntax {
        match index {
            0 => JsonSyntax::BackgroundList(self.background_before()),
            1 => self.content().into(),
            _ => panic!("child index {index} out of range"),
        }
    }

    fn child_start_position(&self, index: usize) -> usize {
        match index {
            0 => 0,
            1 => self.0.green.content_offset(),
            _ => panic!("child index {index} out of range"),
        }
    }

    fn has_errors(&self) -> bool {
        self.0.green.has_errors()
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        self.0.green.errors(self.start())
    }
}

impl_debug!(JsonValueWithBackgroundSyntax);

// ============================================================================
// Background list
// ============================================================================

/// Containers of a background run
#[derive(Debug, Clone)]
pub enum BackgroundListParent {
    /// Background in front of a value
    Before(JsonValueWithBackgroundSyntax),
    /// Background after the last value of a slot
    After(JsonMultiValueSyntax),
}

#[derive(Clone)]
pub struct JsonBackgroundListSyntax(Rc<BackgroundListData>);

struct BackgroundListData {
    parent: BackgroundListParent,
    green: Arc<GreenBackgroundList>,
    start: OnceCell<usize>,
}

impl JsonBackgroundListSyntax {
    fn new(parent: BackgroundListParent, green: Arc<GreenBackgroundList>) -> Self {
        Self(Rc::new(BackgroundListData {
            parent,
            green,
            start: OnceCell::new(),
        }))
    }

    pub fn parent(&self) -> &BackgroundListParent {
        &self.0.parent
    }

    pub fn green(&self) -> &Arc<GreenBackgroundList> {
        &self.0.green
    }

    pub fn symbol(&self, index: usize) -> JsonTokenSyntax {
        let green = self.0.green.background()[index].clone();
        JsonTokenSyntax::new(
            TokenParent::Background {
                background: self.clone(),
                index,
            },
            green,
        )
    }

    pub fn symbols(&self) -> impl Iterator<Item = JsonTokenSyntax> + '_ {
        (0..self.child_count()).map(|i| self.symbol(i))
    }
}

impl JsonSyntaxNode for JsonBackgroundListSyntax {
    fn start(&self) -> usize {
        *self.0.start.get_or_init(|| match &self.0.parent {
            BackgroundListParent::Before(value_node) => value_node.start(),
            BackgroundListParent::After(multi_value) => {
                multi_value.start() + multi_value.green().background_after_offset()
            }
        })
    }

    fn length(&self) -> usize {
        self.0.green.length()
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        match &self.0.parent {
            BackgroundListParent::Before(value_node) => {
                Some(JsonSyntax::ValueWithBackground(value_node.clone()))
            }
            BackgroundListParent::After(multi_value) => {
                Some(JsonSyntax::MultiValue(multi_value.clone()))
            }
        }
    }

    fn kind(&self) -> SyntaxKind {
        NodeKind::BackgroundList.into()
    }

    fn child_count(&self) -> usize {
        self.0.green.background().len()
    }

    fn child(&self, index: usize) -> JsonSyntax {
        JsonSyntax::Token(self.symbol(index))
    }

    fn child_start_position(&self, index: usize) -> usize {
        self.0.green.background().element_offset(index)
    }

    fn has_errors(&self) -> bool {
        self.0.green.has_errors()
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        self.0.green.errors(self.start())
    }
}

impl_debug!(JsonBackgroundListSyntax);

// ============================================================================
// Values
// ============================================================================

/// Red content of a value slot
#[derive(Debug, Clone)]
pub enum JsonValueSyntax {
    List(JsonListSyntax),
    Map(JsonMapSyntax),
    Leaf(JsonValueLeafSyntax),
}

impl JsonValueSyntax {
    pub fn parent(&self) -> &JsonValueWithBackgroundSyntax {
        match self {
            JsonValueSyntax::List(node) => node.parent(),
            JsonValueSyntax::Map(node) => node.parent(),
            JsonValueSyntax::Leaf(node) => node.parent(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, JsonValueSyntax::Leaf(leaf) if leaf.green().is_missing())
    }
}

impl From<JsonValueSyntax> for JsonSyntax {
    fn from(value: JsonValueSyntax) -> Self {
        match value {
            JsonValueSyntax::List(node) => JsonSyntax::List(node),
            JsonValueSyntax::Map(node) => JsonSyntax::Map(node),
            JsonValueSyntax::Leaf(node) => JsonSyntax::ValueLeaf(node),
        }
    }
}

/// Offset of the content slot of a value node
fn content_start(parent: &JsonValueWithBackgroundSyntax) -> usize {
    parent.start() + parent.green().content_offset()
}

#[derive(Clone)]
pub struct JsonListSyntax(Rc<ListData>);

struct ListData {
    parent: JsonValueWithBackgroundSyntax,
    green: Arc<GreenList>,
    start: OnceCell<usize>,
}

impl JsonListSyntax {
    fn new(parent: JsonValueWithBackgroundSyntax, green: Arc<GreenList>) -> Self {
        Self(Rc::new(ListData {
            parent,
            green,
            start: OnceCell::new(),
        }))
    }

    pub fn parent(&self) -> &JsonValueWithBackgroundSyntax {
        &self.0.parent
    }

    pub fn green(&self) -> &Arc<GreenList> {
        &self.0.green
    }

    pub fn list_item(&self, index: usize) -> JsonMultiValueSyntax {
        let green = Arc::clone(&self.0.green.list_items()[index]);
        JsonMultiValueSyntax::new(
            MultiValueParent::ListItem {
                list: self.clone(),
                index,
            },
            green,
        )
    }

    /// All item slots, including an empty one after a trailing comma
    pub fn list_items(&self) -> impl Iterator<Item = JsonMultiValueSyntax> + '_ {
        (0..self.0.green.list_items().len()).map(|i| self.list_item(i))
    }

    fn token(&self, child_index: usize, green: GreenSymbol) -> JsonTokenSyntax {
        JsonTokenSyntax::new(
            TokenParent::List {
                list: self.clone(),
                child_index,
            },
            green,
        )
    }
}

impl JsonSyntaxNode for JsonListSyntax {
    fn start(&self) -> usize {
        *self.0.start.get_or_init(|| content_start(&self.0.parent))
    }

    fn length(&self) -> usize {
        self.0.green.length()
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        Some(JsonSyntax::ValueWithBackground(self.0.parent.clone()))
    }

    fn kind(&self) -> SyntaxKind {
        NodeKind::List.into()
    }

    fn child_count(&self) -> usize {
        self.0.green.child_count()
    }

    fn child(&self, index: usize) -> JsonSyntax {
        let items = self.0.green.list_items();
        let interleaved = items.all_children_count();
        if index == 0 {
            JsonSyntax::Token(self.token(0, GreenSymbol::square_bracket_open()))
        } else if index <= interleaved {
            match items.child(index - 1) {
                SeparatedChild::Element(_) => {
                    JsonSyntax::MultiValue(self.list_item((index - 1) / 2))
                }
                SeparatedChild::Separator(comma) => {
                    JsonSyntax::Token(self.token(index, comma.clone()))
                }
            }
        } else {
            assert!(
                index == interleaved + 1 && !self.0.green.missing_square_bracket_close(),
                "child index {index} out of range"
            );
            JsonSyntax::Token(self.token(index, GreenSymbol::square_bracket_close()))
        }
    }

    fn child_start_position(&self, index: usize) -> usize {
        self.0.green.child_offset(index)
    }

    fn has_errors(&self) -> bool {
        self.0.green.has_errors()
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        self.0.green.errors(self.start())
    }
}

impl_debug!(JsonListSyntax);

#[derive(Clone)]
pub struct JsonMapSyntax(Rc<MapData>);

struct MapData {
    parent: JsonValueWithBackgroundSyntax,
    green: Arc<GreenMap>,
    start: OnceCell<usize>,
}

impl JsonMapSyntax {
    fn new(parent: JsonValueWithBackgroundSyntax, green: Arc<GreenMap>) -> Self {
        Self(Rc::new(MapData {
            parent,
            green,
            start: OnceCell::new(),
        }))
    }

    pub fn parent(&self) -> &JsonValueWithBackgroundSyntax {
        &self.0.parent
    }

    pub fn green(&self) -> &Arc<GreenMap> {
        &self.0.green
    }

    pub fn key_value_node(&self, index: usize) -> JsonKeyValueSyntax {
        let green = Arc::clone(&self.0.green.key_value_nodes()[index]);
        JsonKeyValueSyntax::new(self.clone(), index, green)
    }

    pub fn key_value_nodes(&self) -> impl Iterator<Item = JsonKeyValueSyntax> + '_ {
        (0..self.0.green.key_value_nodes().len()).map(|i| self.key_value_node(i))
    }

    fn token(&self, child_index: usize, green: GreenSymbol) -> JsonTokenSyntax {
        JsonTokenSyntax::new(
            TokenParent::Map {
                map: self.clone(),
                child_index,
            },
            green,
        )
    }
}

impl JsonSyntaxNode for JsonMapSyntax {
    fn start(&self) -> usize {
        *self.0.start.get_or_init(|| content_start(&self.0.parent))
    }

    fn length(&self) -> usize {
        self.0.green.length()
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        Some(JsonSyntax::ValueWithBackground(self.0.parent.clone()))
    }

    fn kind(&self) -> SyntaxKind {
        NodeKind::Map.into()
    }

    fn child_count(&self) -> usize {
        self.0.green.child_count()
    }

    fn child(&self, index: usize) -> JsonSyntax {
        let nodes = self.0.green.key_value_nodes();
        let interleaved = nodes.all_children_count();
        if index == 0 {
            JsonSyntax::Token(self.token(0, GreenSymbol::curly_open()))
        } else if index <= interleaved {
            match nodes.child(index - 1) {
                SeparatedChild::Element(_) => {
                    JsonSyntax::KeyValue(self.key_value_node((index - 1) / 2))
                }
                SeparatedChild::Separator(comma) => {
                    JsonSyntax::Token(self.token(index, comma.clone()))
                }
            }
        } else {
            assert!(
                index == interleaved + 1 && !self.0.green.missing_curly_close(),
                "child index {index} out of range"
            );
            JsonSyntax::Token(self.token(index, GreenSymbol::curly_close()))
        }
    }

    fn child_start_position(&self, index: usize) -> usize {
        self.0.green.child_offset(index)
    }

    fn has_errors(&self) -> bool {
        self.0.green.has_errors()
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        self.0.green.errors(self.start())
    }
}

impl_debug!(JsonMapSyntax);

#[derive(Clone)]
pub struct JsonKeyValueSyntax(Rc<KeyValueData>);

struct KeyValueData {
    parent: JsonMapSyntax,
    index: usize,
    green: Arc<GreenKeyValue>,
    start: OnceCell<usize>,
}

impl JsonKeyValueSyntax {
    fn new(parent: JsonMapSyntax, index: usize, green: Arc<GreenKeyValue>) -> Self {
        Self(Rc::new(KeyValueData {
            parent,
            index,
            green,
            start: OnceCell::new(),
        }))
    }

    pub fn parent(&self) -> &JsonMapSyntax {
        &self.0.parent
    }

    /// Position among the key-value nodes of the parent map
    pub fn index(&self) -> usize {
        self.0.index
    }

    pub fn green(&self) -> &Arc<GreenKeyValue> {
        &self.0.green
    }

    pub fn value_section(&self, index: usize) -> JsonMultiValueSyntax {
        let green = Arc::clone(&self.0.green.value_section_nodes()[index]);
        JsonMultiValueSyntax::new(
            MultiValueParent::ValueSection {
                key_value: self.clone(),
                index,
            },
            green,
        )
    }

    pub fn value_sections(&self) -> impl Iterator<Item = JsonMultiValueSyntax> + '_ {
        (0..self.0.green.value_section_nodes().len()).map(|i| self.value_section(i))
    }

    pub fn key_section(&self) -> JsonMultiValueSyntax {
        self.value_section(0)
    }

    /// The section after the first colon, if any
    pub fn first_value_section(&self) -> Option<JsonMultiValueSyntax> {
        (self.0.green.value_section_nodes().len() > 1).then(|| self.value_section(1))
    }
}

impl JsonSyntaxNode for JsonKeyValueSyntax {
    fn start(&self) -> usize {
        *self.0.start.get_or_init(|| {
            self.0.parent.start() + self.0.parent.green().key_value_node_offset(self.0.index)
        })
    }

    fn length(&self) -> usize {
        self.0.green.length()
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        Some(JsonSyntax::Map(self.0.parent.clone()))
    }

    fn kind(&self) -> SyntaxKind {
        NodeKind::KeyValue.into()
    }

    fn child_count(&self) -> usize {
        self.0.green.child_count()
    }

    fn child(&self, index: usize) -> JsonSyntax {
        match self.0.green.value_section_nodes().child(index) {
            SeparatedChild::Element(_) => JsonSyntax::MultiValue(self.value_section(index / 2)),
            SeparatedChild::Separator(colon) => JsonSyntax::Token(JsonTokenSyntax::new(
                TokenParent::KeyValue {
                    key_value: self.clone(),
                    child_index: index,
                },
                colon.clone(),
            )),
        }
    }

    fn child_start_position(&self, index: usize) -> usize {
        self.0.green.child_offset(index)
    }

    fn has_errors(&self) -> bool {
        self.0.green.has_errors()
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        self.0.green.errors(self.start())
    }
}

impl_debug!(JsonKeyValueSyntax);

/// Content of a value slot that is neither a list nor a map: a literal,
/// an erroneous value, or a missing value
#[derive(Clone)]
pub struct JsonValueLeafSyntax(Rc<ValueLeafData>);

struct ValueLeafData {
    parent: JsonValueWithBackgroundSyntax,
    green: GreenValue,
    start: OnceCell<usize>,
}

impl JsonValueLeafSyntax {
    fn new(parent: JsonValueWithBackgroundSyntax, green: GreenValue) -> Self {
        debug_assert!(!matches!(green, GreenValue::List(_) | GreenValue::Map(_)));
        Self(Rc::new(ValueLeafData {
            parent,
            green,
            start: OnceCell::new(),
        }))
    }

    pub fn parent(&self) -> &JsonValueWithBackgroundSyntax {
        &self.0.parent
    }

    pub fn green(&self) -> &GreenValue {
        &self.0.green
    }

    /// The terminal symbol, unless this is a missing value
    pub fn symbol(&self) -> Option<GreenSymbol> {
        self.0.green.as_symbol()
    }
}

impl JsonSyntaxNode for JsonValueLeafSyntax {
    fn start(&self) -> usize {
        *self.0.start.get_or_init(|| content_start(&self.0.parent))
    }

    fn length(&self) -> usize {
        self.0.green.length()
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        Some(JsonSyntax::ValueWithBackground(self.0.parent.clone()))
    }

    fn kind(&self) -> SyntaxKind {
        self.0.green.kind()
    }

    fn child_count(&self) -> usize {
        0
    }

    fn child(&self, index: usize) -> JsonSyntax {
        panic!("child index {index} out of range: value leaves have no children")
    }

    fn child_start_position(&self, index: usize) -> usize {
        panic!("child index {index} out of range: value leaves have no children")
    }

    fn has_errors(&self) -> bool {
        self.0.green.has_errors()
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        self.0.green.errors(self.start())
    }
}

impl_debug!(JsonValueLeafSyntax);

// ============================================================================
// Tokens
// ============================================================================

/// Containers of punctuation and background symbols
#[derive(Debug, Clone)]
pub enum TokenParent {
    /// `[`, a comma, or `]`
    List { list: JsonListSyntax, child_index: usize },
    /// `{`, a comma, or `}`
    Map { map: JsonMapSyntax, child_index: usize },
    /// A colon between sections
    KeyValue { key_value: JsonKeyValueSyntax, child_index: usize },
    /// One symbol of a background run
    Background { background: JsonBackgroundListSyntax, index: usize },
}

/// A punctuation or background symbol
#[derive(Clone)]
pub struct JsonTokenSyntax(Rc<TokenData>);

struct TokenData {
    parent: TokenParent,
    green: GreenSymbol,
    start: OnceCell<usize>,
}

impl JsonTokenSyntax {
    fn new(parent: TokenParent, green: GreenSymbol) -> Self {
        Self(Rc::new(TokenData {
            parent,
            green,
            start: OnceCell::new(),
        }))
    }

    pub fn parent(&self) -> &TokenParent {
        &self.0.parent
    }

    pub fn green(&self) -> &GreenSymbol {
        &self.0.green
    }
}

impl JsonSyntaxNode for JsonTokenSyntax {
    fn start(&self) -> usize {
        *self.0.start.get_or_init(|| match &self.0.parent {
            TokenParent::List { list, child_index } => {
                list.start() + list.green().child_offset(*child_index)
            }
            TokenParent::Map { map, child_index } => {
                map.start() + map.green().child_offset(*child_index)
            }
            TokenParent::KeyValue {
                key_value,
                child_index,
            } => key_value.start() + key_value.green().child_offset(*child_index),
            TokenParent::Background { background, index } => {
                background.start() + background.green().background().element_offset(*index)
            }
        })
    }

    fn length(&self) -> usize {
        self.0.green.length()
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        Some(match &self.0.parent {
            TokenParent::List { list, .. } => JsonSyntax::List(list.clone()),
            TokenParent::Map { map, .. } => JsonSyntax::Map(map.clone()),
            TokenParent::KeyValue { key_value, .. } => JsonSyntax::KeyValue(key_value.clone()),
            TokenParent::Background { background, .. } => {
                JsonSyntax::BackgroundList(background.clone())
            }
        })
    }

    fn kind(&self) -> SyntaxKind {
        self.0.green.kind().into()
    }

    fn child_count(&self) -> usize {
        0
    }

    fn child(&self, index: usize) -> JsonSyntax {
        panic!("child index {index} out of range: tokens have no children")
    }

    fn child_start_position(&self, index: usize) -> usize {
        panic!("child index {index} out of range: tokens have no children")
    }

    fn has_errors(&self) -> bool {
        self.0.green.has_errors()
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        self.0.green.errors(self.start())
    }
}

impl_debug!(JsonTokenSyntax);
