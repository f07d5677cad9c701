//! Red tree: an on-demand projection of a green tree with parents and
//! absolute positions
//!
//! Red nodes are created while navigating and are cheap to drop. They are
//! `Rc` based and stay on the thread that created them; any number of
//! threads can project the same [`GreenRoot`](crate::syntax::green::GreenRoot)
//! independently.
//!
//! Positions are never stored in the green tree. A red node's start is its
//! parent's start plus the green offset of the child slot it occupies, so
//! reparenting is impossible and positions cannot drift.

mod nodes;
mod root;
pub mod visitor;

pub use nodes::{
    BackgroundListParent, JsonBackgroundListSyntax, JsonKeyValueSyntax, JsonListSyntax,
    JsonMapSyntax, JsonMultiValueSyntax, JsonTokenSyntax, JsonValueLeafSyntax, JsonValueSyntax,
    JsonValueWithBackgroundSyntax, MultiValueParent, TokenParent,
};
pub use root::JsonRootSyntax;
pub use visitor::{JsonSyntaxVisitor, JsonSyntaxVisitorResult, JsonSyntaxVisitorWithArg};

use crate::syntax::diagnostic::JsonErrorInfo;
use crate::syntax::kind::SyntaxKind;
use std::ops::Range;

/// Navigation shared by every red node
pub trait JsonSyntaxNode {
    /// Absolute start offset in the document
    fn start(&self) -> usize;

    fn length(&self) -> usize;

    fn end(&self) -> usize {
        self.start() + self.length()
    }

    fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// `None` only for the top-level value slot
    fn parent_syntax(&self) -> Option<JsonSyntax>;

    fn kind(&self) -> SyntaxKind;

    fn child_count(&self) -> usize;

    /// Panics if `index` is out of range.
    fn child(&self, index: usize) -> JsonSyntax;

    /// Offset of child `index` relative to this node's start
    fn child_start_position(&self, index: usize) -> usize;

    fn children(&self) -> impl Iterator<Item = JsonSyntax> + '_
    where
        Self: Sized,
    {
        (0..self.child_count()).map(move |i| self.child(i))
    }

    /// Whether a terminal below this node carries a diagnostic
    ///
    /// Only diagnostics intrinsic to terminals count, such as a bad escape
    /// or an unknown symbol. Structural diagnostics from the parser live on
    /// the document and are reported by [`JsonRootSyntax::errors`].
    fn has_errors(&self) -> bool;

    /// Diagnostics carried by terminals below this node, in absolute offsets
    /// and source order. See [`JsonSyntaxNode::has_errors`] for what is left
    /// out.
    fn errors(&self) -> Vec<JsonErrorInfo>;
}

/// Any red node
#[derive(Debug, Clone)]
pub enum JsonSyntax {
    MultiValue(JsonMultiValueSyntax),
    ValueWithBackground(JsonValueWithBackgroundSyntax),
    BackgroundList(JsonBackgroundListSyntax),
    List(JsonListSyntax),
    Map(JsonMapSyntax),
    KeyValue(JsonKeyValueSyntax),
    ValueLeaf(JsonValueLeafSyntax),
    Token(JsonTokenSyntax),
}

macro_rules! dispatch {
    ($self:ident, $node:ident => $body:expr) => {
        match $self {
            JsonSyntax::MultiValue($node) => $body,
            JsonSyntax::ValueWithBackground($node) => $body,
            JsonSyntax::BackgroundList($node) => $body,
            JsonSyntax::List($node) => $body,
            JsonSyntax::Map($node) => $body,
            JsonSyntax::KeyValue($node) => $body,
            JsonSyntax::ValueLeaf($node) => $body,
            JsonSyntax::Token($node) => $body,
        }
    };
}

impl JsonSyntax {
    pub fn accept<V: JsonSyntaxVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            JsonSyntax::MultiValue(node) => visitor.visit_multi_value(node),
            JsonSyntax::ValueWithBackground(node) => visitor.visit_value_with_background(node),
            JsonSyntax::BackgroundList(node) => visitor.visit_background_list(node),
            JsonSyntax::List(node) => visitor.visit_list(node),
            JsonSyntax::Map(node) => visitor.visit_map(node),
            JsonSyntax::KeyValue(node) => visitor.visit_key_value(node),
            JsonSyntax::ValueLeaf(node) => visitor.visit_value_leaf(node),
            JsonSyntax::Token(node) => visitor.visit_token(node),
        }
    }

    pub fn accept_result<V: JsonSyntaxVisitorResult + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            JsonSyntax::MultiValue(node) => visitor.visit_multi_value(node),
            JsonSyntax::ValueWithBackground(node) => visitor.visit_value_with_background(node),
            JsonSyntax::BackgroundList(node) => visitor.visit_background_list(node),
            JsonSyntax::List(node) => visitor.visit_list(node),
            JsonSyntax::Map(node) => visitor.visit_map(node),
            JsonSyntax::KeyValue(node) => visitor.visit_key_value(node),
            JsonSyntax::ValueLeaf(node) => visitor.visit_value_leaf(node),
            JsonSyntax::Token(node) => visitor.visit_token(node),
        }
    }

    pub fn accept_with_arg<V: JsonSyntaxVisitorWithArg + ?Sized>(
        &self,
        visitor: &mut V,
        arg: V::Arg,
    ) -> V::Output {
        match self {
            JsonSyntax::MultiValue(node) => visitor.visit_multi_value(node, arg),
            JsonSyntax::ValueWithBackground(node) => visitor.visit_value_with_background(node, arg),
            JsonSyntax::BackgroundList(node) => visitor.visit_background_list(node, arg),
            JsonSyntax::List(node) => visitor.visit_list(node, arg),
            JsonSyntax::Map(node) => visitor.visit_map(node, arg),
            JsonSyntax::KeyValue(node) => visitor.visit_key_value(node, arg),
            JsonSyntax::ValueLeaf(node) => visitor.visit_value_leaf(node, arg),
            JsonSyntax::Token(node) => visitor.visit_token(node, arg),
        }
    }

    /// Parent, grandparent, and so on up to the top-level value slot
    pub fn ancestors(&self) -> impl Iterator<Item = JsonSyntax> {
        std::iter::successors(self.parent_syntax(), JsonSyntax::parent_syntax)
    }
}

impl JsonSyntaxNode for JsonSyntax {
    fn start(&self) -> usize {
        dispatch!(self, node => node.start())
    }

    fn length(&self) -> usize {
        dispatch!(self, node => node.length())
    }

    fn parent_syntax(&self) -> Option<JsonSyntax> {
        dispatch!(self, node => node.parent_syntax())
    }

    fn kind(&self) -> SyntaxKind {
        dispatch!(self, node => node.kind())
    }

    fn child_count(&self) -> usize {
        dispatch!(self, node => node.child_count())
    }

    fn child(&self, index: usize) -> JsonSyntax {
        dispatch!(self, node => node.child(index))
    }

    fn child_start_position(&self, index: usize) -> usize {
        dispatch!(self, node => node.child_start_position(index))
    }

    fn has_errors(&self) -> bool {
        dispatch!(self, node => node.has_errors())
    }

    fn errors(&self) -> Vec<JsonErrorInfo> {
        dispatch!(self, node => node.errors())
    }
}

macro_rules! impl_accept {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for JsonSyntax {
                fn from(node: $ty) -> Self {
                    JsonSyntax::$variant(node)
                }
            }

            impl $ty {
                pub fn accept<V: JsonSyntaxVisitor + ?Sized>(&self, visitor: &mut V) {
                    JsonSyntax::from(self.clone()).accept(visitor)
                }

                pub fn accept_result<V: JsonSyntaxVisitorResult + ?Sized>(
                    &self,
                    visitor: &mut V,
                ) -> V::Output {
                    JsonSyntax::from(self.clone()).accept_result(visitor)
                }

                pub fn accept_with_arg<V: JsonSyntaxVisitorWithArg + ?Sized>(
                    &self,
                    visitor: &mut V,
                    arg: V::Arg,
                ) -> V::Output {
                    JsonSyntax::from(self.clone()).accept_with_arg(visitor, arg)
                }
            }
        )*
    };
}

impl_accept!(
    JsonMultiValueSyntax => MultiValue,
    JsonValueWithBackgroundSyntax => ValueWithBackground,
    JsonBackgroundListSyntax => BackgroundList,
    JsonListSyntax => List,
    JsonMapSyntax => Map,
    JsonKeyValueSyntax => KeyValue,
    JsonValueLeafSyntax => ValueLeaf,
    JsonTokenSyntax => Token,
);
