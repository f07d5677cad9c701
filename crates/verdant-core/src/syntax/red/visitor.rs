//! Double dispatch over the closed set of red node types
//!
//! Same three shapes as the green symbol visitors, one required method per
//! red type. Which symbol a token or value leaf holds is a second dispatch
//! on its green symbol.

use super::nodes::{
    JsonBackgroundListSyntax, JsonKeyValueSyntax, JsonListSyntax, JsonMapSyntax,
    JsonMultiValueSyntax, JsonTokenSyntax, JsonValueLeafSyntax, JsonValueWithBackgroundSyntax,
};

pub trait JsonSyntaxVisitor {
    fn visit_multi_value(&mut self, node: &JsonMultiValueSyntax);
    fn visit_value_with_background(&mut self, node: &JsonValueWithBackgroundSyntax);
    fn visit_background_list(&mut self, node: &JsonBackgroundListSyntax);
    fn visit_list(&mut self, node: &JsonListSyntax);
    fn visit_map(&mut self, node: &JsonMapSyntax);
    fn visit_key_value(&mut self, node: &JsonKeyValueSyntax);
    fn visit_value_leaf(&mut self, node: &JsonValueLeafSyntax);
    fn visit_token(&mut self, node: &JsonTokenSyntax);
}

pub trait JsonSyntaxVisitorResult {
    type Output;

    fn visit_multi_value(&mut self, node: &JsonMultiValueSyntax) -> Self::Output;
    fn visit_value_with_background(&mut self, node: &JsonValueWithBackgroundSyntax)
    -> Self::Output;
    fn visit_background_list(&mut self, node: &JsonBackgroundListSyntax) -> Self::Output;
    fn visit_list(&mut self, node: &JsonListSyntax) -> Self::Output;
    fn visit_map(&mut self, node: &JsonMapSyntax) -> Self::Output;
    fn visit_key_value(&mut self, node: &JsonKeyValueSyntax) -> Self::Output;
    fn visit_value_leaf(&mut self, node: &JsonValueLeafSyntax) -> Self::Output;
    fn visit_token(&mut self, node: &JsonTokenSyntax) -> Self::Output;
}

pub trait JsonSyntaxVisitorWithArg {
    type Arg;
    type Output;

    fn visit_multi_value(&mut self, node: &JsonMultiValueSyntax, arg: Self::Arg) -> Self::Output;
    fn visit_value_with_background(
        &mut self,
        node: &JsonValueWithBackgroundSyntax,
        arg: Self::Arg,
    ) -> Self::Output;
    fn visit_background_list(
        &mut self,
        node: &JsonBackgroundListSyntax,
        arg: Self::Arg,
    ) -> Self::Output;
    fn visit_list(&mut self, node: &JsonListSyntax, arg: Self::Arg) -> Self::Output;
    fn visit_map(&mut self, node: &JsonMapSyntax, arg: Self::Arg) -> Self::Output;
    fn visit_key_value(&mut self, node: &JsonKeyValueSyntax, arg: Self::Arg) -> Self::Output;
    fn visit_value_leaf(&mut self, node: &JsonValueLeafSyntax, arg: Self::Arg) -> Self::Output;
    fn visit_token(&mut self, node: &JsonTokenSyntax, arg: Self::Arg) -> Self::Output;
}
