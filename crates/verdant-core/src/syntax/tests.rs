//! Navigation tests across the green and red layers

use super::green::GreenValue;
use super::red::{JsonValueSyntax, MultiValueParent, TokenParent};
use super::*;

const SAMPLE: &str = r#"// settings
{
  "name" : "verdant",
  "sizes": [1, 22, 333],
  /* nested */ "flags": { "on": true, "off": false },
  "empty": [],
  "broken": [ * ,
}"#;

/// Every child starts at its parent's start plus its relative offset, knows
/// its parent, and the children of a node exactly cover it
fn check_consistency(node: &JsonSyntax) {
    let mut covered = 0;
    for i in 0..node.child_count() {
        let child = node.child(i);
        assert_eq!(
            child.start(),
            node.start() + node.child_start_position(i),
            "child {i} of {} at {:?}",
            node.kind(),
            node.range()
        );
        assert_eq!(child.start(), node.start() + covered);
        covered += child.length();

        let parent = child.parent_syntax().expect("children always have a parent");
        assert_eq!(parent.kind(), node.kind());
        assert_eq!(parent.range(), node.range());

        check_consistency(&child);
    }
    if node.child_count() > 0 {
        assert_eq!(covered, node.length());
    }
}

#[test]
fn test_red_positions_are_consistent() {
    let root = parse(SAMPLE);
    assert_eq!(root.length(), SAMPLE.len());
    check_consistency(&JsonSyntax::MultiValue(root.syntax()));
}

#[test]
fn test_leading_background_shifts_value_positions() {
    let root = parse("  [1,2,3]");
    let syntax = root.syntax();
    assert_eq!(syntax.value_node(0).background_before().length(), 2);

    let JsonValueSyntax::List(list) = syntax.value() else {
        panic!("expected a list");
    };
    assert_eq!(list.start(), 2);
    let third = JsonSyntax::from(list.list_item(2).value());
    assert_eq!(third.kind(), SyntaxKind::Symbol(SymbolKind::IntegerLiteral));
    assert_eq!(third.range(), 7..8);
}

#[test]
fn test_root_has_no_parent() {
    let root = parse("1");
    let syntax = root.syntax();
    assert!(syntax.parent_syntax().is_none());
    assert!(matches!(syntax.parent(), MultiValueParent::Root(_)));
    assert_eq!(syntax.start(), 0);
}

#[test]
fn test_terminal_text_matches_source() {
    let root = parse(SAMPLE);
    let terminals = root.terminals();

    let text: String = terminals.iter().map(|t| &SAMPLE[t.range()]).collect();
    assert_eq!(text, SAMPLE);

    for terminal in &terminals {
        let slice = &SAMPLE[terminal.range()];
        match terminal.kind() {
            SyntaxKind::Symbol(SymbolKind::Comma) => assert_eq!(slice, ","),
            SyntaxKind::Symbol(SymbolKind::Colon) => assert_eq!(slice, ":"),
            SyntaxKind::Symbol(SymbolKind::StringLiteral) => {
                assert!(slice.starts_with('"') && slice.ends_with('"'));
            }
            SyntaxKind::Symbol(SymbolKind::Whitespace) => assert!(slice.trim().is_empty()),
            SyntaxKind::Symbol(SymbolKind::Comment) => assert!(slice.starts_with('/')),
            _ => {}
        }
    }
}

#[test]
fn test_list_item_and_comma_positions() {
    let source = "[1,22,333]";
    let root = parse(source);
    let JsonValueSyntax::List(list) = root.syntax().value() else {
        panic!("expected a list");
    };

    let item_starts: Vec<usize> = list.list_items().map(|item| item.start()).collect();
    assert_eq!(item_starts, vec![1, 3, 6]);

    let commas: Vec<usize> = list
        .children()
        .filter(|child| child.kind() == SyntaxKind::Symbol(SymbolKind::Comma))
        .map(|child| child.start())
        .collect();
    assert_eq!(commas, vec![2, 5]);
    assert_eq!(list.green().comma_offset(1), 5);

    let JsonSyntax::Token(close) = list.child(list.child_count() - 1) else {
        panic!("expected the closing bracket");
    };
    assert!(matches!(close.parent(), TokenParent::List { child_index: 6, .. }));
    assert_eq!(close.start(), 9);
}

#[test]
fn test_key_value_navigation() {
    let source = r#"{ "a" : 1 , "b" : }"#;
    let root = parse(source);
    let JsonValueSyntax::Map(map) = root.syntax().value() else {
        panic!("expected a map");
    };

    let key_values: Vec<_> = map.key_value_nodes().collect();
    assert_eq!(key_values.len(), 2);
    assert_eq!(map.green().filtered_key_value_count(), 2);

    let first = &key_values[0];
    assert_eq!(first.range(), 1..10);
    assert_eq!(first.green().valid_key().map(|k| k.value()), Some("a"));
    let colon = first.child(1);
    assert_eq!(colon.start(), 6);
    assert_eq!(first.green().colon_offset(0), 5);

    let value = first.first_value_section().expect("has a value section");
    assert_eq!(value.start(), 7);
    assert!(matches!(value.value(), JsonValueSyntax::Leaf(_)));

    let second = &key_values[1];
    let missing = second.first_value_section().expect("has a value section").value();
    assert!(missing.is_missing());
    let JsonValueSyntax::Leaf(leaf) = missing else {
        panic!("expected a leaf");
    };
    assert_eq!(leaf.start(), 18);
    assert_eq!(leaf.length(), 0);
}

#[test]
fn test_background_before_and_after() {
    let source = "  1  ";
    let root = parse(source);
    let syntax = root.syntax();

    let value_node = syntax.value_node(0);
    assert_eq!(value_node.background_before().range(), 0..2);
    assert_eq!(syntax.background_after().range(), 3..5);

    let JsonValueSyntax::Leaf(leaf) = value_node.content() else {
        panic!("expected a leaf");
    };
    assert_eq!(leaf.range(), 2..3);
    assert!(matches!(leaf.green(), GreenValue::IntegerLiteral(_)));
}

#[test]
fn test_find_syntax_at() {
    let source = r#"[ true, "x" ]"#;
    let root = parse(source);

    let at = |offset| root.find_syntax_at(offset).map(|node| (node.kind(), node.range()));
    assert_eq!(at(0), Some((SymbolKind::SquareBracketOpen.into(), 0..1)));
    assert_eq!(at(1), Some((SymbolKind::Whitespace.into(), 1..2)));
    assert_eq!(at(4), Some((SymbolKind::BooleanLiteral.into(), 2..6)));
    assert_eq!(at(6), Some((SymbolKind::Comma.into(), 6..7)));
    assert_eq!(at(9), Some((SymbolKind::StringLiteral.into(), 8..11)));
    assert_eq!(at(12), Some((SymbolKind::SquareBracketClose.into(), 12..13)));
    assert_eq!(at(13), None);
}

#[test]
fn test_find_syntax_at_matches_terminals() {
    let root = parse(SAMPLE);
    for terminal in root.terminals() {
        for offset in terminal.range() {
            let found = root.find_syntax_at(offset).expect("offset inside the document");
            assert_eq!(found.range(), terminal.range());
            assert_eq!(found.kind(), terminal.kind());
        }
    }
}

#[test]
fn test_ancestors_end_at_root() {
    let root = parse(r#"{"a":[[1]]}"#);
    let deepest = root.find_syntax_at(7).expect("inside the document");
    assert_eq!(deepest.kind(), SymbolKind::IntegerLiteral.into());

    let ancestors: Vec<JsonSyntax> = deepest.ancestors().collect();
    let last = ancestors.last().expect("at least the root");
    assert!(last.parent_syntax().is_none());
    assert_eq!(last.range(), 0..root.length());
    assert!(ancestors.iter().all(|a| a.range().contains(&7)));
}

#[test]
fn test_value_start_positions() {
    let root = parse(r#" [1, {"a": true}] x"#);
    assert_eq!(root.value_start_positions(), vec![1, 2, 5, 6, 11, 18]);
}

#[test]
fn test_node_errors_are_absolute_and_local() {
    let root = parse(r#"[1, "a\qb", [*]]"#);
    let JsonValueSyntax::List(list) = root.syntax().value() else {
        panic!("expected a list");
    };

    let string_item = list.list_item(1);
    let errors = string_item.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_code(), JsonErrorCode::UnrecognizedEscapeSequence);
    assert_eq!(errors[0].start(), 6);

    let nested = list.list_item(2);
    assert!(nested.has_errors());
    assert_eq!(nested.errors()[0].range(), 13..14);

    assert!(!list.list_item(0).has_errors());
    assert!(list.list_item(0).errors().is_empty());
}

#[test]
fn test_visitor_dispatch_reaches_every_red_type() {
    struct KindCounter(std::collections::HashMap<&'static str, usize>);

    impl red::JsonSyntaxVisitor for KindCounter {
        fn visit_multi_value(&mut self, node: &red::JsonMultiValueSyntax) {
            *self.0.entry("multi_value").or_default() += 1;
            node.children().for_each(|c| c.accept(self));
        }
        fn visit_value_with_background(&mut self, node: &red::JsonValueWithBackgroundSyntax) {
            *self.0.entry("value_with_background").or_default() += 1;
            node.children().for_each(|c| c.accept(self));
        }
        fn visit_background_list(&mut self, node: &red::JsonBackgroundListSyntax) {
            *self.0.entry("background_list").or_default() += 1;
            node.children().for_each(|c| c.accept(self));
        }
        fn visit_list(&mut self, node: &red::JsonListSyntax) {
            *self.0.entry("list").or_default() += 1;
            node.children().for_each(|c| c.accept(self));
        }
        fn visit_map(&mut self, node: &red::JsonMapSyntax) {
            *self.0.entry("map").or_default() += 1;
            node.children().for_each(|c| c.accept(self));
        }
        fn visit_key_value(&mut self, node: &red::JsonKeyValueSyntax) {
            *self.0.entry("key_value").or_default() += 1;
            node.children().for_each(|c| c.accept(self));
        }
        fn visit_value_leaf(&mut self, _node: &red::JsonValueLeafSyntax) {
            *self.0.entry("value_leaf").or_default() += 1;
        }
        fn visit_token(&mut self, _node: &red::JsonTokenSyntax) {
            *self.0.entry("token").or_default() += 1;
        }
    }

    let root = parse(r#"{"a": [1]}"#);
    let mut counter = KindCounter(Default::default());
    root.syntax().accept(&mut counter);

    // root slot, key section, value section, list item
    assert_eq!(counter.0["multi_value"], 4);
    assert_eq!(counter.0["map"], 1);
    assert_eq!(counter.0["list"], 1);
    assert_eq!(counter.0["key_value"], 1);
    assert_eq!(counter.0["value_leaf"], 2);
    // { : [ ] } and the space before [
    assert_eq!(counter.0["token"], 6);
}
