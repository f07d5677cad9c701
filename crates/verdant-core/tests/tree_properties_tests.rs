//! Properties every parsed tree must have, whatever the input

use rayon::prelude::*;
use std::sync::Arc;
use verdant_core::syntax::green::{GreenBackgroundList, GreenValue};
use verdant_core::syntax::red::JsonValueSyntax;
use verdant_core::{
    GreenSymbol, JsonErrorCode, JsonRootSyntax, JsonSyntaxNode, ParseOptions, SymbolKind, parse,
    parse_symbols, parse_with_options, tokenize,
};

const INPUTS: &[&str] = &[
    "",
    "   ",
    "true",
    "[1, 2, 3]",
    r#"{ "a" : 1 , "b" : }"#,
    "[1,22,333]",
    r#"{"nested": {"list": [[], {}, [true, false]]}}"#,
    "// leading\n/* block */ [ /* inside */ 1 ] // trailing",
    "]]}}::,,",
    r#"{"unterminated": "abc"#,
    "[1 2 3 : } ] {",
    r#"{"x" : 1 : 2 : 3, 5 : "k", : }"#,
    "/* never closed",
    "€ ñ 😀 \"ü\\u00fc\"",
    "-12 +3 1.5e3 nul 99999999999999999999",
];

#[test]
fn test_lengths_cover_the_source() {
    for input in INPUTS {
        let root = parse(input);
        assert_eq!(root.length(), input.len(), "length of {input:?}");

        let text: String = root.terminals().iter().map(|t| &input[t.range()]).collect();
        assert_eq!(text, *input, "terminals of {input:?}");
    }
}

#[test]
fn test_tokenizer_is_lossless() {
    for input in INPUTS {
        let total: usize = tokenize(input).iter().map(GreenSymbol::length).sum();
        assert_eq!(total, input.len());
    }
}

#[test]
fn test_diagnostics_lie_within_the_document_in_order() {
    for input in INPUTS {
        let root = parse(input);
        let errors = root.errors();
        assert!(errors.iter().all(|e| e.end() <= input.len()), "{input:?}");
        assert!(
            errors.windows(2).all(|pair| pair[0].start() <= pair[1].start()),
            "{input:?}"
        );
    }
}

#[test]
fn test_node_errors_are_in_source_order() {
    for input in INPUTS.iter().copied().chain(["\"a\\q", "[\"\\x\\y"]) {
        let errors = parse(input).syntax().errors();
        assert!(
            errors.windows(2).all(|pair| pair[0].start() <= pair[1].start()),
            "{input:?}"
        );
    }

    let errors = parse("\"a\\q").syntax().errors();
    let starts: Vec<usize> = errors.iter().map(|e| e.start()).collect();
    assert_eq!(starts, vec![0, 2]);
}

#[test]
fn test_deep_nesting_stays_bounded() {
    let source = "[".repeat(100_000);
    let root = parse(&source);
    assert_eq!(root.length(), source.len());
    assert_eq!(root.terminals().len(), source.len());
    assert!(root.find_syntax_at(99_999).is_some());

    let max_depth = ParseOptions::default().max_depth;
    let eofs = root
        .errors()
        .iter()
        .filter(|e| e.error_code() == JsonErrorCode::UnexpectedEofInArray)
        .count();
    assert_eq!(eofs, max_depth);
}

#[test]
fn test_node_errors_are_subset_of_document_errors() {
    for input in INPUTS {
        let root = parse(input);
        for terminal in root.terminals() {
            for error in terminal.errors() {
                assert!(root.errors().contains(&error), "{error} in {input:?}");
                assert!(error.start() >= terminal.start() && error.end() <= terminal.end());
            }
        }
    }
}

#[test]
fn test_missing_value_in_map() {
    let root = parse(r#"{ "a" : 1 , "b" : }"#);
    let errors = root.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_code(), JsonErrorCode::MissingValue);
    assert_eq!(errors[0].start(), 18);
    assert_eq!(errors[0].length(), 1);
}

#[test]
fn test_separator_offsets() {
    let root = parse("[1,22,333]");
    let JsonValueSyntax::List(list) = root.syntax().value() else {
        panic!("expected a list");
    };
    let green = list.green();
    assert_eq!(green.list_items().separator_offset(0), 1);
    assert_eq!(green.list_items().separator_offset(1), 4);
    assert_eq!(green.comma_offset(0), 2);
    assert_eq!(green.comma_offset(1), 5);
    assert_eq!(list.length(), 10);
}

#[test]
fn test_shared_leaves_across_documents() {
    let first = tokenize("[true, false]   ,");
    let second = tokenize("{\"x\":true}   ");

    let find = |symbols: &[GreenSymbol], kind: SymbolKind| {
        symbols
            .iter()
            .find(|s| s.kind() == kind)
            .cloned()
            .expect("symbol present")
    };

    let first_true = find(&first, SymbolKind::BooleanLiteral);
    let second_true = find(&second, SymbolKind::BooleanLiteral);
    assert!(first_true.ptr_eq(&second_true));
    assert!(find(&first, SymbolKind::Comma).ptr_eq(&GreenSymbol::comma()));

    let spaces = |symbols: &[GreenSymbol]| {
        symbols
            .iter()
            .find(|s| s.kind() == SymbolKind::Whitespace && s.length() == 3)
            .cloned()
            .expect("three spaces")
    };
    assert!(spaces(&first).ptr_eq(&spaces(&second)));
}

#[test]
fn test_empty_background_is_shared() {
    let root = parse("1");
    let syntax = root.syntax();
    let background = syntax.value_node(0).green().background_before().clone();
    assert!(Arc::ptr_eq(&background, &GreenBackgroundList::empty()));
    assert!(Arc::ptr_eq(
        syntax.green().background_after(),
        &GreenBackgroundList::empty()
    ));
}

#[test]
fn test_missing_value_is_shared() {
    let first = parse("[]");
    let second = parse("{\"a\":}");

    let missing_in = |root: &JsonRootSyntax| -> GreenValue {
        match root.syntax().value() {
            JsonValueSyntax::List(list) => list.list_item(0).green().value().clone(),
            JsonValueSyntax::Map(map) => map
                .key_value_node(0)
                .first_value_section()
                .expect("value section")
                .green()
                .value()
                .clone(),
            JsonValueSyntax::Leaf(_) => panic!("expected a list or map"),
        }
    };

    match (missing_in(&first), missing_in(&second)) {
        (GreenValue::Missing(a), GreenValue::Missing(b)) => assert!(std::ptr::eq(a, b)),
        other => panic!("expected two missing values, got {other:?}"),
    }
}

#[test]
fn test_parse_options_change_only_diagnostics() {
    let source = "[1, /* c */ 2,]";
    let default = parse(source);
    let lenient = parse_with_options(source, &ParseOptions::lenient());
    let strict = parse_with_options(source, &ParseOptions::strict());

    assert_eq!(default.green().syntax(), lenient.green().syntax());
    assert_eq!(default.green().syntax(), strict.green().syntax());

    assert_eq!(default.errors().len(), 1);
    assert!(lenient.errors().is_empty());
    let strict_codes: Vec<JsonErrorCode> =
        strict.errors().iter().map(|e| e.error_code()).collect();
    assert_eq!(
        strict_codes,
        vec![JsonErrorCode::CommentNotAllowed, JsonErrorCode::MissingValue]
    );
}

#[test]
fn test_diagnostics_serialize_to_json() {
    let root = parse("[*]");
    let json = serde_json::to_value(root.errors()).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!([{
            "errorCode": "UnexpectedSymbol",
            "level": "error",
            "start": 1,
            "length": 1,
            "parameters": ["*"]
        }])
    );
}

#[test]
fn test_projections_on_many_threads() {
    let source = r#"{"items": [1, 2, 3], "name": "x", "broken": [ * }"#;
    let green = parse_symbols(tokenize(source), &ParseOptions::default());
    let expected = JsonRootSyntax::new(Arc::clone(&green)).terminals().len();

    let results: Vec<(usize, usize, usize)> = (0..16)
        .into_par_iter()
        .map(|_| {
            let root = JsonRootSyntax::new(Arc::clone(&green));
            let terminals = root.terminals();
            let last_end = terminals.last().map_or(0, |t| t.end());
            (terminals.len(), last_end, root.errors().len())
        })
        .collect();

    for (count, last_end, errors) in results {
        assert_eq!(count, expected);
        assert_eq!(last_end, source.len());
        assert_eq!(errors, green.errors().len());
    }
}

#[test]
fn test_green_root_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<verdant_core::GreenRoot>();
    assert_send_sync::<GreenSymbol>();
}
