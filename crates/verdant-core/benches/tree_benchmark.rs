//! Benchmarks for tokenizing, parsing and navigating syntax trees

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use verdant_core::{JsonRootSyntax, JsonSyntaxNode, ParseOptions, parse, parse_symbols, tokenize};

/// A settings-like document of roughly 50 KB with comments and nesting
fn sample_document() -> String {
    let mut source = String::from("// generated\n{\n");
    for i in 0..500 {
        source.push_str(&format!(
            "  \"entry{i}\": {{ \"id\": {i}, \"enabled\": true, /* note */ \"tags\": [\"a\", \"b\", {i}] }},\n"
        ));
    }
    source.push_str("  \"last\": false\n}\n");
    source
}

fn bench_tokenize(c: &mut Criterion) {
    let source = sample_document();

    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(&source)));
    });
}

fn bench_parse(c: &mut Criterion) {
    let source = sample_document();

    c.bench_function("parse", |b| {
        b.iter(|| parse_symbols(tokenize(black_box(&source)), &ParseOptions::default()));
    });
}

fn bench_terminals(c: &mut Criterion) {
    let source = sample_document();
    let green = parse_symbols(tokenize(&source), &ParseOptions::default());

    c.bench_function("red_terminals", |b| {
        b.iter(|| {
            let root = JsonRootSyntax::new(Arc::clone(&green));
            black_box(root.terminals().len())
        });
    });
}

fn bench_find_syntax_at(c: &mut Criterion) {
    let source = sample_document();
    let root = parse(&source);
    let offsets: Vec<usize> = (0..source.len()).step_by(97).collect();

    c.bench_function("find_syntax_at", |b| {
        b.iter(|| {
            for &offset in &offsets {
                if let Some(node) = root.find_syntax_at(black_box(offset)) {
                    black_box(node.start());
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_parse,
    bench_terminals,
    bench_find_syntax_at
);
criterion_main!(benches);
