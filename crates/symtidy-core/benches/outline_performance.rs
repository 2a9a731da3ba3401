//! Outline performance benchmarks
//!
//! - Wide documents: many classes with many members
//! - Deep documents: long chains of nested methods

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lsp_types::{DocumentSymbol, Range, SymbolKind};
use symtidy_core::{normalize_children, OutlineBuilder};

#[allow(deprecated)]
fn symbol(name: String, kind: SymbolKind, children: Vec<DocumentSymbol>) -> DocumentSymbol {
    DocumentSymbol {
        name,
        detail: None,
        kind,
        tags: None,
        deprecated: None,
        range: Range::default(),
        selection_range: Range::default(),
        children: Some(children),
    }
}

/// `classes` classes, each with getters, methods, private helpers and constants
fn wide_document(classes: usize) -> Vec<DocumentSymbol> {
    (0..classes)
        .map(|c| {
            let members = (0..20)
                .map(|m| {
                    let (name, kind) = match m % 5 {
                        0 => (format!("(get) value{}", m), SymbolKind::PROPERTY),
                        1 => (format!("_helper{}", m), SymbolKind::METHOD),
                        2 => (format!("LIMIT_{}", m), SymbolKind::CONSTANT),
                        _ => (format!("method{}", m), SymbolKind::METHOD),
                    };
                    let locals = vec![symbol(format!("local{}", m), SymbolKind::VARIABLE, vec![])];
                    symbol(name, kind, locals)
                })
                .collect();
            symbol(format!("Class{}", c), SymbolKind::CLASS, members)
        })
        .collect()
}

fn deep_document(depth: usize) -> DocumentSymbol {
    let mut tree = symbol("m0".to_string(), SymbolKind::METHOD, vec![]);
    for i in 1..depth {
        tree = symbol(format!("m{}", i), SymbolKind::METHOD, vec![tree]);
    }
    symbol("root".to_string(), SymbolKind::MODULE, vec![tree])
}

fn bench_wide_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_outline");

    for classes in [10, 100, 1000] {
        let document = wide_document(classes);
        group.bench_with_input(BenchmarkId::from_parameter(classes), &document, |b, doc| {
            let builder = OutlineBuilder::default();
            b.iter(|| builder.build(black_box(doc)))
        });
    }

    group.finish();
}

fn bench_deep_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_normalize");

    for depth in [100, 1000] {
        let document = deep_document(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &document, |b, doc| {
            b.iter(|| normalize_children(black_box(doc)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wide_outline, bench_deep_normalize);
criterion_main!(benches);
