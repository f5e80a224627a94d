use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use tree_walk_labels::{labelled_walk, parse_values, ImplicitTree, TraversalOrder, ValueTree};

/// Ten full levels, 1023 nodes.
fn example_tree() -> ValueTree {
    ValueTree::from_values(&(1..=1023).collect::<Vec<_>>())
}

fn walks(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("walk");
    group.throughput(Throughput::Elements(1023));

    let tree = example_tree();
    for order in [
        TraversalOrder::Preorder,
        TraversalOrder::Inorder,
        TraversalOrder::Postorder,
    ] {
        group.bench_function(format!("{order:?}"), |bencher| {
            bencher.iter(|| {
                black_box(labelled_walk(black_box(&tree), order));
            });
        });
    }

    group.bench_function("implicit-preorder", |bencher| {
        let tree = ImplicitTree::new(1, 10);
        bencher.iter(|| {
            black_box(black_box(tree).labels());
        });
    });

    group.finish();
}

fn parsing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("parse");
    group.throughput(Throughput::Elements(1023));

    let input = (1..=1023)
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",");
    group.bench_function("values", |bencher| {
        bencher.iter(|| {
            black_box(parse_values(black_box(&input)).unwrap());
        });
    });

    group.finish();
}

/// Create flamegraphs with `cargo bench --bench bench -- --profile-time=5`
#[cfg(unix)]
fn profiled() -> Criterion {
    use pprof::criterion::{Output, PProfProfiler};
    Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}
#[cfg(not(unix))]
fn profiled() -> Criterion {
    Criterion::default()
}

criterion_group! {
    name = benches;
    config = profiled();
    targets = walks, parsing
}
criterion_main!(benches);
