//! Benchmarks for navigation tree building.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sitenav_tree::{NavNodeSpec, build};

/// Create a sidebar with specified depth and breadth.
fn create_sidebar(depth: usize, breadth: usize) -> Vec<NavNodeSpec> {
    fn create_level(
        prefix: &str,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
    ) -> Vec<NavNodeSpec> {
        (0..breadth)
            .map(|i| {
                let path = format!("{prefix}/section-{i}");
                if current_depth == max_depth {
                    NavNodeSpec::link(format!("Page {i}"), path)
                } else {
                    NavNodeSpec::group(
                        format!("Section {i}"),
                        create_level(&path, current_depth + 1, max_depth, breadth),
                    )
                }
            })
            .collect()
    }

    create_level("", 0, depth, breadth)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (depth, breadth) in [(1, 10), (3, 5), (5, 3)] {
        let sidebar = create_sidebar(depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("depth_breadth", format!("{depth}x{breadth}")),
            &sidebar,
            |b, sidebar| b.iter(|| build("Docs", sidebar.clone())),
        );
    }

    group.finish();
}

fn bench_links(c: &mut Criterion) {
    let nav = build("Docs", create_sidebar(5, 3)).unwrap();

    c.bench_function("links_preorder", |b| b.iter(|| nav.links().count()));
    c.bench_function("duplicate_links", |b| b.iter(|| nav.duplicate_links()));
}

criterion_group!(benches, bench_build, bench_links);
criterion_main!(benches);
