//! Benchmarks for navigation tree resolution.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dbex_nav::{NavNode, NavTree};

/// Create a forest with specified depth and breadth per top-level group.
fn create_forest(groups: usize, depth: usize, breadth: usize) -> Vec<NavNode> {
    fn create_level(prefix: &str, current_depth: usize, max_depth: usize, breadth: usize) -> Vec<NavNode> {
        (0..breadth)
            .map(|i| {
                let href = format!("{prefix}/page-{i}");
                if current_depth >= max_depth {
                    NavNode::link(format!("Page {i}"), href)
                } else {
                    let children = create_level(&href, current_depth + 1, max_depth, breadth);
                    NavNode::group(format!("Group {i}"), children).with_href(href)
                }
            })
            .collect()
    }

    (0..groups)
        .map(|g| {
            NavNode::group(
                format!("Section {g}"),
                create_level(&format!("/section-{g}"), 1, depth, breadth),
            )
        })
        .collect()
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for (depth, breadth) in [(2, 10), (3, 6), (4, 4)] {
        let forest = create_forest(3, depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("depth_breadth", format!("{depth}x{breadth}")),
            &forest,
            |b, forest| b.iter(|| NavTree::flatten(forest)),
        );
    }

    group.finish();
}

fn bench_page_links(c: &mut Criterion) {
    let tree = NavTree::flatten(&create_forest(3, 4, 4));

    let mut group = c.benchmark_group("page_links");

    group.bench_function("hit", |b| {
        b.iter(|| tree.page_links("/section-1/page-2/page-3/page-1"));
    });

    group.bench_function("miss", |b| {
        b.iter(|| tree.page_links("/nonexistent"));
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_page_links);
criterion_main!(benches);
