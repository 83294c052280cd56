//! Performance benchmarks for deep-object

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use deep_object::test_utils::{person_tree, wide_tree};
use deep_object::{KeyPath, Node, TraversalConfig, filter, find, get, map, paths, set, values};
use serde_json::json;

fn bench_traversal_order(c: &mut Criterion) {
    let tree = wide_tree(5, 6);

    let mut group = c.benchmark_group("traversal_order");

    group.bench_function("values_shallow_first", |b| {
        b.iter(|| values(black_box(&tree), TraversalConfig::default()).unwrap().len())
    });

    group.bench_function("values_deep_first", |b| {
        b.iter(|| values(black_box(&tree), TraversalConfig::deep_first()).unwrap().len())
    });

    group.bench_function("paths_with_intermediate", |b| {
        let config = TraversalConfig::default().with_intermediate();
        b.iter(|| paths(black_box(&tree), config).unwrap().len())
    });

    group.finish();
}

fn bench_tree_building(c: &mut Criterion) {
    let tree = wide_tree(5, 6);

    let mut group = c.benchmark_group("tree_building");

    group.bench_function("map_identity", |b| {
        b.iter(|| map(black_box(&tree), TraversalConfig::default(), |visit| visit.value.clone()).unwrap())
    });

    group.bench_function("filter_half", |b| {
        b.iter(|| {
            filter(black_box(&tree), TraversalConfig::default(), |visit| {
                visit.key.ends_with(['0', '2', '4'])
            })
            .unwrap()
        })
    });

    group.bench_function("find_last_leaf", |b| {
        b.iter(|| find(black_box(&tree), TraversalConfig::deep_first(), |visit| visit.key == "k5").unwrap())
    });

    group.finish();
}

fn bench_key_paths(c: &mut Criterion) {
    let tree = person_tree();
    let deep = KeyPath::parse("address.country.continent.hemisphere");

    let mut group = c.benchmark_group("key_paths");

    group.bench_function("parse_dotted", |b| {
        b.iter(|| KeyPath::parse(black_box("job.compensation.salary.amount")))
    });

    group.bench_function("get_deep", |b| b.iter(|| get(black_box(&tree), deep.clone()).unwrap()));

    group.bench_function("set_fresh_branch", |b| {
        b.iter(|| {
            let mut target = Node::from(json!({}));
            set(&mut target, ["a", "b", "c", "d", "e"], Node::Leaf(json!(1))).unwrap();
            target
        })
    });

    group.finish();
}

criterion_group!(benches, bench_traversal_order, bench_tree_building, bench_key_paths);
criterion_main!(benches);
