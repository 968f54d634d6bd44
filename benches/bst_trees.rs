use balanced_trees::avl_tree::AvlTree;
use balanced_trees::red_black_tree::RedBlackTree;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 10_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let keys: Vec<u32> = (0..NUM_OF_OPERATIONS).map(|_| rng.gen()).collect();

    c.bench_function("avl_tree_insert", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in &keys {
                tree.insert(*key);
            }
            black_box(tree.len())
        })
    });

    c.bench_function("red_black_tree_insert", |b| {
        b.iter(|| {
            let mut tree = RedBlackTree::new();
            for key in &keys {
                tree.insert(*key);
            }
            black_box(tree.len())
        })
    });

    c.bench_function("btreemap_insert", |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for key in &keys {
                map.insert(*key, ());
            }
            black_box(map.len())
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
