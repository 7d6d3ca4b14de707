//! End-to-end search benchmark: selector, matching, sorting and truncation.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{RngExt as _, SeedableRng};

use fzr::prelude::*;

fn gen_items(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let len = rng.random_range(8..64);
            (0..len)
                .map(|_| match rng.random_range(0..10) {
                    0 => '/',
                    1 => ' ',
                    2 => char::from(rng.random_range(b'A'..=b'Z')),
                    _ => char::from(rng.random_range(b'a'..=b'z')),
                })
                .collect()
        })
        .collect()
}

fn bench_find(c: &mut Criterion) {
    let items = gen_items(50_000);

    c.bench_function("find_v2", |b| {
        let finder = Finder::new(items.clone());
        b.iter(|| finder.find("abc").len());
    });

    c.bench_function("find_v2_tiebreak_no_limit", |b| {
        let options = FinderOptionsBuilder::default()
            .limit(None)
            .tiebreak(vec![RankCriteria::Length, RankCriteria::Begin])
            .build()
            .unwrap();
        let finder = Finder::with_options(items.clone(), options);
        b.iter(|| finder.find("abc").len());
    });

    c.bench_function("find_exact", |b| {
        let options = FinderOptionsBuilder::default()
            .algorithm(Algorithm::Exact)
            .build()
            .unwrap();
        let finder = Finder::with_options(items.clone(), options);
        b.iter(|| finder.find("ab").len());
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_find
);
criterion_main!(benches);
