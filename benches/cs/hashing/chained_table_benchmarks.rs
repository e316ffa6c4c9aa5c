use chaintable::ChainedTable;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_keys(n: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..n).map(|_| rng.gen_range(0..i32::MAX)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_table_insert");
    for size in [100, 1_000, 10_000] {
        let keys = random_keys(size);
        group.bench_with_input(BenchmarkId::new("random_keys", size), &keys, |b, keys| {
            b.iter(|| {
                let mut table = ChainedTable::new().unwrap();
                for &k in keys {
                    table.insert(k, k).unwrap();
                }
                black_box(table.capacity())
            })
        });
        group.bench_with_input(BenchmarkId::new("sequential_keys", size), &size, |b, &size| {
            b.iter(|| {
                let mut table = ChainedTable::new().unwrap();
                for k in 0..size as i32 {
                    table.insert(k, k * 2).unwrap();
                }
                black_box(table.capacity())
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_table_lookup");
    for size in [100, 1_000, 10_000] {
        let keys = random_keys(size);
        let mut table = ChainedTable::new().unwrap();
        for &k in &keys {
            table.insert(k, k).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("hit", size), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0i64;
                for &k in keys {
                    sum += i64::from(table.get(black_box(k)).unwrap_or(0));
                }
                black_box(sum)
            })
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, &size| {
            b.iter(|| {
                let mut misses = 0;
                for k in 0..size as i32 {
                    if table.get(black_box(-1 - k)).is_none() {
                        misses += 1;
                    }
                }
                black_box(misses)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);
