use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use probetable::{DuplicatePolicy, ProbeTable, TableConfig};

const CAPACITY: usize = 1024;

fn byte_sum(key: &str) -> usize {
    key.bytes().fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
}

fn generate_keys(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("{:03}-{:03}-{:04}", i % 1000, (i * 7) % 1000, i)).collect()
}

fn filled_table(keys: &[String], policy: DuplicatePolicy) -> ProbeTable<String, fn(&str) -> usize> {
    let config = TableConfig::default()
        .with_capacity(CAPACITY)
        .with_duplicate_policy(policy);
    let mut table = ProbeTable::with_config(config, byte_sum as fn(&str) -> usize);
    for key in keys {
        table.insert(key.clone()).unwrap();
    }
    table
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &load in &[0.25, 0.5, 0.9, 1.0] {
        let keys = generate_keys((CAPACITY as f64 * load) as usize);

        for policy in [DuplicatePolicy::HomeSlot, DuplicatePolicy::ProbeChain] {
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), load),
                &keys,
                |b, keys| {
                    b.iter(|| black_box(filled_table(keys, policy)));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &load in &[0.25, 0.5, 0.9, 1.0] {
        let keys = generate_keys((CAPACITY as f64 * load) as usize);
        let table = filled_table(&keys, DuplicatePolicy::ProbeChain);

        group.bench_with_input(BenchmarkId::new("hit", load), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(table.search(black_box(key)).ok());
                }
            });
        });

        group.bench_function(BenchmarkId::new("miss", load), |b| {
            b.iter(|| black_box(table.search(black_box("999-999-9999")).ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_search);
criterion_main!(benches);
