use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use brewlog::{
    core::store::BrewStore,
    record::{BrewDraft, BrewRecord},
};

fn record(name: &str) -> BrewRecord {
    let mut draft = BrewDraft::new();
    draft.coffee_name = name.to_string();
    draft.dose = "18.0".to_string();
    draft.water_amount = "300".to_string();
    draft.validate().expect("valid draft")
}

fn bench_adds(c: &mut Criterion) {
    let records: Vec<BrewRecord> = (0..10_000u32)
        .map(|i| record(&format!("Roast {}", i % 50)))
        .collect();

    c.bench_function("store_add_10k", |b| {
        b.iter(|| {
            let mut store = BrewStore::new();
            for rec in &records {
                store.add(rec.clone());
            }
        });
    });
}

fn bench_updates(c: &mut Criterion) {
    let records: Vec<BrewRecord> = (0..5_000u32)
        .map(|i| record(&format!("Roast {}", i % 50)))
        .collect();

    c.bench_function("store_update_5k", |b| {
        let mut store = BrewStore::new();
        for rec in &records {
            store.add(rec.clone());
        }
        b.iter(|| {
            for rec in &records {
                let mut bumped = rec.clone();
                bumped.dose += 1.0;
                store.update(bumped).expect("update");
            }
        });
    });
}

fn bench_name_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("coffee_names");
    for n in [100usize, 1_000usize, 10_000usize] {
        let mut store = BrewStore::new();
        for i in 0..n {
            store.add(record(&format!("Roast {}", i % 50)));
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let _ = store.coffee_names();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_adds, bench_updates, bench_name_queries);
criterion_main!(benches);
