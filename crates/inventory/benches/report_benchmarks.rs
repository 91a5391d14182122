use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stocktally_inventory::{Product, summarize, total_inventory_value};

const CATEGORIES: [&str; 4] = ["Electronics", "Tools", "Garden", "Office"];

fn synthetic_products(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| Product {
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            in_stock: i % 3 != 0,
            price: (i % 500) as f64 + 0.99,
            stock: (i % 50) as i64,
        })
        .collect()
}

fn bench_total_inventory_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_inventory_value");

    for size in [100usize, 1_000, 10_000] {
        let products = synthetic_products(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| total_inventory_value(black_box(products)))
        });
    }

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for size in [100usize, 1_000, 10_000] {
        let products = synthetic_products(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| summarize(black_box(products)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_total_inventory_value, bench_summarize);
criterion_main!(benches);
