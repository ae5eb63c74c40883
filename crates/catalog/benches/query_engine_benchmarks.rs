use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_catalog::{
    Availability, FilterState, PriceRange, Product, QueryConfig, Route, SortOption,
    compute_suggestions, compute_visible_products,
};
use storefront_core::ProductId;

const CATEGORIES: [&str; 5] = [
    "Back & Posture",
    "Knee Support",
    "Neck Support",
    "Hand & Wrist",
    "Orthopedic & Mobility",
];

/// Deterministic synthetic catalog (no RNG so runs are comparable).
fn synthetic_catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let mut p = Product::new(ProductId::new(i as u64), format!("Support Belt {i}"), category);
            p.sku = format!("FX-{i:05}");
            p.description = "Breathable elastic support with adjustable straps".to_string();
            p.price = ((i * 37) % 2_000) as f64 + 99.0;
            p.rating = ((i * 7) % 50) as f64 / 10.0;
            p.sizes = ["S", "M", "L"][..(i % 3) + 1]
                .iter()
                .map(|s| s.to_string())
                .collect();
            p.certifications = if i % 2 == 0 {
                vec!["CE".to_string()]
            } else {
                vec!["CE".to_string(), "ISO".to_string()]
            };
            p.in_stock = i % 4 != 0;
            p.bulk_available = i % 3 == 0;
            p
        })
        .collect()
}

fn bench_visible_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_products");
    let config = QueryConfig::default();
    let route = Route::parse("#/category/knee-support");

    let mut filters = FilterState::default();
    filters.set_price_range(PriceRange::new(200.0, 1_500.0));
    filters.toggle_size("M");
    filters.toggle_certification("CE");
    filters.set_availability(Availability::InStock);

    for size in [100usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("neutral_featured", size), &catalog, |b, catalog| {
            b.iter(|| {
                compute_visible_products(
                    black_box(catalog),
                    &FilterState::default(),
                    "",
                    SortOption::Featured,
                    &Route::Home,
                    &config,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("all_facets_price_asc", size), &catalog, |b, catalog| {
            b.iter(|| {
                compute_visible_products(
                    black_box(catalog),
                    &filters,
                    "belt",
                    SortOption::PriceAsc,
                    &route,
                    &config,
                )
            })
        });
    }

    group.finish();
}

fn bench_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggestions");
    let config = QueryConfig::default();

    for size in [100usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::new("prefix_query", size), &catalog, |b, catalog| {
            b.iter(|| compute_suggestions(black_box(catalog), black_box("support"), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visible_products, bench_suggestions);
criterion_main!(benches);
