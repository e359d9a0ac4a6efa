// ABOUTME: Criterion benchmarks for menu ranking and protein estimation
// ABOUTME: Measures filter/sort cost across menu sizes and the estimator chain per item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! Criterion benchmarks for menu ranking and protein estimation.
//!
//! Menus are synthetic but mix sauces, desserts, meat, and vegetarian items
//! so every filter branch is exercised.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use smartbytes_core::models::{FoodItem, KnownMacros, MenuFilters, NutritionFacts, SortOption};
use smartbytes_intelligence::{
    estimate_by_food_category, rank, EstimationQuery, ProteinEstimator, RankContext,
};
use tokio::runtime::Runtime;

const ITEM_NAMES: [&str; 8] = [
    "Grilled Chicken Sandwich",
    "Garden Salad",
    "Chocolate Shake",
    "Steak Burrito",
    "Ranch Sauce",
    "Black Bean Burger",
    "Apple Pie",
    "Salmon Bowl",
];

#[allow(clippy::cast_precision_loss)]
fn generate_menu(count: usize) -> Vec<FoodItem> {
    (0..count)
        .map(|index| FoodItem {
            name: format!("{} #{index}", ITEM_NAMES[index % ITEM_NAMES.len()]),
            brand_name: "Benchmark Grill".to_owned(),
            serving_size: 1.0,
            serving_unit: "serving".to_owned(),
            nutrition: NutritionFacts {
                calories: 150.0 + ((index * 137) % 900) as f64,
                total_fat: ((index * 7) % 45) as f64,
                total_carbs: ((index * 11) % 90) as f64,
                protein: ((index * 13) % 60) as f64,
                ..NutritionFacts::default()
            },
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_rank");
    let filters = MenuFilters::default();

    for count in [25_usize, 100, 500] {
        let menu = generate_menu(count);
        group.throughput(Throughput::Elements(count as u64));

        for sort in [SortOption::CaloriesAsc, SortOption::ProteinRatioDesc] {
            let context = RankContext::new("McDonald's");
            group.bench_with_input(
                BenchmarkId::new(sort.as_str(), count),
                &menu,
                |b, menu| b.iter(|| rank(black_box(menu), sort, &filters, &context)),
            );
        }

        let filtered = MenuFilters {
            max_calories: Some(700.0),
            min_protein: Some(10.0),
            vegetarian: true,
        };
        let context = RankContext::new("McDonald's").suppress_desserts(true);
        group.bench_with_input(
            BenchmarkId::new("all_filters", count),
            &menu,
            |b, menu| b.iter(|| rank(black_box(menu), SortOption::ProteinDesc, &filtered, &context)),
        );
    }

    group.finish();
}

fn bench_category_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_estimate");

    group.bench_function("recognised", |b| {
        b.iter(|| estimate_by_food_category(black_box("Grilled Chicken Sandwich"), None));
    });
    group.bench_function("with_description", |b| {
        b.iter(|| {
            estimate_by_food_category(
                black_box("House Special"),
                Some(black_box("slow-cooked beef with rice and beans")),
            )
        });
    });
    group.bench_function("unrecognised", |b| {
        b.iter(|| estimate_by_food_category(black_box("Mystery Plate"), None));
    });

    group.finish();
}

fn bench_estimator_chain(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let estimator = ProteinEstimator::new(None);
    let mut group = c.benchmark_group("protein_estimator");

    let with_macros = EstimationQuery::new("Power Bowl").with_macros(KnownMacros {
        calories: Some(500.0),
        total_fat: Some(20.0),
        total_carbs: Some(40.0),
    });
    group.bench_function("macro_differential", |b| {
        b.iter(|| rt.block_on(estimator.estimate(black_box(&with_macros))));
    });

    // no usable macros: falls through to the category step
    let name_only = EstimationQuery::new("Side Salad");
    group.bench_function("category_fallback", |b| {
        b.iter(|| rt.block_on(estimator.estimate(black_box(&name_only))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rank,
    bench_category_estimate,
    bench_estimator_chain
);
criterion_main!(benches);
