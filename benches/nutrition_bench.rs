// ABOUTME: Criterion benchmarks for the recommendation engine and payload handling
// ABOUTME: Measures the pure calculation path and the JSON-to-result path used by the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for nutrition calculations.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dietdelish::config::nutrition::NutritionConfig;
use dietdelish::intelligence::{
    calculate_bmi, recommend, ActivityLevel, GoalType, RecommendationRequest, Sex,
    UserBiometricProfile,
};
use dietdelish::models::nutrition::RecommendationPayload;
use serde_json::json;

const GOALS: [GoalType; 4] = [
    GoalType::WeightLoss,
    GoalType::WeightGain,
    GoalType::MuscleGain,
    GoalType::General,
];

#[allow(clippy::cast_precision_loss)]
fn generate_requests(count: usize) -> Vec<RecommendationRequest> {
    (0..count)
        .filter_map(|index| {
            let profile = UserBiometricProfile::new(
                45.0 + (index % 70) as f64,
                150.0 + (index % 45) as f64,
                18 + (index % 60) as u32,
                if index % 2 == 0 { Sex::Male } else { Sex::Other },
                ActivityLevel::ALL[index % ActivityLevel::ALL.len()],
            )
            .ok()?;

            Some(RecommendationRequest {
                profile,
                goal_type: GOALS[index % GOALS.len()],
                diet_type: None,
            })
        })
        .collect()
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let config = NutritionConfig::default();

    for count in [1_usize, 100, 1_000] {
        let requests = generate_requests(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &requests, |b, requests| {
            b.iter(|| {
                for request in requests {
                    black_box(recommend(black_box(request), &config).ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_payload_to_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_to_result");
    let config = NutritionConfig::default();
    let body = serde_json::to_vec(&json!({
        "profile": {
            "weight": "70", "height": "175", "age": "28",
            "gender": "male", "activity_level": "moderate"
        },
        "plan_type": "weight_loss",
        "diet_type": "non-veg"
    }))
    .unwrap_or_default();

    group.bench_function("parse_validate_recommend", |b| {
        b.iter(|| {
            let result = serde_json::from_slice::<RecommendationPayload>(black_box(&body))
                .ok()
                .and_then(|payload| payload.into_request().ok())
                .and_then(|request| recommend(&request, &config).ok());
            black_box(result)
        });
    });

    group.finish();
}

fn bench_bmi(c: &mut Criterion) {
    c.bench_function("calculate_bmi", |b| {
        b.iter(|| black_box(calculate_bmi(black_box(70.0), black_box(175.0)).ok()));
    });
}

criterion_group!(benches, bench_recommend, bench_payload_to_result, bench_bmi);
criterion_main!(benches);
