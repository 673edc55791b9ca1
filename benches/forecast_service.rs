//! Benchmarks for forecast requests.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sales_forecast::core::TimeSeries;
use sales_forecast::models::Algorithm;
use sales_forecast::utils::score_accuracy;
use sales_forecast::{ForecastRequest, ForecastService};

fn seasonal_year() -> TimeSeries {
    let values = (0..12)
        .map(|i| 150.0 + 2.0 * i as f64 + 40.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
        .collect();
    TimeSeries::monthly(values).unwrap()
}

fn bench_algorithms(c: &mut Criterion) {
    let series = seasonal_year();
    let mut group = c.benchmark_group("algorithm_forecast");

    for algorithm in Algorithm::choices() {
        group.bench_with_input(
            BenchmarkId::new(algorithm.name(), 6),
            &algorithm,
            |b, algorithm| b.iter(|| black_box(algorithm.forecast(black_box(&series), 6))),
        );
    }
    group.finish();
}

fn bench_service(c: &mut Criterion) {
    let service = ForecastService::new();
    let mut group = c.benchmark_group("service_run");

    for horizon in [1, 3, 6, 12, 24] {
        let request = ForecastRequest::new(seasonal_year()).with_horizon(horizon);
        group.bench_with_input(BenchmarkId::new("holt_winters", horizon), &request, |b, r| {
            b.iter(|| black_box(service.run(black_box(r))))
        });
    }
    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let actual: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
    let predicted: Vec<f64> = (0..12).map(|i| 98.0 + i as f64 * 1.1).collect();

    c.bench_function("score_accuracy", |b| {
        b.iter(|| black_box(score_accuracy(black_box(&actual), black_box(&predicted))))
    });
}

criterion_group!(benches, bench_algorithms, bench_service, bench_scoring);
criterion_main!(benches);
