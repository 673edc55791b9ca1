//! Quickstart demonstrating a full forecast request.
//!
//! Run with: cargo run --example quickstart
//! Set RUST_LOG=sales_forecast=debug to see the engine's log output.

use chrono::Month;
use sales_forecast::core::TimeSeries;
use sales_forecast::models::Algorithm;
use sales_forecast::validation::coverage;
use sales_forecast::{ForecastRequest, ForecastService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_forecast=info".into()),
        )
        .init();

    println!("=== sales-forecast Quickstart ===\n");

    // 1. A year of unit sales with a summer peak
    let sales = vec![
        120.0, 135.0, 150.0, 160.0, 175.0, 210.0, 260.0, 240.0, 190.0, 165.0, 150.0, 170.0,
    ];
    let series = TimeSeries::monthly(sales).unwrap();
    println!("History: {} months, mean {:.1}", series.len(), series.mean());

    // 2. Run every algorithm over the next six months
    let service = ForecastService::new();
    for algorithm in Algorithm::choices() {
        println!("\n--- {} ---", algorithm);
        println!("{}", algorithm.description());

        let request = ForecastRequest::new(series.clone()).with_algorithm(algorithm);
        let result = match service.run(&request) {
            Ok(result) => result,
            Err(err) => {
                println!("  failed: {}", err);
                continue;
            }
        };

        for (month, value) in result.periods() {
            println!("  {:<10} {:>8.1}", month.name(), value);
        }
        println!("{}", result.accuracy_label());
        println!("{}", result.trend_label());
        println!("{}", result.recommendation_text());
    }

    // 3. A history with gaps is rejected before forecasting
    println!("\n--- Incomplete history ---");
    let partial = TimeSeries::from_monthly_totals([
        (Month::January, 40.0),
        (Month::February, 42.0),
        (Month::March, 45.0),
        (Month::April, 47.0),
    ])
    .unwrap();
    println!("Missing months: {:?}", coverage(&partial).missing);

    match service.run(&ForecastRequest::new(partial)) {
        Ok(_) => println!("unexpected forecast"),
        Err(err) => println!(
            "Rejected: {} ({} of 12 months present)",
            err,
            err.months_present().unwrap_or(0)
        ),
    }

    println!("\n=== Quickstart complete ===");
}
