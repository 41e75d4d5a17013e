//! City temperature report.
//!
//! Run with: cargo run --example city_report -- temperature_data.csv [city]
//!
//! Set OPENWEATHER_API_KEY to compare the current temperature with the
//! seasonal baseline. RUST_LOG controls log output.

use chrono::Local;
use climate_anomaly::prelude::*;
use climate_anomaly::weather::{OpenWeatherClient, WeatherClientConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: city_report <csv> [city]");
        std::process::exit(2);
    };
    let only_city = args.next();

    let dataset = Dataset::from_path(&path)?;
    let mut config = AnalysisConfig::default();
    if let Some(city) = &only_city {
        config = config.with_cities([city.as_str()]);
    }
    let results = analyze_dataset(&dataset, &config)?;

    let today = Local::now().date_naive();
    let client = match std::env::var("OPENWEATHER_API_KEY") {
        Ok(key) => OpenWeatherClient::new(WeatherClientConfig::default())
            .ok()
            .map(|c| (c, key)),
        Err(_) => None,
    };

    for (city, outcome) in &results {
        println!("=== {} ===", city);
        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                println!("  analysis failed: {}\n", err);
                continue;
            }
        };

        let summary = result.summary();
        println!("  Min temperature:  {:.2}", summary.min_temperature);
        println!("  Max temperature:  {:.2}", summary.max_temperature);
        println!("  Mean temperature: {:.2}", summary.mean_temperature);
        match result.trend() {
            Ok(trend) => println!("  Trend slope:      {:.5} per day", trend.slope),
            Err(err) => println!("  Trend slope:      n/a ({})", err),
        }

        println!("\n  {:<8} {:>8} {:>8} {:>12} {:>12}", "season", "mean", "std", "roll_mean", "roll_std");
        for profile in result.season_profiles().values() {
            println!(
                "  {:<8} {:>8} {:>8} {:>12} {:>12}",
                profile.season,
                fmt_opt(profile.mean_temperature),
                fmt_opt(profile.std_temperature),
                fmt_opt(profile.mean_rolling_temperature),
                fmt_opt(profile.std_rolling_temperature),
            );
        }

        println!("\n  Anomalies: {}", result.anomalies().len());
        for record in result.anomalies().iter().take(10) {
            println!(
                "    {}  {:.2}",
                record.point.timestamp, record.point.temperature
            );
        }

        if let Some((client, key)) = &client {
            let reading = LiveReading::fetch(client, city, key);
            if let Some(error) = &reading.error {
                println!("\n  Live reading unavailable: {}", error);
            }
            let status = result.classify_live(reading.temperature, today);
            println!(
                "\n  Current ({}): {} -> {}",
                current_season(today),
                fmt_opt(reading.temperature),
                status
            );
        }
        println!();
    }

    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}
