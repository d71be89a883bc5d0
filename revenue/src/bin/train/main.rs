mod args;
mod progress;

use args::Args;
use chrono::NaiveDate;
use clap::Parser;
use log::LevelFilter;
use progress::EpochProgressBar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use revenue::{generate_year, RevenueRegressor, SalesProfile, TrainingConfig};
use simplelog::{Config, SimpleLogger};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let profile = if args.noise_free {
        SalesProfile::noise_free()
    } else {
        SalesProfile::default()
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!("Generating sales for {}", args.year);
    let records = generate_year(args.year, &profile, &mut rng)?;

    let config = TrainingConfig {
        hidden_width: args.hidden,
        learning_rate: args.learning_rate,
        epochs: args.epochs,
        seed: args.seed,
        log_interval: args.log_interval,
    };

    let progress = EpochProgressBar::new(config.epochs)?;
    let fitted =
        RevenueRegressor::new(&config)?.fit_with_progress(&records, |_| progress.update())?;
    progress.finish();

    let evaluation = fitted.evaluate(&records)?;
    log::info!("Mean absolute error {:.2}", evaluation.mean_absolute_error);
    if let (Some(mean), Some(max)) = (
        evaluation.mean_percentage_error,
        evaluation.max_percentage_error,
    ) {
        log::info!("Mean error {:.2}%, worst error {:.2}%", mean * 100.0, max * 100.0);
    }

    for record in records.iter().step_by(30) {
        let predicted = fitted.predict(&record.day)?;
        let date = NaiveDate::from_yo_opt(args.year, u32::from(record.day.day_of_year));
        log::info!(
            "{}: predicted {:.2}, actual {:.2}",
            date.map_or_else(|| record.day.day_of_year.to_string(), |d| d.to_string()),
            predicted,
            record.revenue
        );
    }

    log::info!("Done!");
    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::init(level, Config::default())?;

    Ok(args)
}
