use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "Revenue Trainer")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Calendar year to generate sales for.
    #[arg(long, default_value_t = 2023)]
    pub year: i32,

    /// Full passes over the year.
    #[arg(long, default_value_t = 1000)]
    pub epochs: usize,

    /// Units in the hidden layer.
    #[arg(long, default_value_t = 10)]
    pub hidden: usize,

    #[arg(long, default_value_t = network::DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Seed for both the sales data and the initial weights.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use a constant base revenue instead of a random draw per day.
    #[arg(long)]
    pub noise_free: bool,

    /// Epochs between loss reports at debug level.
    #[arg(long, default_value_t = 100)]
    pub log_interval: usize,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}
