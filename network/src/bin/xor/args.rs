use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "XOR")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Passes over the truth table when training the perceptron.
    #[arg(long, default_value_t = 100)]
    pub epochs: usize,

    /// Randomly sampled examples presented to each network.
    #[arg(long, default_value_t = 100_000)]
    pub steps: usize,

    /// Independent networks trained side by side.
    #[arg(long, default_value_t = 4)]
    pub runs: u64,

    /// Step size for both models.
    #[arg(long, default_value_t = network::DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Base seed. Run `i` uses `seed + i`; omitted means entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}
