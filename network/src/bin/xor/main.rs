mod args;

use args::Args;
use clap::Parser;
use log::LevelFilter;
use network::gates::{self, TruthTable, AND, XOR};
use network::{FeedforwardNetwork, Perceptron, Topology};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use simplelog::{Config, SimpleLogger};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    for (name, table) in [("AND", AND), ("XOR", XOR)] {
        let accuracy = train_perceptron(&args, table)?;
        log::info!("Perceptron on {}: accuracy {:.2}", name, accuracy);
    }

    log::info!(
        "Training {} networks on XOR for {} steps each",
        args.runs,
        args.steps
    );

    // Networks share nothing, so each run trains on its own thread
    let results = (0..args.runs)
        .into_par_iter()
        .map(|run| train_network(&args, run).map(|outputs| (run, outputs)))
        .collect::<network::Result<Vec<_>>>()?;

    for (run, outputs) in results {
        let max_error = outputs
            .iter()
            .zip(XOR)
            .map(|(out, target)| (out - f64::from(u8::from(target))).abs())
            .fold(0.0, f64::max);

        log::info!(
            "Network {}: [0,0]={:.4} [0,1]={:.4} [1,0]={:.4} [1,1]={:.4} (max error {:.4})",
            run,
            outputs[0],
            outputs[1],
            outputs[2],
            outputs[3],
            max_error
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

fn rng_for(args: &Args, run: u64) -> StdRng {
    match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run)),
        None => StdRng::from_entropy(),
    }
}

fn train_perceptron(args: &Args, table: TruthTable) -> network::Result<f64> {
    let examples = gates::labeled(table);
    let mut perceptron = Perceptron::with_rng(2, args.learning_rate, &mut rng_for(args, 0))?;

    perceptron.train(&examples, args.epochs)?;
    log::debug!("Perceptron weights: {:?}", perceptron.weights());

    perceptron.accuracy(&examples)
}

fn train_network(args: &Args, run: u64) -> network::Result<Vec<f64>> {
    let examples = gates::regression(XOR);
    let mut rng = rng_for(args, run);
    let topology = Topology::new(2, 4, 1)?;
    let mut net = FeedforwardNetwork::with_rng(topology, args.learning_rate, &mut rng)?;

    for _ in 0..args.steps {
        let example = &examples[rng.gen_range(0..examples.len())];
        net.train(&example.inputs, &example.targets)?;
    }

    examples
        .iter()
        .map(|example| net.predict(&example.inputs).map(|out| out[0]))
        .collect()
}
