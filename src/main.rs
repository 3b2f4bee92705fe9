// Thin command-line wrapper around the library.
// Run with RUST_LOG=debug for per-epoch timing.
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use neuralnet::train::threshold_matches;
use neuralnet::{train_loop, Evaluation, InMemorySet, Network, Result, Sgd, TrainConfig};

#[derive(Parser)]
#[command(name = "neuralnet", about = "Train and run small sigmoid networks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a 2-N-1 network on XOR.
    Xor {
        #[arg(long, default_value_t = 3)]
        hidden: usize,
        #[arg(long, default_value_t = 3000)]
        epochs: usize,
        #[arg(long, default_value_t = 4)]
        batch_size: usize,
        #[arg(long, default_value_t = 4.0)]
        rate: f64,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Where to save the trained parameters.
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the output of a saved network for one input.
    Predict {
        #[arg(long)]
        model: String,
        /// Comma-separated input values.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        input: Vec<f64>,
    },
    /// Describe a saved network.
    Inspect {
        #[arg(long)]
        model: String,
        /// Dump every parameter as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Xor { hidden, epochs, batch_size, rate, seed, out } => {
            let set = InMemorySet::new(
                vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
                vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]],
            )?;

            let mut rng = StdRng::seed_from_u64(seed);
            let mut network = Network::new(&[2, hidden, 1])?;
            network.randomize(&mut rng);

            let evaluate = threshold_matches(0.5);
            let evaluation = Evaluation { test_set: &set, evaluate: &evaluate };
            let config = TrainConfig::new(epochs, batch_size);
            train_loop(&mut network, &set, Some(&evaluation), &Sgd::new(rate), &config, &mut rng)?;

            for input in set.inputs() {
                info!("{:?} -> {:.4}", input, network.feed_forward(input)?[0]);
            }
            if let Some(path) = out {
                network.save(&path)?;
                info!("saved parameters to {}", path);
            }
        }
        Command::Predict { model, input } => {
            let network = Network::load(&model)?;
            let output = network.feed_forward(&input)?;
            println!("{:?}", output);
        }
        Command::Inspect { model, json } => {
            let network = Network::load(&model)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&network)?);
            } else {
                println!("layers:     {:?}", network.sizes());
                println!("parameters: {}", network.parameter_count());
            }
        }
    }
    Ok(())
}
