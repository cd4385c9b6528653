use anyhow::Context;
use clap::Parser;
use roulette_simulator::{Config, Simulator};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Table configuration (YAML)
    #[arg(short, long)]
    config: PathBuf,

    /// Override the configured number of rounds
    #[arg(short, long)]
    rounds: Option<u64>,

    /// Override the configured seed (hex)
    #[arg(short, long)]
    seed: Option<String>,

    /// Emit JSON logs and a JSON report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Load config
    let config_file = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read {}", args.config.display()))?;
    let mut config: Config =
        serde_yaml::from_str(&config_file).context("failed to parse config file")?;
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let config = config.validate().context("invalid config")?;

    // Create logger
    let logger = tracing_subscriber::fmt().with_max_level(config.log_level);
    if args.json {
        logger.json().init();
    } else {
        logger.init();
    }
    info!(
        rounds = config.rounds,
        players = config.players.len(),
        seeded = config.seed.is_some(),
        "starting simulation"
    );

    // Play
    let mut simulator = Simulator::new(config).context("failed to seat players")?;
    let report = simulator.run();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        );
    } else {
        print!("{report}");
    }

    Ok(())
}
