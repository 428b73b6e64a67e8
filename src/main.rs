use std::path::PathBuf;

use clap::Parser;
use config::Config;
use serde::Deserialize;
use sixtv::{run, RunPaths};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Channel list to read (overrides config)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Destination for the filtered list (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, default_value = "sixtv.toml")]
    config: String,
}

#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default = "default_input")]
    input: PathBuf,
    #[serde(default = "default_output")]
    output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from("output/result.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("output/ipv6_channels.txt")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // The settings file is optional; without it the built-in paths apply.
    let settings = Config::builder()
        .add_source(config::File::with_name(&args.config).required(false))
        .build()?;
    let settings: Settings = settings.try_deserialize()?;

    let paths = RunPaths {
        input: args.input.unwrap_or(settings.input),
        output: args.output.unwrap_or(settings.output),
    };

    run(&paths)?;
    Ok(())
}
