mod model;
use model::Args;

use cjk_rand::{Generator, GeneratorConfig, RangeMode};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn print_summary(config: &GeneratorConfig, config_path: &std::path::Path) {
    let mode = match config.range_mode {
        RangeMode::Inverted => "inverted".yellow(),
        RangeMode::Standard => "standard".green(),
    };
    let seed = match config.seed {
        Some(seed) => seed.to_string().cyan(),
        None => "entropy".dimmed(),
    };
    eprintln!("{} {}", "config:".bold(), config_path.display());
    eprintln!(
        "{} [{:#x}, {:#x}]",
        "range: ".bold(),
        config.min_code_point,
        config.max_code_point
    );
    eprintln!("{} {mode}", "mode:  ".bold());
    eprintln!("{} {seed}", "seed:  ".bold());
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let home_dir = match &args.home_dir {
        Some(val) => val.clone(),
        None => dirs::home_dir().context("could not resolve home_dir path")?,
    };
    let config_path = args.config_path(&home_dir);
    let config = args.resolve_config(&config_path)?;

    if args.verbose {
        print_summary(&config, &config_path);
    }
    if args.write_config {
        config
            .save(&config_path)
            .context("failed to save generator config")?;
        tracing::info!(path = %config_path.display(), "saved generator config");
    }

    let mut generator = Generator::new(config).context("failed to build generator")?;
    for _ in 0..args.count {
        let line = generator
            .generate(args.len)
            .context("failed to generate random text")?;
        println!("{line}");
    }

    Ok(())
}
