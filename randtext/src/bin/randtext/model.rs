use clap::Parser;
use std::path::{Path, PathBuf};

use cjk_rand::{GeneratorConfig, RangeMode};

use anyhow::{Context, Result};

// Program options
#[derive(Parser, Debug, PartialEq)]
#[clap(version, about = "Print random CJK ideographs")]
pub struct Args {
    /// Number of characters per line
    #[clap(value_parser, default_value_t = 8)]
    pub len: usize,

    /// Number of lines to print
    #[clap(short = 'n', long, value_parser, default_value_t = 1)]
    pub count: usize,

    /// Seed the generator for reproducible output
    #[clap(short, long, value_parser)]
    pub seed: Option<u64>,

    /// Sample uniformly over the range instead of the legacy skewed formula
    #[clap(long, value_parser)]
    pub standard_range: bool,

    /// Read configuration from this file instead of the default location
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,

    /// Save the effective configuration to the config path
    #[clap(long, value_parser)]
    pub write_config: bool,

    /// Set fake home directory
    #[clap(short = 'H', long, value_parser)]
    pub home_dir: Option<PathBuf>,

    /// Increase verbosity
    #[clap(short, long, value_parser)]
    pub verbose: bool,
}

impl Args {
    /// Path of the configuration file: the explicit one if given, the default
    /// one under the home directory otherwise
    pub fn config_path(&self, home_dir: &Path) -> PathBuf {
        match &self.config {
            Some(path) => path.clone(),
            None => GeneratorConfig::default_path(home_dir),
        }
    }

    /// Load the configuration file (mandatory only when passed explicitly and
    /// not about to be written) and apply command line overrides on top of it
    pub fn resolve_config(&self, config_path: &Path) -> Result<GeneratorConfig> {
        let required = self.config.is_some() && !self.write_config;
        let mut config = if required || config_path.is_file() {
            GeneratorConfig::load(config_path).context("failed to load generator config")?
        } else {
            GeneratorConfig::default()
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.standard_range {
            config.range_mode = RangeMode::Standard;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use cjk_rand::{GeneratorConfig, RangeMode};
    use clap::Parser;
    use std::path::{Path, PathBuf};

    #[test]
    fn test() {
        parse();
        resolve();
    }

    fn parse() {
        let args = Args::try_parse_from(["randtext"]).unwrap();
        assert_eq!(args.len, 8);
        assert_eq!(args.count, 1);
        assert_eq!(args.seed, None);
        assert!(!args.standard_range && !args.verbose && !args.write_config);

        let args = Args::try_parse_from([
            "randtext", "16", "-n", "3", "-s", "42", "--standard-range", "-v", "-H", "/tmp/h",
        ])
        .unwrap();
        assert_eq!(args.len, 16);
        assert_eq!(args.count, 3);
        assert_eq!(args.seed, Some(42));
        assert!(args.standard_range && args.verbose);
        assert_eq!(args.home_dir, Some(PathBuf::from("/tmp/h")));

        assert!(Args::try_parse_from(["randtext", "-5"]).is_err());
        assert!(Args::try_parse_from(["randtext", "abc"]).is_err());
    }

    fn resolve() {
        let home = std::env::temp_dir().join(format!("randtext-test-home-{}", std::process::id()));
        if home.exists() {
            std::fs::remove_dir_all(&home).unwrap();
        }

        let result = std::panic::catch_unwind(|| {
            let args = Args::try_parse_from(["randtext", "-s", "7"]).unwrap();
            let default_path = args.config_path(&home);
            assert_eq!(default_path, GeneratorConfig::default_path(&home));

            // no config file anywhere: defaults plus overrides
            let config = args.resolve_config(&default_path).unwrap();
            assert_eq!(config.seed, Some(7));
            assert_eq!(config.range_mode, RangeMode::Inverted);

            // an existing default config file is picked up
            let stored = GeneratorConfig {
                range_mode: RangeMode::Standard,
                seed: Some(1),
                ..Default::default()
            };
            stored.save(&default_path).unwrap();
            let config = args.resolve_config(&default_path).unwrap();
            assert_eq!(config.range_mode, RangeMode::Standard);
            assert_eq!(config.seed, Some(7));

            // an explicit config file must exist
            let missing = home.join("missing.toml");
            let args = Args::try_parse_from([
                "randtext",
                "-c",
                missing.to_str().unwrap(),
            ])
            .unwrap();
            assert_eq!(args.config_path(Path::new("/unused")), missing);
            assert!(args.resolve_config(&missing).is_err());

            // ...unless it is about to be created
            let args = Args::try_parse_from([
                "randtext",
                "-c",
                missing.to_str().unwrap(),
                "--write-config",
                "--standard-range",
            ])
            .unwrap();
            let config = args.resolve_config(&missing).unwrap();
            assert_eq!(config.range_mode, RangeMode::Standard);
            config.save(&missing).unwrap();
            assert_eq!(GeneratorConfig::load(&missing).unwrap(), config);
        });

        if home.exists() {
            std::fs::remove_dir_all(&home).unwrap();
        }

        assert!(result.is_ok())
    }
}
