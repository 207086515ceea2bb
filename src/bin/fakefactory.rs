use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use proptest_fakefactory::registry::builtin_methods;
use proptest_fakefactory::{FakeFactory, FakeFactoryConfig, Locale};

#[derive(Debug, Parser)]
#[command(name = "fakefactory")]
#[command(about = "Inspect and sample fake data strategies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List supported locale identifiers.
    Locales,
    /// List built-in generator methods.
    Methods,
    /// Draw values from a method.
    Sample {
        /// Generator method name. Required unless --config is given.
        #[arg(conflicts_with = "config")]
        method: Option<String>,
        /// Single locale.
        #[arg(long, conflicts_with_all = ["locales", "config"])]
        locale: Option<String>,
        /// Comma-separated locales; each draw picks one.
        #[arg(long, value_delimiter = ',', conflicts_with = "config")]
        locales: Option<Vec<String>>,
        /// JSON request file: {"method": ..., "locale": ..., "locales": [...]}.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of values.
        #[arg(long, short = 'n', default_value_t = 5)]
        count: u64,
        /// Base seed; draw i uses seed + i.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Emit a JSON array.
        #[arg(long)]
        json: bool,
    },
}

fn load_config(
    method: Option<String>,
    locale: Option<String>,
    locales: Option<Vec<String>>,
    config: Option<PathBuf>,
) -> Result<FakeFactoryConfig> {
    if let Some(path) = config {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return FakeFactoryConfig::from_json(&raw)
            .with_context(|| format!("failed to parse {}", path.display()));
    }

    let method = method.context("a method name or --config is required")?;
    Ok(FakeFactoryConfig {
        method,
        locale,
        locales,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Locales => {
            for locale in Locale::ALL {
                println!("{locale}");
            }
        }
        Command::Methods => {
            for method in builtin_methods() {
                println!("{method}");
            }
        }
        Command::Sample {
            method,
            locale,
            locales,
            config,
            count,
            seed,
            json,
        } => {
            let config = load_config(method, locale, locales, config)?;
            let factory = FakeFactory::from_config(&config, Vec::new())
                .with_context(|| format!("invalid request for method {:?}", config.method))?;
            tracing::info!(factory = %factory, count, seed, "sampling");

            let values: Vec<String> = (0..count)
                .map(|i| factory.sample(seed.wrapping_add(i)))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&values)?);
            } else {
                for value in values {
                    println!("{value}");
                }
            }
        }
    }
    Ok(())
}
