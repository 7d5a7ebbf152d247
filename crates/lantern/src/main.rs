// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lantern - fixture feature detection and export.
//!
//! Glue only: reads fixture files, builds the plugin set, and hands off to
//! the engine and export dispatch.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod export;
mod features;
mod library;
mod plugins;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lantern_config::LanternConfig;
use lantern_core::LanternError;

/// Lantern - fixture feature detection and export.
#[derive(Parser, Debug)]
#[command(name = "lantern", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the standard lookup.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate feature plugins against fixture files.
    Features {
        /// Fixture JSON files or directories.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print the matrix and coverage as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// Export fixture files to a control-software format.
    Export {
        /// Export target key (e.g. "qlcplus").
        key: String,
        /// Fixture JSON files or directories.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output directory, overriding `export.output_dir`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List loaded feature and export plugins.
    Plugins {
        /// Case-insensitive filter on name or description.
        query: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lantern={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> LanternConfig {
    let loaded = match path {
        Some(path) => lantern_config::load_and_validate_path(path),
        None => lantern_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            lantern_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli, config: LanternConfig) -> Result<(), LanternError> {
    match cli.command {
        Commands::Features { files, json, plain } => {
            features::run_features(&config, &files, json, plain).await
        }
        Commands::Export { key, files, out } => export::run_export(&config, &key, &files, out),
        Commands::Plugins { query, json } => plugins::run_plugins(&config, query.as_deref(), json),
        Commands::Config => {
            let rendered = lantern_config::to_toml(&config)?;
            print!("{rendered}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    init_tracing(&config.logging.level);

    if let Err(e) = run(cli, config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_parses_export_with_global_config() {
        let cli = Cli::try_parse_from([
            "lantern",
            "export",
            "qlcplus",
            "a.json",
            "b.json",
            "--out",
            "dist",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Export { key, files, out } => {
                assert_eq!(key, "qlcplus");
                assert_eq!(files.len(), 2);
                assert_eq!(out, Some(PathBuf::from("dist")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn features_requires_files() {
        assert!(Cli::try_parse_from(["lantern", "features"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
