//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use webfonts_fetch_core::{
    Config, HttpFetcher, SelectionCriteria,
    config::{DEFAULT_ENDPOINT, DEFAULT_OUTPUT_DIR, MATCH_ANY},
    list, run,
};

#[derive(Parser)]
#[command(name = "webfonts-fetch")]
#[command(about = "Download font files from a web-fonts directory by pattern")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Regular expressions searched anywhere in each catalogue field.
#[derive(Debug, Clone, clap::Args)]
pub struct CriteriaArgs {
    /// e.g. 'Saira Semi .*'
    #[arg(long, default_value = MATCH_ANY)]
    pub family: String,
    /// e.g. 'regular|italic'
    #[arg(long, default_value = MATCH_ANY)]
    pub variants: String,
    /// e.g. 'latin', 'vietnamese'
    #[arg(long, default_value = MATCH_ANY)]
    pub subsets: String,
    /// e.g. 'display', '.?serif'
    #[arg(long, default_value = MATCH_ANY)]
    pub category: String,
    #[arg(long, default_value = MATCH_ANY)]
    pub kind: String,
}

impl From<CriteriaArgs> for SelectionCriteria {
    fn from(args: CriteriaArgs) -> Self {
        Self {
            family: args.family,
            variants: args.variants,
            subsets: args.subsets,
            category: args.category,
            kind: args.kind,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ApiArgs {
    #[arg(long, env = "WEBFONTS_API_KEY", hide_env_values = true)]
    pub api_key: String,
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download every matching font file not already present
    Download {
        #[command(flatten)]
        api: ApiArgs,
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
        #[command(flatten)]
        criteria: CriteriaArgs,
    },
    /// Print the matching font files without downloading
    List {
        #[command(flatten)]
        api: ApiArgs,
        #[command(flatten)]
        criteria: CriteriaArgs,
    },
}

fn config(api: ApiArgs, criteria: CriteriaArgs) -> Config {
    Config::new(api.api_key)
        .with_endpoint(api.endpoint)
        .with_criteria(criteria.into())
}

impl Commands {
    pub fn run(self) -> Result<()> {
        let fetcher = HttpFetcher::new();
        match self {
            Commands::Download { api, output_dir, criteria } => {
                let config = config(api, criteria).with_output_dir(output_dir);
                let summary = run(&config, &fetcher).context("Stopped")?;
                debug!("{summary:?}");
            }
            Commands::List { api, criteria } => {
                let tasks = list(&config(api, criteria), &fetcher).context("Stopped")?;
                println!();
                for task in tasks {
                    println!("{}\t{}\t{}", task.family, task.variant, task.url);
                }
            }
        }
        println!("Done");
        Ok(())
    }
}
