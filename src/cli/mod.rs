//! CLI commands for nova-emoji.
//!
//! `query` is what a host shells out to; `build-db` and `prefs` are tooling.

pub mod build;
pub mod query;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "nova-emoji")]
#[command(about = "Emoji search extension for the Nova launcher", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/nova/extensions/emoji.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search emoji by name or keyword
    Query {
        /// Text typed after the keyword
        text: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Preferred icon style (apple, twemoji, noto, blobmoji)
        #[arg(long)]
        style: Option<String>,

        /// Icon style used when the preferred icon is missing
        #[arg(long)]
        fallback_style: Option<String>,

        /// Skin tone (default, light, medium-light, medium, medium-dark, dark)
        #[arg(long)]
        skin_tone: Option<String>,

        /// Leave the emoji out of result labels
        #[arg(long)]
        no_char: bool,

        /// Emoji database (overrides config)
        #[arg(long, value_name = "FILE")]
        database: Option<PathBuf>,

        /// Icon asset root (overrides config)
        #[arg(long, value_name = "DIR")]
        assets: Option<PathBuf>,
    },

    /// Write an emoji database file
    BuildDb {
        /// Output SQLite file
        output: PathBuf,

        /// JSON file with emoji records (default: built-in dataset)
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
    },

    /// Print the effective configuration
    Prefs,
}

/// Parse arguments and run the selected command.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    match cli.command {
        Commands::Query {
            text,
            json,
            style,
            fallback_style,
            skin_tone,
            no_char,
            database,
            assets,
        } => {
            let args = query::QueryArgs {
                text: text.join(" "),
                json,
                style,
                fallback_style,
                skin_tone,
                no_char,
                database,
                assets,
            };
            query::run_query(&config, args)?;
        }
        Commands::BuildDb { output, from } => {
            build::run_build(&output, from.as_deref())?;
        }
        Commands::Prefs => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
