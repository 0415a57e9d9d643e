//! CLI for merging partial URLs against defaults.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use urldefault_core::config::{self, OutputFormat, UrlDefaultConfig};

use commands::{run_completions, run_merge, run_profiles, run_split};

/// Top-level CLI for urldefault.
#[derive(Debug, Parser)]
#[command(name = "urldefault")]
#[command(about = "Fill in the missing parts of a URL from a defaults URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Merge a (possibly partial) URL over a defaults URL.
    Merge {
        /// URL whose parts take precedence, e.g. `localhost:9999/path`.
        primary: String,

        /// Defaults URL. Overrides --profile and the configured defaults.
        defaults: Option<String>,

        /// Take the defaults URL from a named profile in config.toml.
        #[arg(long, value_name = "NAME", conflicts_with = "defaults")]
        profile: Option<String>,

        /// Print every part as JSON instead of the merged URL.
        #[arg(long)]
        json: bool,
    },

    /// Parse a single URL and print its parts.
    Split {
        /// URL to parse; a missing scheme is allowed.
        url: String,

        /// Print the parts as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the profiles configured in config.toml.
    Profiles,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Merge {
                primary,
                defaults,
                profile,
                json,
            } => {
                let cfg = load_config()?;
                let defaults = match defaults.as_deref() {
                    Some(d) => Some(d),
                    None => cfg.defaults_for(profile.as_deref())?,
                };
                run_merge(&primary, defaults, json || cfg.output == OutputFormat::Json)?;
            }
            CliCommand::Split { url, json } => {
                let cfg = load_config()?;
                run_split(&url, json || cfg.output == OutputFormat::Json)?;
            }
            CliCommand::Profiles => run_profiles(&load_config()?)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

fn load_config() -> Result<UrlDefaultConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
