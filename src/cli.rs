use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use anderson::config::Settings;

#[derive(Parser)]
#[command(name = "anderson")]
#[command(about = "Check Go dependencies against a license policy")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (default: ./anderson.toml when present)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit dependencies against the license policy
    Check {
        #[command(flatten)]
        paths: PathArgs,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a starter policy file
    Init {
        /// Policy preset
        #[arg(long, default_value = "yellow")]
        preset: InitPreset,

        /// Where to write the policy (default: .anderson.yml)
        #[arg(long)]
        policy: Option<PathBuf>,

        /// Overwrite an existing policy file
        #[arg(long)]
        force: bool,
    },
    /// Add every borderline dependency to the policy's exceptions
    Exempt {
        #[command(flatten)]
        paths: PathArgs,

        /// Show changes without applying them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show or validate configuration
    Config {
        #[command(flatten)]
        paths: PathArgs,

        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// Overrides for where inputs are read from
#[derive(clap::Args, Clone, Default)]
pub struct PathArgs {
    /// Policy file (YAML, or TOML when it ends in .toml)
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Godeps manifest
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// GOPATH root to search for dependencies (repeatable; default: $GOPATH)
    #[arg(long = "search-path", value_name = "DIR")]
    pub search_paths: Vec<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InitPreset {
    Green,
    Yellow,
    Red,
}

impl PathArgs {
    /// Command-line values win over the settings file
    pub fn apply_to(self, mut settings: Settings) -> Settings {
        if let Some(policy) = self.policy {
            settings.policy = Some(policy);
        }
        if let Some(manifest) = self.manifest {
            settings.manifest = Some(manifest);
        }
        if !self.search_paths.is_empty() {
            settings.search_paths = Some(self.search_paths);
        }
        settings
    }
}
