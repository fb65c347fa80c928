use std::path::PathBuf;

use academy_core::enums::{CascadePolicy, EntityKind};
use clap::{Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `acad` binary.
#[derive(Debug, Parser)]
#[command(name = "acad", version, about = "Academy record store maintenance")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSONL data directory (switches the backend to jsonl)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Club (tenant) id stamped on new records
    #[arg(long, global = true)]
    pub club: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
            club: self.club.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the initial datasets into never-written slots
    Seed,

    /// List every record of one entity kind
    List {
        /// Entity kind or slot name (e.g. `session`, `sessions`, `lineup-template`)
        kind: EntityKind,
    },

    /// Show one record
    Get { kind: EntityKind, id: String },

    /// Delete a record and its dependents
    Delete {
        kind: EntityKind,
        id: String,

        /// Override the configured cascade policy for this delete
        #[arg(long)]
        cascade: Option<CascadePolicy>,
    },

    /// Record count per entity kind
    Counts,

    /// Show cascade rules
    Rules {
        /// Policy to show (defaults to the configured one)
        #[arg(long)]
        policy: Option<CascadePolicy>,
    },
}
