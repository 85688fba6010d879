use crate::types::{DifficultyFilter, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "devpath")]
#[command(about = "Chart your path to becoming a developer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Workspace directory (config.toml, devpath.log)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the roadmaps interactively
    Browse {
        #[arg(default_value = "/", help = "Path to open, e.g. /roadmap or /roadmap/frontend")]
        path: String,
    },

    /// List every track in catalog order
    List {
        #[arg(long)]
        difficulty: Option<DifficultyFilter>,
    },

    /// Show the detail page of one track
    Show { track_id: String },

    /// Search track titles, descriptions and technologies
    Search { query: String },

    /// Resolve a navigation path
    Route { path: String },
}
