// NOTE: Command organization
//
// Whole-view operations (resolve, render, promote) are top-level verbs;
// authoring operations on stored drafts live under `view`.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "erpview")]
#[command(about = "Resolve, render and manage dynamic ERP views", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $ERPVIEW_PATH, then the user data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
