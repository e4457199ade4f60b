use super::enums::{StatusArg, ViewportArg};
use clap::Subcommand;
use erpview_engine::Locale;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write the default configuration and create the database")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml with the defaults")]
        force: bool,
    },

    #[command(about = "Resolve an alias to its render configuration")]
    Resolve {
        alias: String,

        #[arg(long, help = "Role of the caller")]
        role: String,
    },

    #[command(about = "Open a view as a caller and render it")]
    Render {
        alias: String,

        #[arg(long, help = "Role of the caller")]
        role: String,

        #[arg(long = "permission", help = "Permission held by the caller (repeatable)")]
        permissions: Vec<String>,

        #[arg(long, help = "Viewport width class (default: from config)")]
        viewport: Option<ViewportArg>,

        #[arg(long, help = "Date locale for the footer: pt-BR, en-US or iso")]
        locale: Option<Locale>,
    },

    #[command(about = "Author and inspect development views")]
    View {
        #[command(subcommand)]
        command: ViewCommand,
    },

    #[command(about = "Promote a development view to a published view")]
    Promote {
        id: String,

        #[arg(long, help = "Module the published view belongs to")]
        module: String,

        #[arg(long = "role", help = "Role allowed to open the view (repeatable, default: admin)")]
        roles: Vec<String>,

        #[arg(long = "permission", help = "Permission required to open the view (repeatable)")]
        permissions: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum ViewCommand {
    #[command(about = "Save a view JSON file as a new development view")]
    Import {
        file: PathBuf,

        #[arg(long, default_value = "cli", help = "Author recorded on the view")]
        actor: String,
    },

    #[command(about = "List development and published views")]
    List,

    #[command(about = "Show a development view")]
    Show { id: String },

    #[command(about = "Check a view JSON file for errors")]
    Validate { file: PathBuf },

    #[command(about = "Move a development view through its review statuses")]
    Status { id: String, status: StatusArg },

    #[command(about = "Print the SQL preview of one of a view's queries")]
    Sql {
        file: PathBuf,

        query_id: String,

        #[arg(long, help = "Data source catalog JSON, for physical table names")]
        sources: Option<PathBuf>,
    },
}
