use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use wip_core::TargetMetCondition;

#[derive(Parser)]
#[command(author, version, about = "wipdev CLI (alpha)", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// JSON dataset (array of client records, or an object with `data`); wins over --api-url
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Base URL of the WIP API, e.g. http://localhost:8080
    #[arg(long, global = true, env = "WIP_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token sent to the WIP API
    #[arg(long, global = true, env = "WIP_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Fraction of a job's fee target at which it counts as a warning job
    #[arg(long, global = true)]
    pub warning_ratio: Option<f64>,
}

#[derive(Args, Clone, Debug)]
pub struct QueryArgs {
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Case-insensitive match on client name, code or job name
    #[arg(long, default_value = "")]
    pub search: String,

    /// all | met | notMet
    #[arg(long = "target-met", default_value = "all")]
    pub target_met: TargetMetCondition,

    /// Only clients with at least one job approaching its fee target
    #[arg(long)]
    pub warning_only: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// One row per client on the requested page
    Clients {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Jobs of one client (searched across all pages)
    Jobs {
        client_id: String,
    },

    /// Dashboard summary cards
    Summary {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Normalized view model as JSON on stdout
    Export {
        #[command(flatten)]
        query: QueryArgs,

        /// write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Totals for a JSON array of expense records
    Expenses {
        file: PathBuf,
    },
}
