pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use wip_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Clients { query } => handlers::handle_clients(&cli.source, query),
        Commands::Jobs { client_id } => handlers::handle_jobs(&cli.source, client_id),
        Commands::Summary { query } => handlers::handle_summary(&cli.source, query),
        Commands::Export { query, out } => handlers::handle_export(&cli.source, query, out),
        Commands::Expenses { file } => handlers::handle_expenses(file),
    }
}
