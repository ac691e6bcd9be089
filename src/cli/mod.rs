pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "admin-ctl")]
#[command(about = "Admin console CLI - inspect roles, permissions and admin records")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List admin roles by privilege")]
    Roles,

    #[command(about = "Resolve a permission for an ad-hoc admin record (offline)")]
    Check {
        #[arg(long, help = "Admin role (superadmin, manager, viewer)")]
        role: String,
        #[arg(long, help = "Action name, e.g. delete_user")]
        action: String,
        #[arg(long = "grant", value_parser = commands::check::parse_grant, help = "Permission override as action=true|false")]
        grants: Vec<(String, bool)>,
    },

    #[command(about = "Look up the admin record for a user id in the database")]
    Lookup {
        #[arg(help = "Identity-provider user id")]
        user_id: Uuid,
    },

    #[command(about = "Mint a session token for local development")]
    Token {
        #[arg(help = "Identity-provider user id")]
        user_id: Uuid,
        #[arg(long, help = "Email claim")]
        email: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Roles => commands::roles::handle(output_format),
        Commands::Check { role, action, grants } => commands::check::handle(&role, &action, grants, output_format),
        Commands::Lookup { user_id } => commands::lookup::handle(user_id, output_format).await,
        Commands::Token { user_id, email } => commands::token::handle(user_id, email, output_format),
    }
}
