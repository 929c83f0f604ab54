//! ReliefMap CLI - Directory management and demo seeding against a running
//! server.
//!
//! # Usage
//!
//! ```bash
//! # Register an organization (prompts happen server-side; admin login required)
//! rm-cli org register -n "Myanmar Relief" -u relief -p <password> -r Yangon -f "$12,000"
//!
//! # Approve or reject a pending organization
//! rm-cli org approve <id>
//! rm-cli org reject <id>
//!
//! # List the directory
//! rm-cli org list
//!
//! # Seed demo data (organizations, pins, requests, an alert)
//! rm-cli seed
//! ```
//!
//! # Environment Variables
//!
//! - `RELIEFMAP_BASE_URL` - Server to talk to (default: http://127.0.0.1:3000)
//! - `RELIEFMAP_ADMIN_USERNAME` / `RELIEFMAP_ADMIN_PASSWORD` - Admin login

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rm-cli")]
#[command(author, version, about = "ReliefMap CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the organization directory
    Org {
        #[command(subcommand)]
        action: OrgAction,
    },
    /// Seed a running server with demo data
    Seed,
}

#[derive(Subcommand)]
enum OrgAction {
    /// Register a new organization (admin)
    Register {
        /// Organization name
        #[arg(short, long)]
        name: String,

        /// Operator login username
        #[arg(short, long)]
        username: String,

        /// Operator login password
        #[arg(short, long)]
        password: String,

        /// Operating region
        #[arg(short, long)]
        region: String,

        /// Reported funding, e.g. "$12,000"
        #[arg(short, long, default_value = "$0")]
        funding: String,

        /// Contact email
        #[arg(short, long, default_value = "contact@example.org")]
        email: String,

        /// Contact phone
        #[arg(long, default_value = "+95 1 000 000")]
        phone: String,
    },
    /// Approve a pending organization
    Approve {
        /// Organization id
        id: String,
    },
    /// Reject an organization
    Reject {
        /// Organization id
        id: String,
    },
    /// List the directory
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Org { action } => match action {
            OrgAction::Register {
                name,
                username,
                password,
                region,
                funding,
                email,
                phone,
            } => {
                commands::org::register(commands::org::Registration {
                    name,
                    username,
                    password,
                    region,
                    funding,
                    email,
                    phone,
                })
                .await?;
            }
            OrgAction::Approve { id } => commands::org::approve(&id).await?,
            OrgAction::Reject { id } => commands::org::reject(&id).await?,
            OrgAction::List => commands::org::list().await?,
        },
        Commands::Seed => commands::seed::demo_data().await?,
    }
    Ok(())
}
