mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calshare")]
#[command(about = "Generate add-to-calendar links and ICS files for single events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a share link (or file content) for a calendar site
    Url {
        /// Target site: google, yahoo, outlook or ical
        #[arg(short, long)]
        site: Option<String>,

        #[command(flatten)]
        event: commands::EventArgs,

        /// Open the result in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Print the ICS document for an event
    Ics {
        #[command(flatten)]
        event: commands::EventArgs,

        /// Choose delivery based on this browser user agent
        #[arg(long)]
        user_agent: Option<String>,
    },
    /// List known IANA timezone identifiers
    Zones {
        /// Only show identifiers containing this substring
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Url { site, event, open } => commands::url::run(site.as_deref(), event, open),
        Commands::Ics { event, user_agent } => commands::ics::run(event, user_agent.as_deref()),
        Commands::Zones { filter } => commands::zones::run(filter.as_deref()),
    }
}
