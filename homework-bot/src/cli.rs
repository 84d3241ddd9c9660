//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Reports Practicum homework review status changes to Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll forever and notify the chat (config from env; token can override TELEGRAM_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Unix timestamp to start polling from; defaults to now.
        #[arg(long, allow_hyphen_values = true)]
        from_date: Option<i64>,
    },
    /// Fetch once and print the current status message without sending it.
    Check {
        #[arg(long, default_value_t = 0)]
        from_date: i64,
    },
}
