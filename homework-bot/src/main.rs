//! homework-bot binary: `run` polls and notifies, `check` prints the current status once.

use anyhow::Result;
use clap::Parser;
use homework_bot::{run_bot, run_check, BotConfig, Cli, Commands, PracticumConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, from_date } => {
            let config = BotConfig::load(token)?;
            run_bot(config, from_date).await
        }
        Commands::Check { from_date } => {
            let config = PracticumConfig::from_env()?;
            match run_check(config, from_date).await? {
                Some(message) => println!("{}", message),
                None => println!("No homework updates since {}", from_date),
            }
            Ok(())
        }
    }
}
