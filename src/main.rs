//! Reliefhub CLI entry point.

use anyhow::Result;
use clap::Parser;

use reliefhub::cli::commands::{board, init, list, seed, submit};
use reliefhub::cli::{handle_error, load_config, Cli, CliContext, Commands};
use reliefhub::domain::models::Config;
use reliefhub::infrastructure::logging::LoggerImpl;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let Cli {
        command,
        json,
        config,
        base_url,
    } = Cli::parse();

    // init must work even when the existing configuration is broken
    let result = match command {
        Commands::Init(args) => init::execute(args, json).await,
        command => match load_config(config.as_deref(), base_url.as_deref()) {
            Ok(config) => run(command, config, json).await,
            Err(err) => Err(err),
        },
    };

    if let Err(err) = result {
        handle_error(err, json);
    }
}

async fn run(command: Commands, config: Config, json: bool) -> Result<()> {
    let _logger = LoggerImpl::init(&config.logging)?;
    let ctx = CliContext::new(config)?;

    match command {
        Commands::Init(args) => init::execute(args, json).await,
        Commands::Board(args) => board::execute(args, &ctx, json).await,
        Commands::List(args) => list::execute(args, &ctx, json).await,
        Commands::Alert(args) => submit::alert(args, &ctx, json).await,
        Commands::Helpline(args) => submit::helpline(args, &ctx, json).await,
        Commands::Shelter(args) => submit::shelter(args, &ctx, json).await,
        Commands::Volunteer(args) => submit::volunteer(args, &ctx, json).await,
        Commands::Seed => seed::execute(&ctx, json).await,
    }
}
