//! ado-pat - Azure DevOps Personal Access Token lifecycle management

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions, TokenArgs};
use client::PatCommand;
use client::models::{ListFilter, PatAction};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Validate before anything touches the network or prompts for secrets
fn pat_command(action: PatAction, args: TokenArgs) -> Result<PatCommand> {
    Ok(PatCommand::new(
        action,
        args.token_name,
        args.token_id,
        ListFilter::default(),
    )?)
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    let credentials = cli.credentials;

    match cli.command {
        Commands::Create(args) => {
            cli::pat::run(&opts, &credentials, pat_command(PatAction::Create, args)?).await
        }
        Commands::Update(args) => {
            cli::pat::run(&opts, &credentials, pat_command(PatAction::Update, args)?).await
        }
        Commands::Revoke(args) => {
            cli::pat::run(&opts, &credentials, pat_command(PatAction::Revoke, args)?).await
        }
        Commands::Get(args) => {
            cli::pat::run(&opts, &credentials, pat_command(PatAction::Get, args)?).await
        }
        Commands::List(args) => {
            let command = PatCommand::List {
                filter: ListFilter::from(&args),
            };
            cli::pat::run(&opts, &credentials, command).await
        }
        Commands::Status => cli::status::run(&opts, &credentials),
        Commands::Module { args_file } => {
            let code = cli::module::run(&args_file, &opts).await;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
    }
}
