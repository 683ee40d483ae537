//! joblink-admin - command-line companion for the JobLink admin backend

use clap::{CommandFactory, Parser};
use colored::Colorize;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions, RecruiterCommands, SeekerCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Configure env_logger; `--debug` raises the default level, `RUST_LOG` still wins
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email } => cli::login::login(&opts, email).await,
        Commands::Logout => cli::login::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("joblink-admin version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Dashboard => cli::dashboard::run(&opts).await,
        Commands::Seeker(cmd) => match cmd {
            SeekerCommands::List { limit } => cli::seeker::list(&opts, limit).await,
            SeekerCommands::Delete { bulk, yes } => cli::seeker::delete(&opts, &bulk, yes).await,
        },
        Commands::Recruiter(cmd) => match cmd {
            RecruiterCommands::List { limit, unverified } => {
                cli::recruiter::list(&opts, limit, unverified).await
            }
            RecruiterCommands::Delete { bulk, yes } => {
                cli::recruiter::delete(&opts, &bulk, yes).await
            }
            RecruiterCommands::Verify { bulk } => cli::recruiter::verify(&opts, &bulk).await,
            RecruiterCommands::Unverify { bulk } => cli::recruiter::unverify(&opts, &bulk).await,
        },
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "joblink-admin",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
