//! Status command implementation

use chrono::Utc;
use colored::Colorize;
use serde_json::json;

use crate::cli::context::resolve_session;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::json;

/// Where the active token came from
fn token_source(opts: &GlobalOptions, config: &Config) -> &'static str {
    if opts.token_ref().is_some() {
        "override"
    } else if config.token().is_some() {
        "config"
    } else {
        "none"
    }
}

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let config_found = config_path.exists();
    let config = Config::load_or_default_at(opts.config_ref())?;
    let session = resolve_session(opts, &config);
    let api_host = config.api_host(opts.api_host_ref());
    let expires_at = session.expires_at();

    if opts.format == OutputFormat::Json {
        let data = json!({
            "config_path": config_path.display().to_string(),
            "config_found": config_found,
            "api_host": api_host,
            "token_present": session.is_authenticated(),
            "token_source": token_source(opts, &config),
            "token_expires_at": expires_at.map(|t| t.to_rfc3339()),
        });
        println!("{}", json::format_json(&data)?);
        return Ok(());
    }

    println!("{}\n", "JobLink Admin Status".bold());

    if config_found {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
    }
    println!("API host: {}", api_host.cyan());
    println!();

    if !session.is_authenticated() {
        println!("{} Not signed in", "✗".red());
        println!("  → Run 'joblink-admin login' to sign in");
        println!();
        return Ok(());
    }

    match token_source(opts, &config) {
        "override" => println!("{} Admin token provided via --token", "✓".green()),
        _ => println!("{} Admin token stored", "✓".green()),
    }

    match expires_at {
        Some(expires) if expires <= Utc::now() => {
            println!(
                "{} Token expired at {} (run 'joblink-admin login')",
                "⚠".yellow(),
                expires.to_rfc3339()
            );
        }
        Some(expires) => {
            let remaining = expires.signed_duration_since(Utc::now());
            println!(
                "{} Token valid (expires in {}h {}m)",
                "✓".green(),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        }
        None => println!("{} Token expiry unknown", "○".dimmed()),
    }
    println!();

    Ok(())
}
