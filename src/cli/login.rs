//! Login and logout command implementations
//!
//! These are the only commands that write the stored admin token.

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;
use serde_json::json;

use crate::cli::context::client_options;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::models::Credentials;
use crate::client::{AuthApi, JobLinkClient, Session};
use crate::config::{Config, TOKEN_KEY};
use crate::error::{ConfigError, Error, Result};
use crate::output::json;

/// Environment variable consulted before prompting for the password
pub const PASSWORD_ENV: &str = "JOBLINK_ADMIN_PASSWORD";

/// Authenticate and pull the session token out of the response
pub async fn obtain_token<C: AuthApi + ?Sized>(client: &C, credentials: &Credentials) -> Result<String> {
    let response = client.authenticate(credentials).await?;
    response
        .token()
        .map(str::to_string)
        .ok_or_else(|| Error::Other("Authentication response did not contain a token".to_string()))
}

/// Run the login command
pub async fn login(opts: &GlobalOptions, email: Option<String>) -> Result<()> {
    let mut config = Config::load_or_default_at(opts.config_ref())?;

    let email = match email {
        Some(email) => email,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Admin email")
            .interact_text()?,
    };

    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => {
            debug!("Using password from {}", PASSWORD_ENV);
            password
        }
        _ => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let api_host = config.api_host(opts.api_host_ref()).to_string();
    let client = JobLinkClient::with_host(
        Session::anonymous(),
        Some(api_host.as_str()),
        client_options(&config),
    )?;

    eprintln!("{}", "Authenticating...".cyan());
    let token = obtain_token(&client, &Credentials::new(email.clone(), password)).await?;
    let session = Session::bearer(token.as_str());

    config.admin_token = Some(token);
    if let Some(host) = opts.api_host_ref() {
        config.api_host = Some(host.to_string());
    }
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    match opts.format {
        OutputFormat::Json => {
            let data = json!({
                "email": email,
                "api_host": api_host,
                "config_path": config_path.display().to_string(),
                "expires_at": session.expires_at().map(|t| t.to_rfc3339()),
            });
            println!("{}", json::format_json(&data)?);
        }
        _ => {
            println!("{} Signed in as {}", "✓".green(), email.bold());
            println!("  Token saved under '{}' in {}", TOKEN_KEY, config_path.display());
            if let Some(expires) = session.expires_at() {
                println!("  Session expires {}", expires.to_rfc3339());
            }
        }
    }

    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("Not signed in.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let was_signed_in = config.admin_token.take().is_some();
    config.save_at(opts.config_ref())?;

    match opts.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&json!({ "signed_out": was_signed_in }))?);
        }
        _ if was_signed_in => println!("{} Signed out", "✓".green()),
        _ => println!("Not signed in."),
    }

    Ok(())
}
