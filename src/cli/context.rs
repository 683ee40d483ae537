//! Command execution context
//!
//! Loads config, resolves the admin session and builds the API client so
//! individual commands don't repeat that setup.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{ClientOptions, JobLinkClient, RetryPolicy, Session};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing the client and output format.
pub struct CommandContext {
    /// API client carrying the resolved session
    pub client: Arc<JobLinkClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// The session comes from `--token`/`JOBLINK_ADMIN_TOKEN` when given,
    /// otherwise from the token stored in the config file. Without either,
    /// requests are sent without an `Authorization` header.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default_at(opts.config_ref())?;
        let session = resolve_session(opts, &config);

        if !session.is_authenticated() {
            warn!("No admin token found; run `joblink-admin login` first");
        }

        let api_host = config.api_host(opts.api_host_ref()).to_string();
        let client =
            JobLinkClient::with_host(session, Some(api_host.as_str()), client_options(&config))?;
        debug!(
            "Using JobLink backend at {} (authenticated: {})",
            client.base_url(),
            client.session().is_authenticated()
        );

        Ok(Self {
            client: Arc::new(client),
            format: opts.format,
        })
    }
}

/// Pick the session: explicit override first, then the stored token
pub fn resolve_session(opts: &GlobalOptions, config: &Config) -> Session {
    match opts.token_ref() {
        Some(token) => Session::bearer(token),
        None => Session::from_token(config.token()),
    }
}

/// Transport options derived from user preferences
pub fn client_options(config: &Config) -> ClientOptions {
    ClientOptions {
        timeout: Duration::from_secs(config.preferences.timeout_secs.max(1)),
        retry: RetryPolicy::new(
            config.preferences.get_retries,
            RetryPolicy::DEFAULT_BACKOFF,
        ),
    }
}
