//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod dashboard;
pub mod handlers;
pub mod login;
pub mod recruiter;
pub mod seeker;
pub mod status;

pub use args::{BulkArgs, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// joblink-admin - command-line companion for the JobLink admin backend
#[derive(Parser, Debug)]
#[command(name = "joblink-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json) [default: preferences.format, then pretty]
    #[arg(
        long,
        global = true,
        env = "JOBLINK_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "JOBLINK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the backend origin (e.g. http://localhost:8080)
    #[arg(long, global = true, env = "JOBLINK_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Use this admin token instead of the stored one
    #[arg(
        long,
        global = true,
        env = "JOBLINK_ADMIN_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "JOBLINK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in as an administrator and store the session token
    Login {
        /// Admin email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Remove the stored session token
    Logout,

    /// Show configuration and session status
    Status,

    /// Display version information
    Version,

    /// Show dashboard statistics
    Dashboard,

    /// Manage job seeker accounts
    #[command(subcommand)]
    Seeker(SeekerCommands),

    /// Manage recruiter accounts
    #[command(subcommand)]
    Recruiter(RecruiterCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   joblink-admin completion bash > /etc/bash_completion.d/joblink-admin
  zsh:    joblink-admin completion zsh > \"${fpath[1]}/_joblink-admin\"
  fish:   joblink-admin completion fish > ~/.config/fish/completions/joblink-admin.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Job seeker subcommands
#[derive(Subcommand, Debug)]
pub enum SeekerCommands {
    /// List all job seekers
    List {
        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Delete one or more job seekers
    Delete {
        #[command(flatten)]
        bulk: BulkArgs,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Recruiter subcommands
#[derive(Subcommand, Debug)]
pub enum RecruiterCommands {
    /// List all recruiters
    List {
        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,

        /// Only show recruiters awaiting verification
        #[arg(long)]
        unverified: bool,
    },

    /// Delete one or more recruiters
    Delete {
        #[command(flatten)]
        bulk: BulkArgs,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Mark recruiters as verified
    Verify {
        #[command(flatten)]
        bulk: BulkArgs,
    },

    /// Revoke recruiter verification
    Unverify {
        #[command(flatten)]
        bulk: BulkArgs,
    },
}
