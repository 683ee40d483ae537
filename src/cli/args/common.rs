//! Common CLI types shared across commands

use clap::Args;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - machine-parseable, one row per entry
    Table,
    /// JSON format - raw backend payload with metadata
    Json,
}

/// Identifiers and safety flags for commands that act on several accounts
#[derive(Debug, Clone, Args)]
pub struct BulkArgs {
    /// One or more account IDs
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,

    /// Show what would be changed without calling the backend
    #[arg(long)]
    pub dry_run: bool,
}

impl BulkArgs {
    /// IDs with duplicates removed, keeping first-seen order
    pub fn unique_ids(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty() && seen.insert(id.to_string()))
            .map(str::to_string)
            .collect()
    }
}
