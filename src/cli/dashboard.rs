//! Dashboard command implementation

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ListingApi;
use crate::error::Result;
use crate::models::display::StatDisplay;
use crate::output;

/// Run the dashboard command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stats = ctx.client.dashboard_stats().await?;

    let rows = StatDisplay::rows(&stats);
    output::print_rows(&rows, &stats, "JobLink dashboard", ctx.format)
}
