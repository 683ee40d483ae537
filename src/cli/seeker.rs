//! Job seeker command implementations

use crate::cli::handlers::bulk::{BulkAction, run_bulk};
use crate::cli::handlers::list::{Selection, print_records};
use crate::cli::{BulkArgs, CommandContext, GlobalOptions};
use crate::client::{ListingApi, ModerationApi};
use crate::error::Result;

/// Run the seeker list command
pub async fn list(opts: &GlobalOptions, limit: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let seekers = ctx.client.list_job_seekers().await?;

    let selection = Selection {
        limit,
        ..Selection::all()
    };
    print_records(&seekers, &selection, "Job seekers", ctx.format)
}

/// Run the seeker delete command
pub async fn delete(opts: &GlobalOptions, bulk: &BulkArgs, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let action = BulkAction {
        verb: "delete",
        noun: "job seeker",
        destructive: true,
    };
    run_bulk(ctx.client, bulk, yes, action, ctx.format, |client, id| async move {
        client.delete_job_seeker(&id).await
    })
    .await
}
