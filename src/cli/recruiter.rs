//! Recruiter command implementations

use crate::cli::handlers::bulk::{BulkAction, run_bulk};
use crate::cli::handlers::list::{Selection, print_records};
use crate::cli::{BulkArgs, CommandContext, GlobalOptions};
use crate::client::models::Record;
use crate::client::{ListingApi, ModerationApi};
use crate::error::Result;

/// Records explicitly flagged as not verified
fn is_unverified(record: &Record) -> bool {
    record.verified() == Some(false)
}

/// Run the recruiter list command
pub async fn list(opts: &GlobalOptions, limit: Option<usize>, unverified: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let recruiters = ctx.client.list_recruiters().await?;

    let filter: Option<&dyn Fn(&Record) -> bool> = if unverified {
        Some(&is_unverified)
    } else {
        None
    };
    let selection = Selection { limit, filter };

    let heading = if unverified {
        "Recruiters awaiting verification"
    } else {
        "Recruiters"
    };
    print_records(&recruiters, &selection, heading, ctx.format)
}

/// Run the recruiter delete command
pub async fn delete(opts: &GlobalOptions, bulk: &BulkArgs, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let action = BulkAction {
        verb: "delete",
        noun: "recruiter",
        destructive: true,
    };
    run_bulk(ctx.client, bulk, yes, action, ctx.format, |client, id| async move {
        client.delete_recruiter(&id).await
    })
    .await
}

/// Run the recruiter verify command
pub async fn verify(opts: &GlobalOptions, bulk: &BulkArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let action = BulkAction {
        verb: "verify",
        noun: "recruiter",
        destructive: false,
    };
    run_bulk(ctx.client, bulk, true, action, ctx.format, |client, id| async move {
        client.verify_recruiter(&id).await
    })
    .await
}

/// Run the recruiter unverify command
pub async fn unverify(opts: &GlobalOptions, bulk: &BulkArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let action = BulkAction {
        verb: "unverify",
        noun: "recruiter",
        destructive: false,
    };
    run_bulk(ctx.client, bulk, true, action, ctx.format, |client, id| async move {
        client.unverify_recruiter(&id).await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_unverified() {
        assert!(is_unverified(&Record(json!({"verified": false}))));
        assert!(!is_unverified(&Record(json!({"isVerified": true}))));
        assert!(!is_unverified(&Record(json!({"id": 1}))));
    }
}
