//! Account-level bulk deletes for the active user.

use crate::context::SessionContext;
use hillfort_core::{HillfortResult, Notification};
use tracing::{error, info};

const DELETE_ALL_PROMPT: &str = "Are you sure you want to delete all your hillforts?";
const DELETE_ACCOUNT_PROMPT: &str = "Are you sure you want to delete your account?";

async fn confirmed(ctx: &SessionContext, prompt: &str) -> bool {
    !ctx.config.confirm_delete || ctx.callbacks.confirm(prompt).await
}

/// Delete every hillfort the active user owns.
///
/// Returns `Ok(None)` if the user declined, otherwise the number removed.
pub async fn delete_all_hillforts(ctx: &SessionContext) -> HillfortResult<Option<usize>> {
    if !confirmed(ctx, DELETE_ALL_PROMPT).await {
        return Ok(None);
    }

    match ctx.store.hillfort_delete_all(ctx.user).await {
        Ok(removed) => {
            info!(user_id = %ctx.user, removed, "Deleted all hillforts");
            ctx.callbacks
                .notify(Notification::success(format!("Deleted {removed} hillforts")));
            Ok(Some(removed))
        }
        Err(err) => {
            error!(user_id = %ctx.user, error = %err, "Failed to delete hillforts");
            ctx.callbacks.notify(Notification::from(&err));
            Err(err)
        }
    }
}

/// Delete the active user and everything they own.
///
/// Returns `Ok(false)` if the user declined. The context is unusable for
/// this user afterwards.
pub async fn delete_account(ctx: &SessionContext) -> HillfortResult<bool> {
    if !confirmed(ctx, DELETE_ACCOUNT_PROMPT).await {
        return Ok(false);
    }

    match ctx.store.user_delete(ctx.user).await {
        Ok(()) => {
            info!(user_id = %ctx.user, "Deleted account");
            ctx.callbacks.notify(Notification::success("Account deleted"));
            Ok(true)
        }
        Err(err) => {
            error!(user_id = %ctx.user, error = %err, "Failed to delete account");
            ctx.callbacks.notify(Notification::from(&err));
            Err(err)
        }
    }
}
