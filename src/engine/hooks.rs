//! Connect, join and save are placeholder hooks for an external service.
//! They record intent as an [`ActivityEvent`] and have no other effect.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::activity::{ActivityEvent, HookAction};
use crate::state::AppState;

pub fn record_hook(
    state: &AppState,
    action: HookAction,
    target_id: Uuid,
) -> Result<ActivityEvent, AppError> {
    let (kind, exists) = match action {
        HookAction::Connect => ("rider", state.riders.contains(target_id)?),
        HookAction::Join => ("ride", state.rides.contains(target_id)?),
        HookAction::Save => ("route", state.routes.contains(target_id)?),
    };

    if !exists {
        return Err(AppError::NotFound(format!("{kind} {target_id} not found")));
    }

    let event = ActivityEvent {
        id: Uuid::new_v4(),
        action,
        target_id,
        occurred_at: Utc::now(),
    };

    state
        .metrics
        .hook_events_total
        .with_label_values(&[action.as_str()])
        .inc();

    // No subscribers is not an error.
    let _ = state.activity_tx.send(event.clone());

    info!(action = %action, target_id = %target_id, "hook recorded");

    Ok(event)
}
