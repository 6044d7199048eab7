//! SMC/BOR business logic - Scouts requesting advancement checkpoints.
//!
//! Requests are append-only; nothing here edits or removes one.

use crate::{
    core::{dates, ids},
    entities::{PortalState, SmcBorKind, SmcBorRequest, smc_bor},
};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

/// Appends a pending SMC/BOR request for `user_id`.
pub fn submit_smc_bor<'a>(
    state: &'a mut PortalState,
    user_id: &str,
    kind: SmcBorKind,
    date: NaiveDate,
    now: DateTime<Utc>,
) -> &'a SmcBorRequest {
    info!(user_id, %kind, %date, "SMC/BOR request submitted");
    state.smc_bor.push(SmcBorRequest {
        id: ids::generate_id(),
        user_id: user_id.to_string(),
        kind,
        date,
        status: smc_bor::DEFAULT_STATUS.to_string(),
        created_at: now,
    });
    &state.smc_bor[state.smc_bor.len() - 1]
}

/// Requests made by `user_id`, ascending by date. With `upcoming_only`, requests
/// dated before `today` are left out.
#[must_use]
pub fn smc_bor_for_user<'a>(
    state: &'a PortalState,
    user_id: &str,
    today: NaiveDate,
    upcoming_only: bool,
) -> Vec<&'a SmcBorRequest> {
    let mut entries: Vec<&SmcBorRequest> = state
        .smc_bor
        .iter()
        .filter(|r| r.user_id == user_id)
        .filter(|r| !upcoming_only || !dates::is_past(r.date, today))
        .collect();
    entries.sort_by_key(|r| r.date);
    entries
}

/// Every request in the troop, ascending by date.
#[must_use]
pub fn smc_bor_history(state: &PortalState) -> Vec<&SmcBorRequest> {
    let mut entries: Vec<&SmcBorRequest> = state.smc_bor.iter().collect();
    entries.sort_by_key(|r| r.date);
    entries
}
