//! Adult leader business logic - Volunteer signups and the leader directory.

use crate::{
    core::{dates, ids},
    entities::{AdultSignup, PortalState, User, adult_signup},
};
use chrono::NaiveDate;
use tracing::info;

/// Appends a volunteer signup for `user_id`. A blank role is recorded as
/// "Volunteer".
pub fn add_adult_signup<'a>(
    state: &'a mut PortalState,
    user_id: &str,
    role: &str,
    date: NaiveDate,
) -> &'a AdultSignup {
    let role = match role.trim() {
        "" => adult_signup::DEFAULT_ROLE.to_string(),
        trimmed => trimmed.to_string(),
    };
    info!(user_id, %role, %date, "Adult signup added");
    state.adult_leader_signups.push(AdultSignup {
        id: ids::generate_id(),
        user_id: user_id.to_string(),
        role,
        date,
    });
    &state.adult_leader_signups[state.adult_leader_signups.len() - 1]
}

/// Troop-wide signups ascending by date; `upcoming_only` drops those dated
/// before `today`.
#[must_use]
pub fn adult_signups(
    state: &PortalState,
    today: NaiveDate,
    upcoming_only: bool,
) -> Vec<&AdultSignup> {
    let mut entries: Vec<&AdultSignup> = state
        .adult_leader_signups
        .iter()
        .filter(|s| !upcoming_only || !dates::is_past(s.date, today))
        .collect();
    entries.sort_by_key(|s| s.date);
    entries
}

/// Users holding an adult leader role, in creation order.
#[must_use]
pub fn adult_leaders(state: &PortalState) -> Vec<&User> {
    state
        .users
        .iter()
        .filter(|u| u.role().is_adult_leader())
        .collect()
}
