//! Shared test utilities for the portal.
//!
//! Provides a fixed reference clock, a small cast of users with stable ids, and
//! helpers for building states with events in them.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{
    core::dates::offset_from,
    entities::{Event, PortalState, RoleProfile, TrainingRecords, User},
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

/// Id of the first scout (current user by default)
pub const SCOUT_A: &str = "scout-a";
/// Id of the second scout
pub const SCOUT_B: &str = "scout-b";
/// Id of the assistant scoutmaster
pub const ASM: &str = "asm";
/// Id of the committee member
pub const COMMITTEE: &str = "committee";
/// Id of the merit badge counselor
pub const MBC: &str = "mbc";

/// Installs a test-writer tracing subscriber once per process.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// The "today" every date-sensitive test runs against.
pub fn reference_today() -> NaiveDate {
    date(2026, 4, 15)
}

/// A fixed instant on [`reference_today`].
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 15, 18, 30, 0).unwrap()
}

fn user(id: &str, name: &str, profile: RoleProfile) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@troop.org"),
        profile,
        medical_valid_until: None,
        training: TrainingRecords::new(),
    }
}

/// A state with one user per role and nothing else.
pub fn empty_state_with_users() -> PortalState {
    PortalState {
        users: vec![
            user(SCOUT_A, "Alex Scout", RoleProfile::Scout),
            user(SCOUT_B, "Jamie Scout", RoleProfile::Scout),
            user(
                ASM,
                "Casey ASM",
                RoleProfile::Asm {
                    patrols: vec!["Bears".to_string(), "Wolves".to_string()],
                },
            ),
            user(
                COMMITTEE,
                "Riley Committee",
                RoleProfile::Committee {
                    position: Some("Treasurer".to_string()),
                },
            ),
            user(
                MBC,
                "Morgan MBC",
                RoleProfile::Mbc {
                    merit_badges: vec!["Camping".to_string(), "First Aid".to_string()],
                },
            ),
        ],
        current_user_id: Some(SCOUT_A.to_string()),
        ..PortalState::default()
    }
}

/// Builds an approved event relative to [`reference_today`].
pub fn event_at(
    id: &str,
    name: &str,
    from: i64,
    to: i64,
    close: i64,
    signup_limit: Option<u32>,
) -> Event {
    let today = reference_today();
    Event {
        id: id.to_string(),
        name: name.to_string(),
        from_date: offset_from(today, from),
        to_date: offset_from(today, to),
        close_date: offset_from(today, close),
        location: "Camp Pine".to_string(),
        scout_in_charge: "Alex Scout".to_string(),
        logistics: "Bring tents".to_string(),
        signup_limit,
        approved: true,
        created_by: ASM.to_string(),
    }
}

/// A populated state with one approved event (day +10 to +12, closing day +8).
pub fn state_with_event(signup_limit: Option<u32>) -> (PortalState, String) {
    let mut state = empty_state_with_users();
    let event = event_at("event-1", "Campout", 10, 12, 8, signup_limit);
    let id = event.id.clone();
    state.events.push(event);
    (state, id)
}
