//! Event business logic - Submission, conflict detection, approval and listings.
//!
//! New events always start unapproved. Date overlaps with existing events are
//! reported back to the submitter as a warning but never block submission.
//! Only adult leaders may approve or unapprove an event.

use crate::{
    core::{dates, ids},
    entities::{Event, PortalState},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Name given to events submitted without one.
pub const UNTITLED: &str = "Untitled";

/// Fields entered on the "create event" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Event name; blank becomes [`UNTITLED`]
    pub name: String,
    /// First day
    pub from_date: NaiveDate,
    /// Last day; defaults to `from_date`
    pub to_date: Option<NaiveDate>,
    /// Registration close date; defaults to `from_date`
    pub close_date: Option<NaiveDate>,
    /// Location
    pub location: String,
    /// Scout in charge
    pub scout_in_charge: String,
    /// Logistics notes
    pub logistics: String,
    /// Signup limit; zero or absent means unlimited
    pub signup_limit: Option<u32>,
}

/// Outcome of [`submit_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSubmission {
    /// Id of the newly created event
    pub event_id: String,
    /// Names of existing events whose dates overlap the new one
    pub conflicts: Vec<String>,
}

impl EventSubmission {
    /// Advisory text shown to the submitter when conflicts exist.
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        if self.conflicts.is_empty() {
            None
        } else {
            Some(format!(
                "Warning: Conflicts with {}",
                self.conflicts.join(", ")
            ))
        }
    }
}

/// Existing events (approved or not) whose date range overlaps `from..=to`.
#[must_use]
pub fn find_conflicts(
    state: &PortalState,
    from_date: NaiveDate,
    to_date: Option<NaiveDate>,
) -> Vec<&Event> {
    state
        .events
        .iter()
        .filter(|e| dates::overlaps(e.from_date, Some(e.to_date), from_date, to_date))
        .collect()
}

/// Creates an unapproved event from `draft` on behalf of `created_by`.
///
/// Conflicts are computed against the events that existed before this one and
/// returned with the submission; the event is stored either way.
pub fn submit_event(
    state: &mut PortalState,
    draft: EventDraft,
    created_by: &str,
) -> EventSubmission {
    let name = match draft.name.trim() {
        "" => UNTITLED.to_string(),
        trimmed => trimmed.to_string(),
    };
    let to_date = draft.to_date.unwrap_or(draft.from_date);
    let close_date = draft.close_date.unwrap_or(draft.from_date);

    let conflicts: Vec<String> = find_conflicts(state, draft.from_date, Some(to_date))
        .into_iter()
        .map(|e| e.name.clone())
        .collect();
    if !conflicts.is_empty() {
        warn!(event = %name, ?conflicts, "Submitted event overlaps existing events");
    }

    let event = Event {
        id: ids::generate_id(),
        name,
        from_date: draft.from_date,
        to_date,
        close_date,
        location: draft.location.trim().to_string(),
        scout_in_charge: draft.scout_in_charge.trim().to_string(),
        logistics: draft.logistics.trim().to_string(),
        signup_limit: draft.signup_limit.filter(|&l| l > 0),
        approved: false,
        created_by: created_by.to_string(),
    };
    info!(event_id = %event.id, name = %event.name, "Event submitted for approval");
    let event_id = event.id.clone();
    state.events.push(event);

    EventSubmission {
        event_id,
        conflicts,
    }
}

/// Sets the approval flag of `event_id`, acting as `actor_id`.
///
/// # Errors
/// * `UserNotFound` - the acting user does not exist
/// * `NotAuthorized` - the acting user is not an adult leader
/// * `EventNotFound` - no such event
pub fn set_approval<'a>(
    state: &'a mut PortalState,
    event_id: &str,
    actor_id: &str,
    approved: bool,
) -> Result<&'a Event> {
    let actor = state.user(actor_id).ok_or_else(|| Error::UserNotFound {
        id: actor_id.to_string(),
    })?;
    if !actor.role().is_adult_leader() {
        return Err(Error::NotAuthorized {
            role: actor.role().to_string(),
            action: if approved {
                "approve events"
            } else {
                "unapprove events"
            },
        });
    }

    let event = state.event_mut(event_id).ok_or_else(|| Error::EventNotFound {
        id: event_id.to_string(),
    })?;
    event.approved = approved;
    info!(event_id, approved, "Event approval changed");
    Ok(&*event)
}

/// Approves an event so it appears on the dashboard.
///
/// # Errors
/// See [`set_approval`].
pub fn approve<'a>(
    state: &'a mut PortalState,
    event_id: &str,
    actor_id: &str,
) -> Result<&'a Event> {
    set_approval(state, event_id, actor_id, true)
}

/// Returns an event to pending.
///
/// # Errors
/// See [`set_approval`].
pub fn unapprove<'a>(
    state: &'a mut PortalState,
    event_id: &str,
    actor_id: &str,
) -> Result<&'a Event> {
    set_approval(state, event_id, actor_id, false)
}

/// Events whose last day has not passed, earliest start first.
#[must_use]
pub fn upcoming_events(state: &PortalState, today: NaiveDate) -> Vec<&Event> {
    let mut events: Vec<&Event> = state
        .events
        .iter()
        .filter(|e| !dates::is_past(e.to_date, today))
        .collect();
    events.sort_by_key(|e| e.from_date);
    events
}

/// Events whose last day has passed, most recent end first.
#[must_use]
pub fn historical_events(state: &PortalState, today: NaiveDate) -> Vec<&Event> {
    let mut events: Vec<&Event> = state
        .events
        .iter()
        .filter(|e| dates::is_past(e.to_date, today))
        .collect();
    events.sort_by(|a, b| b.to_date.cmp(&a.to_date));
    events
}

/// Approved upcoming events, as shown on the dashboard.
#[must_use]
pub fn dashboard_events(state: &PortalState, today: NaiveDate) -> Vec<&Event> {
    upcoming_events(state, today)
        .into_iter()
        .filter(|e| e.approved)
        .collect()
}

/// Events waiting for approval, in submission order.
#[must_use]
pub fn pending_events(state: &PortalState) -> Vec<&Event> {
    state.events.iter().filter(|e| !e.approved).collect()
}
