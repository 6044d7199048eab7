//! Registration business logic - Signing users up for events.
//!
//! A user's status for an event is decided by the most recently inserted
//! registration record for that (event, user) pair. Older records stay in the
//! store as history and are never consulted. Registering and unregistering are
//! only possible until the event's close date has passed.

use crate::{
    core::{dates, ids},
    entities::{Event, PortalState, Registration},
    errors::{Error, Result},
};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

/// Registration status of one user for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus<'a> {
    /// No record, or the latest record was cancelled
    NotRegistered,
    /// The latest record is active
    Registered(&'a Registration),
}

impl RegistrationStatus<'_> {
    /// Whether the user currently holds an active registration.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotRegistered => "Not registered",
            Self::Registered(_) => "Registered",
        }
    }
}

/// Computes the registration status of `user_id` for `event_id` from the last
/// record for the pair.
#[must_use]
pub fn registration_status<'a>(
    state: &'a PortalState,
    event_id: &str,
    user_id: &str,
) -> RegistrationStatus<'a> {
    state
        .registrations
        .iter()
        .rev()
        .find(|r| r.event_id == event_id && r.user_id == user_id)
        .filter(|r| !r.cancelled)
        .map_or(RegistrationStatus::NotRegistered, RegistrationStatus::Registered)
}

/// Number of non-cancelled registration records for an event.
#[must_use]
pub fn active_count(state: &PortalState, event_id: &str) -> usize {
    state
        .registrations
        .iter()
        .filter(|r| r.event_id == event_id && !r.cancelled)
        .count()
}

/// Registration may change until the close date has passed.
#[must_use]
pub fn can_modify(event: &Event, today: NaiveDate) -> bool {
    !dates::is_past(event.close_date, today)
}

fn ensure_open(event: &Event, today: NaiveDate) -> Result<()> {
    if can_modify(event, today) {
        Ok(())
    } else {
        Err(Error::RegistrationClosed {
            event: event.name.clone(),
            close_date: event.close_date,
        })
    }
}

/// Registers `user_id` for `event_id`, appending a new active record.
///
/// # Errors
/// * `EventNotFound` - no such event
/// * `RegistrationClosed` - the close date has passed
/// * `SignupLimitReached` - the event already holds `signup_limit` active records
///
/// Nothing is changed when an error is returned.
pub fn register<'a>(
    state: &'a mut PortalState,
    event_id: &str,
    user_id: &str,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<&'a Registration> {
    let event = state.event(event_id).ok_or_else(|| Error::EventNotFound {
        id: event_id.to_string(),
    })?;
    ensure_open(event, today)?;

    if let Some(limit) = event.signup_limit.filter(|&l| l > 0) {
        let active = active_count(state, event_id);
        if active >= usize::try_from(limit).unwrap_or(usize::MAX) {
            return Err(Error::SignupLimitReached {
                event: event.name.clone(),
                limit,
            });
        }
    }

    info!(event_id, user_id, "Registering user for event");
    state.registrations.push(Registration {
        id: ids::generate_id(),
        event_id: event_id.to_string(),
        user_id: user_id.to_string(),
        date: now,
        cancelled: false,
        cancelled_date: None,
    });
    Ok(&state.registrations[state.registrations.len() - 1])
}

/// Cancels the authoritative registration of `user_id` for `event_id`.
///
/// Returns the cancelled record, or `None` when the user was not registered
/// (in which case nothing changes).
///
/// # Errors
/// * `EventNotFound` - no such event
/// * `RegistrationClosed` - the close date has passed
pub fn unregister<'a>(
    state: &'a mut PortalState,
    event_id: &str,
    user_id: &str,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Option<&'a Registration>> {
    let event = state.event(event_id).ok_or_else(|| Error::EventNotFound {
        id: event_id.to_string(),
    })?;
    ensure_open(event, today)?;

    let Some(index) = state
        .registrations
        .iter()
        .rposition(|r| r.event_id == event_id && r.user_id == user_id)
        .filter(|&i| !state.registrations[i].cancelled)
    else {
        return Ok(None);
    };

    info!(event_id, user_id, "Cancelling registration");
    let record = &mut state.registrations[index];
    record.cancelled = true;
    record.cancelled_date = Some(now);
    Ok(Some(&state.registrations[index]))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::dates::offset_from;
    use crate::test_utils::*;

    #[test]
    fn test_no_records_is_not_registered() {
        let (state, event_id) = state_with_event(Some(10));
        assert_eq!(
            registration_status(&state, &event_id, SCOUT_A),
            RegistrationStatus::NotRegistered
        );
    }

    #[test]
    fn test_register_then_unregister() {
        let (mut state, event_id) = state_with_event(Some(10));
        let today = reference_today();

        register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
        assert!(registration_status(&state, &event_id, SCOUT_A).is_registered());
        assert_eq!(active_count(&state, &event_id), 1);

        let cancelled = unregister(&mut state, &event_id, SCOUT_A, today, reference_now())
            .unwrap()
            .unwrap();
        assert!(cancelled.cancelled);
        assert_eq!(cancelled.cancelled_date, Some(reference_now()));
        assert!(!registration_status(&state, &event_id, SCOUT_A).is_registered());
        assert_eq!(active_count(&state, &event_id), 0);
    }

    #[test]
    fn test_status_follows_last_record() {
        let (mut state, event_id) = state_with_event(None);
        let today = reference_today();

        // register/unregister alternately; after each call the status must match
        // the cancelled flag of the last record for the pair
        for round in 0..6 {
            if round % 2 == 0 {
                register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
            } else {
                unregister(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
            }
            let last = state
                .registrations
                .iter()
                .rev()
                .find(|r| r.event_id == event_id && r.user_id == SCOUT_A)
                .unwrap();
            assert_eq!(
                registration_status(&state, &event_id, SCOUT_A).is_registered(),
                !last.cancelled
            );
        }
        // three registrations were appended as history
        assert_eq!(state.registrations.len(), 3);
    }

    #[test]
    fn test_earlier_active_record_is_ignored_once_latest_is_cancelled() {
        let (mut state, event_id) = state_with_event(None);
        let today = reference_today();

        // Double registration appends two active records
        register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
        register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
        assert_eq!(active_count(&state, &event_id), 2);

        unregister(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
        assert!(state.registrations[1].cancelled);
        assert!(!state.registrations[0].cancelled);
        assert_eq!(
            registration_status(&state, &event_id, SCOUT_A),
            RegistrationStatus::NotRegistered
        );
    }

    #[test]
    fn test_signup_limit_blocks_second_user() {
        let (mut state, event_id) = state_with_event(Some(1));
        let today = reference_today();

        register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
        assert_eq!(active_count(&state, &event_id), 1);

        let result = register(&mut state, &event_id, SCOUT_B, today, reference_now());
        assert!(matches!(
            result.unwrap_err(),
            Error::SignupLimitReached { limit: 1, .. }
        ));
        assert_eq!(active_count(&state, &event_id), 1);
        assert_eq!(state.registrations.len(), 1);
        assert!(!registration_status(&state, &event_id, SCOUT_B).is_registered());
    }

    #[test]
    fn test_cancelled_records_free_up_capacity() {
        let (mut state, event_id) = state_with_event(Some(1));
        let today = reference_today();

        register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
        unregister(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
        register(&mut state, &event_id, SCOUT_B, today, reference_now()).unwrap();
        assert_eq!(active_count(&state, &event_id), 1);
    }

    #[test]
    fn test_unregister_when_not_registered_is_noop() {
        let (mut state, event_id) = state_with_event(None);
        let before = state.clone();

        let result = unregister(
            &mut state,
            &event_id,
            SCOUT_A,
            reference_today(),
            reference_now(),
        )
        .unwrap();
        assert!(result.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_closed_window_blocks_unregister() {
        let (mut state, event_id) = state_with_event(None);
        let today = reference_today();
        register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();

        // A day after the close date
        let later = offset_from(state.event(&event_id).unwrap().close_date, 1);
        assert!(!can_modify(state.event(&event_id).unwrap(), later));

        let result = unregister(&mut state, &event_id, SCOUT_A, later, reference_now());
        assert!(matches!(result.unwrap_err(), Error::RegistrationClosed { .. }));
        assert!(registration_status(&state, &event_id, SCOUT_A).is_registered());
    }

    #[test]
    fn test_closed_window_blocks_register() {
        let (mut state, event_id) = state_with_event(None);
        let close = state.event(&event_id).unwrap().close_date;

        // Still open on the close date itself
        assert!(can_modify(state.event(&event_id).unwrap(), close));

        let result = register(
            &mut state,
            &event_id,
            SCOUT_A,
            offset_from(close, 1),
            reference_now(),
        );
        assert!(matches!(result.unwrap_err(), Error::RegistrationClosed { .. }));
        assert!(state.registrations.is_empty());
    }

    #[test]
    fn test_unknown_event() {
        let mut state = empty_state_with_users();
        let result = register(
            &mut state,
            "missing",
            SCOUT_A,
            reference_today(),
            reference_now(),
        );
        assert!(matches!(result.unwrap_err(), Error::EventNotFound { .. }));
    }
}
