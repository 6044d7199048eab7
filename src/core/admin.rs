//! Admin business logic - Medical and training record maintenance.
//!
//! Edits overwrite the stored value directly; no history is kept.

use crate::{
    entities::{PortalState, User},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use tracing::info;

/// Status recorded when a training update omits one.
pub const DEFAULT_TRAINING_STATUS: &str = "Complete";

/// Medical record standing of a user on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicalStatus {
    /// Valid through the contained date
    Valid(NaiveDate),
    /// Expired on the contained date
    Expired(NaiveDate),
    /// Nothing on file
    NotSet,
}

impl MedicalStatus {
    /// Whether the record is currently valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// A medical record is valid through its `medical_valid_until` date inclusive
/// and expired from the following day.
///
/// The browser front end compares midnight of that date with the current
/// instant, so it already shows the record as expired during its last day.
#[must_use]
pub fn medical_status(user: &User, today: NaiveDate) -> MedicalStatus {
    match user.medical_valid_until {
        Some(until) if until >= today => MedicalStatus::Valid(until),
        Some(until) => MedicalStatus::Expired(until),
        None => MedicalStatus::NotSet,
    }
}

fn user_mut<'a>(state: &'a mut PortalState, user_id: &str) -> Result<&'a mut User> {
    state.user_mut(user_id).ok_or_else(|| Error::UserNotFound {
        id: user_id.to_string(),
    })
}

/// Overwrites the medical validity date of `user_id`; `None` clears it.
///
/// # Errors
/// Returns `UserNotFound` for an unknown user.
pub fn set_medical_valid_until<'a>(
    state: &'a mut PortalState,
    user_id: &str,
    valid_until: Option<NaiveDate>,
) -> Result<&'a User> {
    let user = user_mut(state, user_id)?;
    user.medical_valid_until = valid_until;
    info!(user_id, ?valid_until, "Medical record updated");
    Ok(&*user)
}

/// Sets the status of `course` for `user_id`, adding the course if new.
///
/// A blank course name changes nothing; a blank status is stored as
/// "Complete". Course names keep their first-recorded position.
///
/// # Errors
/// Returns `UserNotFound` for an unknown user.
pub fn upsert_training<'a>(
    state: &'a mut PortalState,
    user_id: &str,
    course: &str,
    status: &str,
) -> Result<&'a User> {
    let user = user_mut(state, user_id)?;
    let course = course.trim();
    if course.is_empty() {
        return Ok(&*user);
    }
    let status = match status.trim() {
        "" => DEFAULT_TRAINING_STATUS,
        trimmed => trimmed,
    };
    info!(user_id, course, status, "Training record updated");
    user.training.insert(course.to_string(), status.to_string());
    Ok(&*user)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::dates::offset_from;
    use crate::test_utils::*;

    #[test]
    fn test_medical_last_write_wins() {
        let mut state = empty_state_with_users();
        let today = reference_today();

        set_medical_valid_until(&mut state, SCOUT_A, Some(offset_from(today, 10))).unwrap();
        let user =
            set_medical_valid_until(&mut state, SCOUT_A, Some(offset_from(today, -1))).unwrap();
        assert_eq!(
            medical_status(user, today),
            MedicalStatus::Expired(offset_from(today, -1))
        );

        let user = set_medical_valid_until(&mut state, SCOUT_A, None).unwrap();
        assert_eq!(medical_status(user, today), MedicalStatus::NotSet);
    }

    #[test]
    fn test_medical_valid_through_last_day() {
        let mut state = empty_state_with_users();
        let today = reference_today();
        let user = set_medical_valid_until(&mut state, SCOUT_B, Some(today)).unwrap();
        assert_eq!(medical_status(user, today), MedicalStatus::Valid(today));
        assert_eq!(
            medical_status(user, offset_from(today, 1)),
            MedicalStatus::Expired(today)
        );
    }

    #[test]
    fn test_upsert_training_keeps_order() {
        let mut state = empty_state_with_users();
        upsert_training(&mut state, ASM, "YPT", "Pending").unwrap();
        upsert_training(&mut state, ASM, "IOLS", "").unwrap();
        let user = upsert_training(&mut state, ASM, " YPT ", "Complete").unwrap();

        let entries: Vec<(&str, &str)> = user
            .training
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(entries, vec![("YPT", "Complete"), ("IOLS", "Complete")]);
    }

    #[test]
    fn test_blank_course_is_ignored() {
        let mut state = empty_state_with_users();
        let user = upsert_training(&mut state, MBC, "  ", "Complete").unwrap();
        assert!(user.training.is_empty());
    }

    #[test]
    fn test_unknown_user() {
        let mut state = empty_state_with_users();
        let result = upsert_training(&mut state, "ghost", "YPT", "Complete");
        assert!(matches!(result.unwrap_err(), Error::UserNotFound { .. }));
    }
}
