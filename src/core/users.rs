//! Current-user selection and user lookups.
//!
//! There is no login; the "current user" is simply the identity picked in the
//! portal. When no valid choice has been stored the first user is current.

use crate::{
    entities::{PortalState, User},
    errors::{Error, Result},
};
use tracing::info;

/// Placeholder shown for ids that match no user.
pub const UNKNOWN_USER: &str = "Unknown";

/// The selected user, falling back to the first user when nothing valid is
/// selected. `None` only for a store without users.
#[must_use]
pub fn current_user(state: &PortalState) -> Option<&User> {
    state
        .current_user_id
        .as_deref()
        .and_then(|id| state.user(id))
        .or_else(|| state.users.first())
}

/// Like [`current_user`] but an error when the store has no users.
///
/// # Errors
/// Returns `NoUsers` when the store is empty.
pub fn require_current_user(state: &PortalState) -> Result<&User> {
    current_user(state).ok_or(Error::NoUsers)
}

/// Makes `user_id` the current user.
///
/// # Errors
/// Returns `UserNotFound` for an unknown user; the selection is unchanged.
pub fn switch_user<'a>(state: &'a mut PortalState, user_id: &str) -> Result<&'a User> {
    if state.user(user_id).is_none() {
        return Err(Error::UserNotFound {
            id: user_id.to_string(),
        });
    }
    state.current_user_id = Some(user_id.to_string());
    info!(user_id, "Current user changed");
    require_current_user(state)
}

/// Display name for `user_id`, or [`UNKNOWN_USER`].
#[must_use]
pub fn user_name<'a>(state: &'a PortalState, user_id: &str) -> &'a str {
    state.user(user_id).map_or(UNKNOWN_USER, |u| u.name.as_str())
}
