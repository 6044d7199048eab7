//! Unified error type for the portal.
//!
//! Business-rule violations (closed registration window, full event, missing
//! role) are ordinary variants so callers can tell them apart from I/O and
//! configuration failures with [`Error::is_blocking_notice`].

use chrono::NaiveDate;
use thiserror::Error;

/// All errors produced by the portal.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Filesystem failure while reading or writing the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The state document could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `portal.toml` is not valid TOML or has the wrong shape
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// No event with the given id exists
    #[error("Event not found: {id}")]
    EventNotFound {
        /// Requested event id
        id: String,
    },

    /// No user with the given id exists
    #[error("User not found: {id}")]
    UserNotFound {
        /// Requested user id
        id: String,
    },

    /// The store has no users (it was never seeded)
    #[error("No users available")]
    NoUsers,

    /// The event already holds `limit` active registrations
    #[error("Signup limit reached for this event.")]
    SignupLimitReached {
        /// Event name
        event: String,
        /// Configured signup limit
        limit: u32,
    },

    /// The registration window for the event has closed
    #[error("Registration for {event} closed on {close_date}.")]
    RegistrationClosed {
        /// Event name
        event: String,
        /// Last day registration could be changed
        close_date: NaiveDate,
    },

    /// The acting user's role may not perform this action
    #[error("Role {role} may not {action}.")]
    NotAuthorized {
        /// Role of the acting user
        role: String,
        /// Action that was attempted
        action: &'static str,
    },
}

impl Error {
    /// Returns true for business-rule violations that are shown to the user as a
    /// blocking notice rather than treated as failures.
    #[must_use]
    pub const fn is_blocking_notice(&self) -> bool {
        matches!(
            self,
            Self::SignupLimitReached { .. }
                | Self::RegistrationClosed { .. }
                | Self::NotAuthorized { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
