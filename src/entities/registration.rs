//! Registration entity - One sign-up (or cancelled sign-up) for an event.
//!
//! Records are never removed. Unregistering flips `cancelled` on the latest
//! record for the (event, user) pair and registering again appends a new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registration record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Opaque unique identifier
    pub id: String,
    /// Event registered for
    pub event_id: String,
    /// Registered user
    pub user_id: String,
    /// Submission time
    pub date: DateTime<Utc>,
    /// Whether this record was later cancelled
    #[serde(default)]
    pub cancelled: bool,
    /// When the record was cancelled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_date: Option<DateTime<Utc>>,
}
