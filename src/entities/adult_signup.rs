//! Adult signup entity - Parents and leaders volunteering for a date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label used when a signup is submitted without a role.
pub const DEFAULT_ROLE: &str = "Volunteer";

/// A volunteer signup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdultSignup {
    /// Opaque unique identifier
    pub id: String,
    /// Volunteering user
    pub user_id: String,
    /// Free-text role (e.g. "Driver")
    pub role: String,
    /// Date volunteered for
    pub date: NaiveDate,
}
