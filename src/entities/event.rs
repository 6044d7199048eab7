//! Event entity - Campouts, service projects and meetings.
//!
//! Events are submitted unapproved and only reach the dashboard once an adult
//! leader approves them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A troop event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque unique identifier
    pub id: String,
    /// Event name
    pub name: String,
    /// First day of the event
    pub from_date: NaiveDate,
    /// Last day of the event
    pub to_date: NaiveDate,
    /// Last day registration may change
    pub close_date: NaiveDate,
    /// Where the event takes place
    #[serde(default)]
    pub location: String,
    /// Scout responsible for the event
    #[serde(default)]
    pub scout_in_charge: String,
    /// Gear and logistics notes
    #[serde(default)]
    pub logistics: String,
    /// Maximum number of active registrations, unlimited when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::lenient::optional_limit"
    )]
    pub signup_limit: Option<u32>,
    /// Whether an adult leader approved the event
    #[serde(default)]
    pub approved: bool,
    /// User id of the submitter
    pub created_by: String,
}
