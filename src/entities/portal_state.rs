//! Portal state - The single document holding every record.
//!
//! The whole application state is persisted as one JSON object. Missing
//! collections deserialize as empty so partially written or older documents
//! still load.

use super::{AdultSignup, Event, Registration, SmcBorRequest, User};
use serde::{Deserialize, Serialize};

/// Entire application state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalState {
    /// All users, in creation order
    #[serde(default)]
    pub users: Vec<User>,
    /// All events, in submission order
    #[serde(default)]
    pub events: Vec<Event>,
    /// Registration history, in insertion order
    #[serde(default)]
    pub registrations: Vec<Registration>,
    /// SMC/BOR requests
    #[serde(default, rename = "smcbor")]
    pub smc_bor: Vec<SmcBorRequest>,
    /// Parent and adult leader signups
    #[serde(default)]
    pub adult_leader_signups: Vec<AdultSignup>,
    /// Selected user, if one has been chosen
    #[serde(default)]
    pub current_user_id: Option<String>,
}

impl PortalState {
    /// Looks up a user by id.
    #[must_use]
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Looks up a user by id for in-place edits.
    pub fn user_mut(&mut self, user_id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == user_id)
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// Looks up an event by id for in-place edits.
    pub fn event_mut(&mut self, event_id: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == event_id)
    }
}
