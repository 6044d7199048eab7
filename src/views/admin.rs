//! Admin screen - medical and training records for every user, and the same
//! approval queue the events screen shows.

use super::{
    events::{PendingRow, pending_rows, write_pending},
    write_section, write_title,
};
use crate::{core::dates::fmt_date, entities::PortalState};
use std::fmt;

/// Records of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecordRow {
    /// User id, used by the medical and training commands
    pub user_id: String,
    /// "Name (role)"
    pub label: String,
    /// Medical validity date or "Not set"
    pub medical: String,
    /// "course: status" entries in recorded order
    pub training: Vec<String>,
}

/// Projection of the admin screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminView {
    /// Every user
    pub users: Vec<UserRecordRow>,
    /// Approval queue, `None` when the current user may not approve
    pub pending: Option<Vec<PendingRow>>,
}

impl AdminView {
    /// Builds the screen.
    #[must_use]
    pub fn build(state: &PortalState) -> Self {
        let users = state
            .users
            .iter()
            .map(|u| UserRecordRow {
                user_id: u.id.clone(),
                label: u.label(),
                medical: u
                    .medical_valid_until
                    .map_or_else(|| "Not set".to_string(), |d| fmt_date(Some(d))),
                training: u
                    .training
                    .iter()
                    .map(|(course, status)| format!("{course}: {status}"))
                    .collect(),
            })
            .collect();
        Self {
            users,
            pending: pending_rows(state),
        }
    }
}

impl fmt::Display for AdminView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "Admin Dashboard")?;
        write_section(f, "Medical & Training Records")?;
        for row in &self.users {
            let training = if row.training.is_empty() {
                "none".to_string()
            } else {
                row.training.join(", ")
            };
            writeln!(
                f,
                "{} | medical valid until: {} | training: {} ({})",
                row.label, row.medical, training, row.user_id
            )?;
        }
        write_pending(f, "Pending Event Approvals", self.pending.as_deref())
    }
}
