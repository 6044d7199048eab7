//! Sidebar - calendar placeholder and the current user's medical and training
//! standing.

use super::{write_list, write_section};
use crate::{
    core::{
        admin::{self, MedicalStatus},
        dates::fmt_date,
        users,
    },
    entities::PortalState,
};
use chrono::NaiveDate;
use std::fmt;

/// Projection of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    /// Medical standing of the current user
    pub medical: MedicalStatus,
    /// "course: status" entries of the current user
    pub training: Vec<String>,
}

impl SidebarView {
    /// Builds the sidebar for the current user.
    #[must_use]
    pub fn build(state: &PortalState, today: NaiveDate) -> Self {
        users::current_user(state).map_or(
            Self {
                medical: MedicalStatus::NotSet,
                training: Vec::new(),
            },
            |user| Self {
                medical: admin::medical_status(user, today),
                training: user
                    .training
                    .iter()
                    .map(|(course, status)| format!("{course}: {status}"))
                    .collect(),
            },
        )
    }

    /// "Valid up to D" or "Invalid (was D)" / "Invalid (Not set)".
    #[must_use]
    pub fn medical_line(&self) -> String {
        match self.medical {
            MedicalStatus::Valid(until) => format!("Valid up to {}", fmt_date(Some(until))),
            MedicalStatus::Expired(until) => format!("Invalid (was {})", fmt_date(Some(until))),
            MedicalStatus::NotSet => "Invalid (Not set)".to_string(),
        }
    }
}

impl fmt::Display for SidebarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Calendar")?;
        writeln!(f, "Calendar view (coming soon)")?;
        write_section(f, "Medical Form")?;
        writeln!(f, "{}", self.medical_line())?;
        write_section(f, "Training")?;
        write_list(f, &self.training, "No training records")
    }
}
