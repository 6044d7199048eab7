//! Adult leader directory.

use super::write_title;
use crate::{
    core::{adults, dates::fmt_date, users},
    entities::{AdultSignup, PortalState},
};
use std::fmt;

/// "2026-05-01 — Casey ASM (Driver)"
#[must_use]
pub fn signup_line(state: &PortalState, signup: &AdultSignup) -> String {
    format!(
        "{} — {} ({})",
        fmt_date(Some(signup.date)),
        users::user_name(state, &signup.user_id),
        signup.role
    )
}

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRow {
    /// Name
    pub name: String,
    /// Email
    pub email: String,
    /// Role in upper case
    pub role: String,
    /// Role-specific summary
    pub details: String,
}

/// Projection of the adult leader directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdultsView {
    /// Adult leaders in creation order
    pub leaders: Vec<DirectoryRow>,
}

impl AdultsView {
    /// Builds the directory.
    #[must_use]
    pub fn build(state: &PortalState) -> Self {
        Self {
            leaders: adults::adult_leaders(state)
                .into_iter()
                .map(|u| DirectoryRow {
                    name: u.name.clone(),
                    email: u.email.clone(),
                    role: u.role().as_str().to_uppercase(),
                    details: u.profile.summary(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for AdultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "Adult Leaders Directory")?;
        if self.leaders.is_empty() {
            return writeln!(f, "No adult leaders yet");
        }
        for row in &self.leaders {
            writeln!(f, "{} | {} | {} | {}", row.name, row.email, row.role, row.details)?;
        }
        Ok(())
    }
}
