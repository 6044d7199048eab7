//! SMC/BOR screen - the current user's upcoming requests.

use super::{write_list, write_section, write_title};
use crate::{
    core::{advancement, dates::fmt_date, users},
    entities::{PortalState, SmcBorRequest},
};
use chrono::NaiveDate;
use std::fmt;

/// "SMC on 2026-05-01 — pending"
#[must_use]
pub fn entry_line(request: &SmcBorRequest) -> String {
    format!(
        "{} on {} — {}",
        request.kind,
        fmt_date(Some(request.date)),
        request.status
    )
}

/// Projection of the SMC/BOR screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmcBorView {
    /// Upcoming requests of the current user, ascending by date
    pub upcoming: Vec<String>,
}

impl SmcBorView {
    /// Builds the screen for the current user.
    #[must_use]
    pub fn build(state: &PortalState, today: NaiveDate) -> Self {
        let user_id = users::current_user(state).map_or("", |u| u.id.as_str());
        Self {
            upcoming: advancement::smc_bor_for_user(state, user_id, today, true)
                .into_iter()
                .map(entry_line)
                .collect(),
        }
    }
}

impl fmt::Display for SmcBorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "SMC / BOR")?;
        writeln!(f, "Submit with: smc-bor <SMC|BOR> <date>")?;
        write_section(f, "Upcoming")?;
        write_list(f, &self.upcoming, "No entries")
    }
}
