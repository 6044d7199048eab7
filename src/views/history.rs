//! Historic data - every SMC/BOR request or adult signup in the troop.

use super::{write_list, write_title};
use crate::{
    core::{adults, advancement, dates::fmt_date, users},
    entities::PortalState,
};
use chrono::NaiveDate;
use std::{fmt, str::FromStr};

/// Which history to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    /// All SMC/BOR requests
    SmcBor,
    /// All adult signups
    AdultSignups,
}

impl FromStr for HistoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smcbor" | "smc-bor" | "smc_bor" => Ok(Self::SmcBor),
            "adult" | "adults" | "adult-signups" => Ok(Self::AdultSignups),
            other => Err(format!("unknown history kind '{other}' (expected smcbor or adult)")),
        }
    }
}

/// Projection of a history listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    /// Listing shown
    pub kind: HistoryKind,
    /// Entries ascending by date
    pub lines: Vec<String>,
}

impl HistoryView {
    /// Builds the listing. History includes past and future entries alike.
    #[must_use]
    pub fn build(state: &PortalState, kind: HistoryKind) -> Self {
        let lines = match kind {
            HistoryKind::SmcBor => advancement::smc_bor_history(state)
                .into_iter()
                .map(|r| {
                    format!(
                        "{} on {} — {} ({})",
                        r.kind,
                        fmt_date(Some(r.date)),
                        users::user_name(state, &r.user_id),
                        r.status
                    )
                })
                .collect(),
            HistoryKind::AdultSignups => adults::adult_signups(state, NaiveDate::MIN, false)
                .into_iter()
                .map(|s| {
                    format!(
                        "{} — {} ({})",
                        users::user_name(state, &s.user_id),
                        s.role,
                        fmt_date(Some(s.date))
                    )
                })
                .collect(),
        };
        Self { kind, lines }
    }
}

impl fmt::Display for HistoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self.kind {
            HistoryKind::SmcBor => "Historic Data - SMC/BOR",
            HistoryKind::AdultSignups => "Historic Data - Adult Signups",
        };
        write_title(f, heading)?;
        write_list(f, &self.lines, "No entries")
    }
}
