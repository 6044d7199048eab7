//! Events screen - upcoming and historical events, plus the approval queue for
//! adult leaders.

use super::{write_section, write_title};
use crate::{
    core::{dates::fmt_date, event, users},
    entities::{Event, PortalState},
};
use chrono::NaiveDate;
use std::fmt;

/// One event table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Event id
    pub event_id: String,
    /// Name
    pub name: String,
    /// First day
    pub from_date: NaiveDate,
    /// Last day
    pub to_date: NaiveDate,
    /// Location
    pub location: String,
    /// Close date
    pub close_date: NaiveDate,
    /// Scout in charge
    pub scout_in_charge: String,
    /// Approval flag
    pub approved: bool,
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            event_id: e.id.clone(),
            name: e.name.clone(),
            from_date: e.from_date,
            to_date: e.to_date,
            location: e.location.clone(),
            close_date: e.close_date,
            scout_in_charge: e.scout_in_charge.clone(),
            approved: e.approved,
        }
    }
}

/// An event waiting for approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    /// Event id, used by approve/unapprove
    pub event_id: String,
    /// "Name (from → to)"
    pub summary: String,
}

/// Approval queue, visible only to adult leaders.
#[must_use]
pub fn pending_rows(state: &PortalState) -> Option<Vec<PendingRow>> {
    let can_approve = users::current_user(state).is_some_and(|u| u.role().is_adult_leader());
    can_approve.then(|| {
        event::pending_events(state)
            .into_iter()
            .map(|e| PendingRow {
                event_id: e.id.clone(),
                summary: format!(
                    "{} ({} → {})",
                    e.name,
                    fmt_date(Some(e.from_date)),
                    fmt_date(Some(e.to_date))
                ),
            })
            .collect()
    })
}

pub(crate) fn write_pending(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    pending: Option<&[PendingRow]>,
) -> fmt::Result {
    let Some(pending) = pending else {
        return Ok(());
    };
    write_section(f, title)?;
    if pending.is_empty() {
        return writeln!(f, "No pending events");
    }
    for row in pending {
        writeln!(f, "- {} [Keep Pending | Approve] ({})", row.summary, row.event_id)?;
    }
    Ok(())
}

/// Projection of the events screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsView {
    /// Events whose last day has not passed, earliest start first
    pub upcoming: Vec<EventRow>,
    /// Past events, most recent end first
    pub historical: Vec<EventRow>,
    /// Approval queue, `None` when the current user may not approve
    pub pending: Option<Vec<PendingRow>>,
}

impl EventsView {
    /// Builds the screen.
    #[must_use]
    pub fn build(state: &PortalState, today: NaiveDate) -> Self {
        Self {
            upcoming: event::upcoming_events(state, today)
                .into_iter()
                .map(EventRow::from)
                .collect(),
            historical: event::historical_events(state, today)
                .into_iter()
                .map(EventRow::from)
                .collect(),
            pending: pending_rows(state),
        }
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, rows: &[EventRow]) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "No events");
    }
    for row in rows {
        writeln!(
            f,
            "{} | {} -> {} | {} | closes {} | SIC: {} | approved: {} ({})",
            row.name,
            fmt_date(Some(row.from_date)),
            fmt_date(Some(row.to_date)),
            row.location,
            fmt_date(Some(row.close_date)),
            row.scout_in_charge,
            if row.approved { "Yes" } else { "No" },
            row.event_id
        )?;
    }
    Ok(())
}

impl fmt::Display for EventsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "Events")?;
        writeln!(f, "Create with: submit-event (sends for SM/Admin approval)")?;
        write_section(f, "Upcoming Events")?;
        writeln!(f, "Approved events appear on Dashboard")?;
        write_table(f, &self.upcoming)?;
        write_section(f, "Historical Events")?;
        write_table(f, &self.historical)?;
        write_pending(f, "Pending Approvals", self.pending.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn populated() -> PortalState {
        let mut state = empty_state_with_users();
        state.events.push(event_at("late", "Late", 30, 32, 25, None));
        state.events.push(event_at("past", "Past", -10, -8, -12, None));
        let mut pending = event_at("pending", "Pending", 5, 5, 4, None);
        pending.approved = false;
        state.events.push(pending);
        state
    }

    #[test]
    fn test_listing_split() {
        let view = EventsView::build(&populated(), reference_today());
        let upcoming: Vec<&str> = view.upcoming.iter().map(|r| r.event_id.as_str()).collect();
        assert_eq!(upcoming, vec!["pending", "late"]);
        assert_eq!(view.historical.len(), 1);
        assert_eq!(view.historical[0].event_id, "past");
    }

    #[test]
    fn test_pending_hidden_from_scouts() {
        let mut state = populated();
        let view = EventsView::build(&state, reference_today());
        assert!(view.pending.is_none());
        assert!(!view.to_string().contains("Pending Approvals"));

        state.current_user_id = Some(COMMITTEE.to_string());
        let view = EventsView::build(&state, reference_today());
        let pending = view.pending.clone().unwrap_or_default();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].summary, "Pending (2026-04-20 → 2026-04-20)");
        assert!(view.to_string().contains("Pending Approvals"));
    }
}
