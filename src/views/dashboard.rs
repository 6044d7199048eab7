//! Dashboard - upcoming approved events with the current user's registration
//! status, plus their SMC/BOR entries and the troop's adult signups.

use super::{adults, smc_bor, write_list, write_section, write_title};
use crate::{
    core::{adults as adult_ops, advancement, dates::fmt_date, event, registration, users},
    entities::PortalState,
};
use chrono::NaiveDate;
use std::fmt;

/// What the current user can do about an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Not registered and the window is open
    Register,
    /// Registered and the window is open
    Unregister,
    /// The close date has passed
    Closed,
}

impl RegistrationAction {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Unregister => "Un-register",
            Self::Closed => "Closed",
        }
    }
}

/// One event row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow {
    /// Event id, used by register/unregister
    pub event_id: String,
    /// Event name
    pub name: String,
    /// First day
    pub from_date: NaiveDate,
    /// Last day
    pub to_date: NaiveDate,
    /// Location
    pub location: String,
    /// Scout in charge
    pub scout_in_charge: String,
    /// Close date
    pub close_date: NaiveDate,
    /// Whether the current user holds an active registration
    pub registered: bool,
    /// Registration status text
    pub status: &'static str,
    /// Available action
    pub action: RegistrationAction,
}

/// Projection of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// Name of the user the view was built for
    pub user_name: String,
    /// Approved upcoming events, earliest first
    pub events: Vec<DashboardRow>,
    /// Current user's upcoming SMC/BOR entries
    pub smc_bor: Vec<String>,
    /// Upcoming adult signups across the troop
    pub adult_signups: Vec<String>,
}

impl DashboardView {
    /// Builds the dashboard for the current user.
    #[must_use]
    pub fn build(state: &PortalState, today: NaiveDate) -> Self {
        let (user_id, user_name) = users::current_user(state)
            .map_or(("", users::UNKNOWN_USER), |u| (u.id.as_str(), u.name.as_str()));

        let events = event::dashboard_events(state, today)
            .into_iter()
            .map(|e| {
                let status = registration::registration_status(state, &e.id, user_id);
                let registered = status.is_registered();
                let action = match (registration::can_modify(e, today), registered) {
                    (false, _) => RegistrationAction::Closed,
                    (true, true) => RegistrationAction::Unregister,
                    (true, false) => RegistrationAction::Register,
                };
                DashboardRow {
                    event_id: e.id.clone(),
                    name: e.name.clone(),
                    from_date: e.from_date,
                    to_date: e.to_date,
                    location: e.location.clone(),
                    scout_in_charge: e.scout_in_charge.clone(),
                    close_date: e.close_date,
                    registered,
                    status: status.label(),
                    action,
                }
            })
            .collect();

        Self {
            user_name: user_name.to_string(),
            events,
            smc_bor: advancement::smc_bor_for_user(state, user_id, today, true)
                .into_iter()
                .map(smc_bor::entry_line)
                .collect(),
            adult_signups: adult_ops::adult_signups(state, today, true)
                .into_iter()
                .map(|s| adults::signup_line(state, s))
                .collect(),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "Scout Upcoming Events")?;
        if self.events.is_empty() {
            writeln!(f, "No upcoming events")?;
        }
        for row in &self.events {
            writeln!(
                f,
                "{} | {} -> {} | {} | SIC: {} | closes {} | {} [{}] ({})",
                row.name,
                fmt_date(Some(row.from_date)),
                fmt_date(Some(row.to_date)),
                row.location,
                row.scout_in_charge,
                fmt_date(Some(row.close_date)),
                row.status,
                row.action.label(),
                row.event_id,
            )?;
        }

        write_section(f, "Upcoming SMC/BOR (Your signups)")?;
        write_list(f, &self.smc_bor, "No entries")?;

        write_section(f, "Parents / Adult Leaders Signup")?;
        write_list(f, &self.adult_signups, "No signups")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::SmcBorKind;
    use crate::test_utils::*;

    #[test]
    fn test_rows_reflect_status_and_window() {
        let (mut state, event_id) = state_with_event(None);
        state
            .events
            .push(event_at("event-2", "Closed Hike", 3, 3, -1, None));
        let today = reference_today();
        registration::register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();

        let view = DashboardView::build(&state, today);
        assert_eq!(view.user_name, "Alex Scout");
        assert_eq!(view.events.len(), 2);
        // Ascending by start date
        assert_eq!(view.events[0].name, "Closed Hike");
        assert_eq!(view.events[0].action, RegistrationAction::Closed);
        assert!(view.events[1].registered);
        assert_eq!(view.events[1].status, "Registered");
        assert_eq!(view.events[1].action, RegistrationAction::Unregister);
        assert!(view.to_string().contains("| Registered [Un-register]"));
    }

    #[test]
    fn test_rows_follow_current_user() {
        let (mut state, event_id) = state_with_event(None);
        let today = reference_today();
        registration::register(&mut state, &event_id, SCOUT_A, today, reference_now()).unwrap();
        state.current_user_id = Some(SCOUT_B.to_string());

        let view = DashboardView::build(&state, today);
        assert!(!view.events[0].registered);
        assert_eq!(view.events[0].status, "Not registered");
        assert_eq!(view.events[0].action, RegistrationAction::Register);
    }

    #[test]
    fn test_panels_and_text() {
        let (mut state, _) = state_with_event(None);
        let today = reference_today();
        advancement::submit_smc_bor(&mut state, SCOUT_A, SmcBorKind::Smc, today, reference_now());
        advancement::submit_smc_bor(&mut state, SCOUT_B, SmcBorKind::Bor, today, reference_now());
        adult_ops::add_adult_signup(&mut state, ASM, "Driver", today);

        let view = DashboardView::build(&state, today);
        assert_eq!(view.smc_bor, vec!["SMC on 2026-04-15 — pending".to_string()]);
        assert_eq!(
            view.adult_signups,
            vec!["2026-04-15 — Casey ASM (Driver)".to_string()]
        );

        let text = view.to_string();
        assert!(text.starts_with("Scout Upcoming Events\n"));
        assert!(text.contains("Campout | 2026-04-25 -> 2026-04-27"));
        assert!(text.contains("[Register] (event-1)"));
    }

    #[test]
    fn test_empty_dashboard() {
        let state = empty_state_with_users();
        let text = DashboardView::build(&state, reference_today()).to_string();
        assert!(text.contains("No upcoming events"));
        assert!(text.contains("No entries"));
        assert!(text.contains("No signups"));
    }
}
