//! The portal controller.
//!
//! [`Portal`] owns the in-memory state and the store it came from. Every action
//! follows the same cycle: apply the operation from [`crate::core`], persist the
//! full state, and re-render the current route. Business-rule violations are
//! turned into [`Notice::Blocked`] instead of errors so the caller can show them
//! next to the unchanged view.

use crate::{
    core::{
        admin, adults, advancement,
        event::{self, EventDraft},
        registration, users,
    },
    entities::{PortalState, SmcBorKind},
    errors::{Error, Result},
    store::JsonStore,
    views::{self, HistoryKind, HistoryView, Route, SidebarView, View},
};
use chrono::{NaiveDate, Utc};
use std::fmt;
use tracing::{debug, info};

/// A message shown alongside the re-rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Confirmation of a completed action
    Info(String),
    /// Advisory; the action still happened
    Warning(String),
    /// A business rule stopped the action; nothing changed
    Blocked(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info(msg) => write!(f, "{msg}"),
            Self::Warning(msg) => write!(f, "[warning] {msg}"),
            Self::Blocked(msg) => write!(f, "[blocked] {msg}"),
        }
    }
}

/// Result of an action: notices to show and the refreshed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Messages in the order they were raised
    pub notices: Vec<Notice>,
    /// The current route rendered after the action
    pub view: View,
}

impl Outcome {
    /// Whether a business rule stopped the action.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.notices.iter().any(|n| matches!(n, Notice::Blocked(_)))
    }
}

/// Portal session bound to one store and one calendar day.
#[derive(Debug)]
pub struct Portal {
    store: JsonStore,
    state: PortalState,
    today: NaiveDate,
    route: Route,
}

impl Portal {
    /// Opens the store, seeding it on first run.
    ///
    /// # Errors
    /// Returns an error if a freshly seeded state cannot be saved.
    pub fn open(store: JsonStore, today: NaiveDate) -> Result<Self> {
        let state = store.load_seeded(today)?;
        Ok(Self::from_state(store, state, today))
    }

    /// Wraps an already loaded state.
    #[must_use]
    pub fn from_state(store: JsonStore, state: PortalState, today: NaiveDate) -> Self {
        Self {
            store,
            state,
            today,
            route: Route::default(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &PortalState {
        &self.state
    }

    /// Current route.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Switches to `route` and renders it.
    pub fn navigate(&mut self, route: Route) -> View {
        debug!(%route, "Navigating");
        self.route = route;
        self.render()
    }

    /// Renders the current route.
    #[must_use]
    pub fn render(&self) -> View {
        views::render(self.route, &self.state, self.today)
    }

    /// Renders the sidebar for the current user.
    #[must_use]
    pub fn sidebar(&self) -> SidebarView {
        SidebarView::build(&self.state, self.today)
    }

    /// Renders a troop-wide history listing.
    #[must_use]
    pub fn history(&self, kind: HistoryKind) -> HistoryView {
        HistoryView::build(&self.state, kind)
    }

    fn current_user_id(&self) -> Result<String> {
        users::require_current_user(&self.state).map(|u| u.id.clone())
    }

    /// Saves and re-renders after a successful mutation.
    fn commit(&mut self, notices: Vec<Notice>) -> Result<Outcome> {
        self.store.save(&self.state)?;
        Ok(Outcome {
            notices,
            view: self.render(),
        })
    }

    /// Converts a business-rule violation into a blocked outcome; other errors
    /// propagate.
    fn blocked(&self, err: Error) -> Result<Outcome> {
        if err.is_blocking_notice() {
            info!(reason = %err, "Action blocked");
            Ok(Outcome {
                notices: vec![Notice::Blocked(err.to_string())],
                view: self.render(),
            })
        } else {
            Err(err)
        }
    }

    /// Makes `user_id` the current user.
    ///
    /// # Errors
    /// Returns `UserNotFound` for an unknown id, or an I/O error on save.
    pub fn switch_user(&mut self, user_id: &str) -> Result<Outcome> {
        let name = users::switch_user(&mut self.state, user_id)?.name.clone();
        self.commit(vec![Notice::Info(format!("Now acting as {name}."))])
    }

    /// Registers the current user for `event_id`.
    ///
    /// # Errors
    /// Returns `EventNotFound`, `NoUsers`, or an I/O error on save.
    pub fn register(&mut self, event_id: &str) -> Result<Outcome> {
        let user_id = self.current_user_id()?;
        let registered =
            registration::register(&mut self.state, event_id, &user_id, self.today, Utc::now())
                .map(|_| ());
        match registered {
            Ok(()) => self.commit(vec![Notice::Info("Registered.".to_string())]),
            Err(e) => self.blocked(e),
        }
    }

    /// Cancels the current user's registration for `event_id`.
    ///
    /// # Errors
    /// Returns `EventNotFound`, `NoUsers`, or an I/O error on save.
    pub fn unregister(&mut self, event_id: &str) -> Result<Outcome> {
        let user_id = self.current_user_id()?;
        let cancelled =
            registration::unregister(&mut self.state, event_id, &user_id, self.today, Utc::now())
                .map(|r| r.is_some());
        match cancelled {
            Ok(true) => self.commit(vec![Notice::Info("Registration cancelled.".to_string())]),
            Ok(false) => self.commit(vec![Notice::Info("You were not registered.".to_string())]),
            Err(e) => self.blocked(e),
        }
    }

    /// Submits a new event for approval on behalf of the current user.
    ///
    /// # Errors
    /// Returns `NoUsers`, or an I/O error on save.
    pub fn submit_event(&mut self, draft: EventDraft) -> Result<Outcome> {
        let user_id = self.current_user_id()?;
        let submission = event::submit_event(&mut self.state, draft, &user_id);
        let mut notices: Vec<Notice> =
            submission.warning().into_iter().map(Notice::Warning).collect();
        notices.push(Notice::Info("Event submitted for approval.".to_string()));
        self.commit(notices)
    }

    /// Approves `event_id` as the current user.
    ///
    /// # Errors
    /// Returns `EventNotFound`, `NoUsers`, or an I/O error on save.
    pub fn approve(&mut self, event_id: &str) -> Result<Outcome> {
        self.set_approval(event_id, true)
    }

    /// Returns `event_id` to pending as the current user.
    ///
    /// # Errors
    /// Returns `EventNotFound`, `NoUsers`, or an I/O error on save.
    pub fn unapprove(&mut self, event_id: &str) -> Result<Outcome> {
        self.set_approval(event_id, false)
    }

    fn set_approval(&mut self, event_id: &str, approved: bool) -> Result<Outcome> {
        let user_id = self.current_user_id()?;
        let name = event::set_approval(&mut self.state, event_id, &user_id, approved)
            .map(|e| e.name.clone());
        match name {
            Ok(name) => {
                let msg = if approved {
                    format!("{name} approved.")
                } else {
                    format!("{name} returned to pending.")
                };
                self.commit(vec![Notice::Info(msg)])
            }
            Err(e) => self.blocked(e),
        }
    }

    /// Requests an SMC or BOR for the current user.
    ///
    /// # Errors
    /// Returns `NoUsers`, or an I/O error on save.
    pub fn submit_smc_bor(&mut self, kind: SmcBorKind, date: NaiveDate) -> Result<Outcome> {
        let user_id = self.current_user_id()?;
        advancement::submit_smc_bor(&mut self.state, &user_id, kind, date, Utc::now());
        self.commit(vec![Notice::Info(format!("{kind} request submitted."))])
    }

    /// Signs the current user up as a volunteer on `date`.
    ///
    /// # Errors
    /// Returns `NoUsers`, or an I/O error on save.
    pub fn add_adult_signup(&mut self, role: &str, date: NaiveDate) -> Result<Outcome> {
        let user_id = self.current_user_id()?;
        let role = adults::add_adult_signup(&mut self.state, &user_id, role, date)
            .role
            .clone();
        self.commit(vec![Notice::Info(format!("Signed up as {role}."))])
    }

    /// Overwrites the medical validity date of `user_id`.
    ///
    /// # Errors
    /// Returns `UserNotFound`, or an I/O error on save.
    pub fn set_medical(
        &mut self,
        user_id: &str,
        valid_until: Option<NaiveDate>,
    ) -> Result<Outcome> {
        let name = admin::set_medical_valid_until(&mut self.state, user_id, valid_until)?
            .name
            .clone();
        self.commit(vec![Notice::Info(format!("Medical record updated for {name}."))])
    }

    /// Records a training course status for `user_id`.
    ///
    /// # Errors
    /// Returns `UserNotFound`, or an I/O error on save.
    pub fn upsert_training(
        &mut self,
        user_id: &str,
        course: &str,
        status: &str,
    ) -> Result<Outcome> {
        let name = admin::upsert_training(&mut self.state, user_id, course, status)?
            .name
            .clone();
        if course.trim().is_empty() {
            return Ok(Outcome {
                notices: vec![Notice::Warning("No course given; nothing recorded.".to_string())],
                view: self.render(),
            });
        }
        self.commit(vec![Notice::Info(format!("Training updated for {name}."))])
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{dates::offset_from, registration::registration_status};
    use crate::test_utils::*;
    use tempfile::TempDir;

    fn portal(state: PortalState) -> (Portal, TempDir) {
        init_test_tracing();
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("portal.json"));
        (Portal::from_state(store, state, reference_today()), dir)
    }

    fn reload(portal: &Portal) -> PortalState {
        portal.store.load()
    }

    #[test]
    fn test_open_seeds_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("portal.json"));
        let portal = Portal::open(store.clone(), reference_today()).unwrap();

        assert_eq!(portal.state().users.len(), 5);
        assert_eq!(store.load(), *portal.state());
        assert!(matches!(portal.render(), View::Dashboard(_)));
    }

    #[test]
    fn test_register_persists_and_renders() {
        let (state, event_id) = state_with_event(None);
        let (mut portal, _dir) = portal(state);

        let outcome = portal.register(&event_id).unwrap();
        assert!(!outcome.is_blocked());
        let View::Dashboard(dashboard) = outcome.view else {
            panic!("expected dashboard");
        };
        assert!(dashboard.events[0].registered);

        let stored = reload(&portal);
        assert!(registration_status(&stored, &event_id, SCOUT_A).is_registered());
    }

    #[test]
    fn test_signup_limit_blocks_second_user() {
        let (state, event_id) = state_with_event(Some(1));
        let (mut portal, _dir) = portal(state);

        portal.register(&event_id).unwrap();
        portal.switch_user(SCOUT_B).unwrap();
        let outcome = portal.register(&event_id).unwrap();

        assert_eq!(
            outcome.notices,
            vec![Notice::Blocked("Signup limit reached for this event.".to_string())]
        );
        assert!(!registration_status(portal.state(), &event_id, SCOUT_B).is_registered());
        assert_eq!(reload(&portal).registrations.len(), 1);
    }

    #[test]
    fn test_closed_window_blocks_unregister() {
        let mut state = empty_state_with_users();
        state.events.push(event_at("closed", "Hike", 3, 3, -1, None));
        let (mut portal, _dir) = portal(state);

        let outcome = portal.unregister("closed").unwrap();
        assert!(outcome.is_blocked());
    }

    #[test]
    fn test_unknown_event_is_an_error() {
        let (mut portal, _dir) = portal(empty_state_with_users());
        assert!(matches!(
            portal.register("nope"),
            Err(Error::EventNotFound { .. })
        ));
    }

    #[test]
    fn test_submit_event_warns_on_conflict() {
        let (state, _) = state_with_event(None);
        let (mut portal, _dir) = portal(state);
        portal.navigate(Route::Events);

        let outcome = portal
            .submit_event(EventDraft {
                name: "Overlap".to_string(),
                from_date: offset_from(reference_today(), 11),
                ..EventDraft::default()
            })
            .unwrap();

        assert_eq!(
            outcome.notices,
            vec![
                Notice::Warning("Warning: Conflicts with Campout".to_string()),
                Notice::Info("Event submitted for approval.".to_string()),
            ]
        );
        assert!(matches!(outcome.view, View::Events(_)));
        assert_eq!(reload(&portal).events.len(), 2);
    }

    #[test]
    fn test_approval_requires_adult() {
        let (mut state, event_id) = state_with_event(None);
        state.events[0].approved = false;
        let (mut portal, _dir) = portal(state);

        assert!(portal.approve(&event_id).unwrap().is_blocked());
        assert!(!portal.state().events[0].approved);

        portal.switch_user(ASM).unwrap();
        let outcome = portal.approve(&event_id).unwrap();
        assert_eq!(outcome.notices, vec![Notice::Info("Campout approved.".to_string())]);
        assert!(reload(&portal).events[0].approved);
    }

    #[test]
    fn test_records_and_signups() {
        let (mut portal, _dir) = portal(empty_state_with_users());
        let today = reference_today();

        portal.submit_smc_bor(SmcBorKind::Smc, offset_from(today, 2)).unwrap();
        portal.switch_user(MBC).unwrap();
        portal.add_adult_signup("", offset_from(today, 4)).unwrap();
        portal.set_medical(SCOUT_A, Some(offset_from(today, 30))).unwrap();
        portal.upsert_training(SCOUT_A, "Swim Test", "").unwrap();
        let blank = portal.upsert_training(SCOUT_A, " ", "Done").unwrap();
        assert!(matches!(blank.notices[0], Notice::Warning(_)));

        let stored = reload(&portal);
        assert_eq!(stored.smc_bor.len(), 1);
        assert_eq!(stored.adult_leader_signups[0].role, "Volunteer");
        let scout = stored.user(SCOUT_A).unwrap();
        assert_eq!(scout.training.len(), 1);
        assert_eq!(scout.training["Swim Test"], "Complete");
        assert_eq!(stored.current_user_id.as_deref(), Some(MBC));
    }

    #[test]
    fn test_history_and_sidebar() {
        let (mut portal, _dir) = portal(empty_state_with_users());
        portal.submit_smc_bor(SmcBorKind::Bor, date(2026, 1, 1)).unwrap();

        assert_eq!(portal.history(HistoryKind::SmcBor).lines.len(), 1);
        assert_eq!(portal.sidebar().medical_line(), "Invalid (Not set)");
    }
}
