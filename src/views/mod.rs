//! View layer - read-only projections of the portal state.
//!
//! Each screen is a plain data structure built from `(state, today)`. The
//! structures implement `Display` so the command line can print them; any
//! other front end can consume the fields directly.

pub mod admin;
pub mod adults;
pub mod dashboard;
pub mod events;
pub mod history;
pub mod resources;
pub mod sidebar;
pub mod smc_bor;

use crate::entities::PortalState;
use chrono::NaiveDate;
use std::fmt;

pub use admin::AdminView;
pub use adults::AdultsView;
pub use dashboard::DashboardView;
pub use events::EventsView;
pub use history::{HistoryKind, HistoryView};
pub use resources::ResourcesView;
pub use sidebar::SidebarView;
pub use smc_bor::SmcBorView;

/// The six navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Upcoming approved events and the user's signups
    #[default]
    Dashboard,
    /// Event creation, listings and approvals
    Events,
    /// SMC/BOR requests
    SmcBor,
    /// Adult leader directory
    Adults,
    /// Troop resources
    Resources,
    /// Record maintenance and approvals
    Admin,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Events,
        Self::SmcBor,
        Self::Adults,
        Self::Resources,
        Self::Admin,
    ];

    /// Maps a navigation token (`admin`, `/admin` or `#/admin`) to a route.
    /// Unknown tokens fall back to the dashboard.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        let path = token.trim().trim_start_matches('#').trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|r| r.token().trim_start_matches('/') == path)
            .unwrap_or_default()
    }

    /// Canonical navigation token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Events => "/events",
            Self::SmcBor => "/smc-bor",
            Self::Adults => "/adults",
            Self::Resources => "/resources",
            Self::Admin => "/admin",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A rendered screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// See [`DashboardView`]
    Dashboard(DashboardView),
    /// See [`EventsView`]
    Events(EventsView),
    /// See [`SmcBorView`]
    SmcBor(SmcBorView),
    /// See [`AdultsView`]
    Adults(AdultsView),
    /// See [`ResourcesView`]
    Resources(ResourcesView),
    /// See [`AdminView`]
    Admin(AdminView),
}

/// Builds the projection for `route` from the current state.
#[must_use]
pub fn render(route: Route, state: &PortalState, today: NaiveDate) -> View {
    match route {
        Route::Dashboard => View::Dashboard(DashboardView::build(state, today)),
        Route::Events => View::Events(EventsView::build(state, today)),
        Route::SmcBor => View::SmcBor(SmcBorView::build(state, today)),
        Route::Adults => View::Adults(AdultsView::build(state)),
        Route::Resources => View::Resources(ResourcesView::build()),
        Route::Admin => View::Admin(AdminView::build(state)),
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard(v) => write!(f, "{v}"),
            Self::Events(v) => write!(f, "{v}"),
            Self::SmcBor(v) => write!(f, "{v}"),
            Self::Adults(v) => write!(f, "{v}"),
            Self::Resources(v) => write!(f, "{v}"),
            Self::Admin(v) => write!(f, "{v}"),
        }
    }
}

/// Writes a heading underlined with `=`.
pub(crate) fn write_title(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

/// Writes a section heading underlined with `-`.
pub(crate) fn write_section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.chars().count()))
}

/// Writes a bulleted list, or `empty` when there are no lines.
pub(crate) fn write_list(f: &mut fmt::Formatter<'_>, lines: &[String], empty: &str) -> fmt::Result {
    if lines.is_empty() {
        return writeln!(f, "{empty}");
    }
    for line in lines {
        writeln!(f, "- {line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_route_tokens() {
        assert_eq!(Route::from_token("#/events"), Route::Events);
        assert_eq!(Route::from_token("/smc-bor"), Route::SmcBor);
        assert_eq!(Route::from_token("admin"), Route::Admin);
        assert_eq!(Route::from_token("  adults "), Route::Adults);
        for route in Route::ALL {
            assert_eq!(Route::from_token(route.token()), route);
        }
    }

    #[test]
    fn test_unknown_token_falls_back_to_dashboard() {
        assert_eq!(Route::from_token("/nowhere"), Route::Dashboard);
        assert_eq!(Route::from_token(""), Route::Dashboard);
        assert_eq!(Route::from_token("#"), Route::Dashboard);
    }

    #[test]
    fn test_render_dispatches_by_route() {
        let (state, _) = state_with_event(None);
        let today = reference_today();
        assert!(matches!(render(Route::Adults, &state, today), View::Adults(_)));
        assert!(matches!(render(Route::Resources, &state, today), View::Resources(_)));
        assert!(matches!(
            render(Route::from_token("bogus"), &state, today),
            View::Dashboard(_)
        ));
    }
}
