//! Command-line surface.
//!
//! One invocation performs one portal action, then prints any notices and the
//! re-rendered screen. `serve` instead runs the static file server.

mod actions;

pub use actions::execute;

use crate::entities::SmcBorKind;
use crate::views::HistoryKind;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Troop portal: events, registrations, advancement and adult records.
#[derive(Debug, Parser)]
#[command(name = "troop-portal", version, about)]
pub struct Cli {
    /// Configuration file (defaults to ./portal.toml when present)
    #[arg(long, global = true, env = "PORTAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// State document, overriding the configured store path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Portal actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a screen
    Show {
        /// dashboard, events, smc-bor, adults, resources or admin
        #[arg(default_value = "dashboard")]
        route: String,
        /// Also print the sidebar
        #[arg(long)]
        sidebar: bool,
    },
    /// List every SMC/BOR request or adult signup in the troop
    History {
        /// smcbor or adult
        kind: HistoryKind,
    },
    /// List users and their ids
    Users,
    /// Act as another user
    SwitchUser {
        /// User id
        user_id: String,
    },
    /// Register the current user for an event
    Register {
        /// Event id
        event_id: String,
    },
    /// Cancel the current user's registration
    Unregister {
        /// Event id
        event_id: String,
    },
    /// Submit an event for approval
    SubmitEvent(EventArgs),
    /// Approve an event (adult leaders only)
    Approve {
        /// Event id
        event_id: String,
    },
    /// Return an event to pending (adult leaders only)
    Unapprove {
        /// Event id
        event_id: String,
    },
    /// Request a Scoutmaster Conference or Board of Review
    SmcBor {
        /// SMC or BOR
        kind: SmcBorKind,
        /// Requested date (YYYY-MM-DD); defaults to a week from today
        date: Option<NaiveDate>,
    },
    /// Sign the current user up as an adult volunteer
    AdultSignup {
        /// Date (YYYY-MM-DD); defaults to today
        date: Option<NaiveDate>,
        /// Role, e.g. Driver (defaults to Volunteer)
        #[arg(long, default_value = "")]
        role: String,
    },
    /// Set or clear a user's medical form validity date
    Medical {
        /// User id
        user_id: String,
        /// Valid-until date; omit to clear
        valid_until: Option<NaiveDate>,
    },
    /// Record a training course status
    Training {
        /// User id
        user_id: String,
        /// Course name
        course: String,
        /// Status (defaults to Complete)
        #[arg(default_value = "")]
        status: String,
    },
    /// Serve the static front end
    Serve {
        /// Port, overriding PORT and the config file
        #[arg(long)]
        port: Option<u16>,
        /// Directory to serve
        #[arg(long)]
        root: Option<PathBuf>,
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
    },
}

/// Fields of a new event.
#[derive(Debug, Args)]
pub struct EventArgs {
    /// Event name
    #[arg(long, default_value = "")]
    pub name: String,
    /// First day (YYYY-MM-DD); defaults to two weeks from today
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day; defaults to the first day
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Registration close date; defaults to the first day
    #[arg(long)]
    pub close: Option<NaiveDate>,
    /// Location
    #[arg(long, default_value = "")]
    pub location: String,
    /// Scout in charge
    #[arg(long = "sic", default_value = "")]
    pub scout_in_charge: String,
    /// Logistics notes
    #[arg(long, default_value = "")]
    pub logistics: String,
    /// Maximum active registrations; 0 means unlimited
    #[arg(long)]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_submit_event() {
        let cli = Cli::try_parse_from([
            "troop-portal",
            "--store",
            "/tmp/p.json",
            "submit-event",
            "--name",
            "Campout",
            "--from",
            "2026-05-01",
            "--sic",
            "Alex",
            "--limit",
            "12",
        ])
        .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/p.json")));
        let Command::SubmitEvent(args) = cli.command else {
            panic!("expected submit-event");
        };
        assert_eq!(args.from, Some(date(2026, 5, 1)));
        assert_eq!(args.to, None);
        assert_eq!(args.scout_in_charge, "Alex");
        assert_eq!(args.limit, Some(12));
    }

    #[test]
    fn test_parse_typed_arguments() {
        let cli = Cli::try_parse_from(["troop-portal", "smc-bor", "bor", "2026-06-01"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::SmcBor { kind: SmcBorKind::Bor, date: Some(_) }
        ));

        let cli = Cli::try_parse_from(["troop-portal", "history", "adult"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::History { kind: HistoryKind::AdultSignups }
        ));

        assert!(Cli::try_parse_from(["troop-portal", "smc-bor", "xyz", "2026-06-01"]).is_err());
        assert!(Cli::try_parse_from(["troop-portal", "medical", "u1", "June"]).is_err());
    }

    #[test]
    fn test_dates_may_be_omitted() {
        let cli = Cli::try_parse_from(["troop-portal", "smc-bor", "smc"]).unwrap();
        assert!(matches!(cli.command, Command::SmcBor { date: None, .. }));

        let cli =
            Cli::try_parse_from(["troop-portal", "adult-signup", "--role", "Driver"]).unwrap();
        let Command::AdultSignup { date, role } = cli.command else {
            panic!("expected adult-signup");
        };
        assert_eq!(date, None);
        assert_eq!(role, "Driver");

        let cli = Cli::try_parse_from(["troop-portal", "submit-event", "--name", "Hike"]).unwrap();
        let Command::SubmitEvent(args) = cli.command else {
            panic!("expected submit-event");
        };
        assert_eq!(args.from, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["troop-portal", "users", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Command::Users));
    }
}
