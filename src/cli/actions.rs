//! Command dispatch.

use super::{Cli, Command, EventArgs};
use crate::{
    app::{Outcome, Portal},
    config::PortalConfig,
    core::{dates, event::EventDraft, users},
    errors::{Error, Result},
    server,
    store::JsonStore,
    views::Route,
};
use std::fmt::Write as _;
use tracing::info;

/// Days ahead of today used when `smc-bor` is given no date.
const SMC_BOR_DEFAULT_OFFSET: i64 = 7;
/// Days ahead of today used when `submit-event` is given no `--from`.
const EVENT_DEFAULT_OFFSET: i64 = 14;

impl From<EventArgs> for EventDraft {
    fn from(args: EventArgs) -> Self {
        Self {
            name: args.name,
            from_date: args
                .from
                .unwrap_or_else(|| dates::today_with_offset(EVENT_DEFAULT_OFFSET)),
            to_date: args.to,
            close_date: args.close,
            location: args.location,
            scout_in_charge: args.scout_in_charge,
            logistics: args.logistics,
            signup_limit: args.limit,
        }
    }
}

/// Runs the parsed command against the configured store or server.
///
/// CLI flags take precedence over `config`.
///
/// # Errors
/// Returns an error for unknown ids, store write failures, or server failures.
/// Business-rule violations are printed as notices instead.
pub async fn execute(cli: Cli, mut config: PortalConfig) -> Result<()> {
    if let Some(store) = cli.store {
        config.store.path = store;
    }

    if let Command::Serve { port, root, host } = cli.command {
        if let Some(port) = port {
            config.server.port = port;
        }
        if let Some(root) = root {
            config.server.root = root;
        }
        if let Some(host) = host {
            config.server.host = host;
        }
        return server::run(&config.server).await;
    }

    let store = JsonStore::new(config.store.path);
    info!(path = %store.path().display(), "Opening portal store");
    let mut portal = Portal::open(store, dates::today())?;
    let output = perform(&mut portal, cli.command)?;
    print!("{output}");
    Ok(())
}

fn format_outcome(outcome: &Outcome) -> String {
    let mut out = String::new();
    for notice in &outcome.notices {
        let _ = writeln!(out, "{notice}");
    }
    if !outcome.notices.is_empty() {
        out.push('\n');
    }
    let _ = write!(out, "{}", outcome.view);
    out
}

fn list_users(portal: &Portal) -> String {
    let state = portal.state();
    let current = users::current_user(state).map(|u| u.id.as_str());
    let mut out = String::from("Users\n=====\n");
    for user in &state.users {
        let marker = if Some(user.id.as_str()) == current { "*" } else { " " };
        let _ = writeln!(out, "{marker} {} | {}", user.id, user.label());
    }
    out
}

/// Performs one non-server command and returns the text to print.
///
/// # Errors
/// See [`execute`]. `serve` is rejected here.
pub(crate) fn perform(portal: &mut Portal, command: Command) -> Result<String> {
    let outcome = match command {
        Command::Show { route, sidebar } => {
            let mut out = portal.navigate(Route::from_token(&route)).to_string();
            if sidebar {
                let _ = write!(out, "{}", portal.sidebar());
            }
            return Ok(out);
        }
        Command::History { kind } => return Ok(portal.history(kind).to_string()),
        Command::Users => return Ok(list_users(portal)),
        Command::SwitchUser { user_id } => {
            portal.navigate(Route::Dashboard);
            portal.switch_user(&user_id)?
        }
        Command::Register { event_id } => {
            portal.navigate(Route::Dashboard);
            portal.register(&event_id)?
        }
        Command::Unregister { event_id } => {
            portal.navigate(Route::Dashboard);
            portal.unregister(&event_id)?
        }
        Command::SubmitEvent(args) => {
            portal.navigate(Route::Events);
            portal.submit_event(args.into())?
        }
        Command::Approve { event_id } => {
            portal.navigate(Route::Events);
            portal.approve(&event_id)?
        }
        Command::Unapprove { event_id } => {
            portal.navigate(Route::Events);
            portal.unapprove(&event_id)?
        }
        Command::SmcBor { kind, date } => {
            portal.navigate(Route::SmcBor);
            let date = date.unwrap_or_else(|| dates::today_with_offset(SMC_BOR_DEFAULT_OFFSET));
            portal.submit_smc_bor(kind, date)?
        }
        Command::AdultSignup { date, role } => {
            portal.navigate(Route::Dashboard);
            portal.add_adult_signup(&role, date.unwrap_or_else(dates::today))?
        }
        Command::Medical {
            user_id,
            valid_until,
        } => {
            portal.navigate(Route::Admin);
            portal.set_medical(&user_id, valid_until)?
        }
        Command::Training {
            user_id,
            course,
            status,
        } => {
            portal.navigate(Route::Admin);
            portal.upsert_training(&user_id, &course, &status)?
        }
        Command::Serve { .. } => {
            return Err(Error::Config {
                message: "serve does not operate on the portal store".to_string(),
            });
        }
    };
    Ok(format_outcome(&outcome))
}
