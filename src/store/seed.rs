//! First-run seed data.
//!
//! A fresh store gets five users (one per role, two scouts) and three events
//! dated relative to the day the store is first opened.

use crate::{
    core::{dates::offset_from, ids},
    entities::{Event, PortalState, RoleProfile, TrainingRecords, User},
};
use chrono::NaiveDate;

fn training_complete(courses: &[&str]) -> TrainingRecords {
    courses
        .iter()
        .map(|c| ((*c).to_string(), "Complete".to_string()))
        .collect()
}

fn seed_user(
    name: &str,
    email: &str,
    profile: RoleProfile,
    medical_valid_until: NaiveDate,
    training: TrainingRecords,
) -> User {
    User {
        id: ids::generate_id(),
        name: name.to_string(),
        email: email.to_string(),
        profile,
        medical_valid_until: Some(medical_valid_until),
        training,
    }
}

/// The canonical users, in seed order.
#[must_use]
pub fn default_users(today: NaiveDate) -> Vec<User> {
    vec![
        seed_user(
            "Alex Scout",
            "alex@troop.org",
            RoleProfile::Scout,
            offset_from(today, 365),
            TrainingRecords::new(),
        ),
        seed_user(
            "Jamie Scout",
            "jamie@troop.org",
            RoleProfile::Scout,
            offset_from(today, 200),
            TrainingRecords::new(),
        ),
        seed_user(
            "Casey ASM",
            "casey@troop.org",
            RoleProfile::Asm {
                patrols: vec!["Bears".to_string(), "Wolves".to_string()],
            },
            offset_from(today, 400),
            training_complete(&["YPT"]),
        ),
        seed_user(
            "Riley Committee",
            "riley@troop.org",
            RoleProfile::Committee {
                position: Some("Treasurer".to_string()),
            },
            offset_from(today, 500),
            training_complete(&["YPT"]),
        ),
        seed_user(
            "Morgan MBC",
            "morgan@troop.org",
            RoleProfile::Mbc {
                merit_badges: vec!["Camping".to_string(), "First Aid".to_string()],
            },
            offset_from(today, 500),
            training_complete(&["YPT"]),
        ),
    ]
}

struct SeedEvent {
    name: &'static str,
    from: i64,
    to: i64,
    close: i64,
    location: &'static str,
    scout_in_charge: &'static str,
    logistics: &'static str,
    signup_limit: u32,
    approved: bool,
}

const SEED_EVENTS: [SeedEvent; 3] = [
    SeedEvent {
        name: "Fall Campout",
        from: 30,
        to: 32,
        close: 25,
        location: "Camp Pine",
        scout_in_charge: "Alex Scout",
        logistics: "Bring tents, water, mess kit",
        signup_limit: 40,
        approved: true,
    },
    SeedEvent {
        name: "Service Project",
        from: 10,
        to: 10,
        close: 8,
        location: "City Park",
        scout_in_charge: "Jamie Scout",
        logistics: "Work gloves, water bottle",
        signup_limit: 25,
        approved: true,
    },
    SeedEvent {
        name: "PLC Meeting",
        from: 5,
        to: 5,
        close: 4,
        location: "Scout Hut",
        scout_in_charge: "SPL",
        logistics: "Notebook and pen",
        signup_limit: 20,
        approved: false,
    },
];

/// The canonical events. `asm_id` creates the campout and the meeting,
/// `committee_id` the service project.
#[must_use]
pub fn default_events(today: NaiveDate, asm_id: &str, committee_id: &str) -> Vec<Event> {
    SEED_EVENTS
        .iter()
        .enumerate()
        .map(|(i, seed)| Event {
            id: ids::generate_id(),
            name: seed.name.to_string(),
            from_date: offset_from(today, seed.from),
            to_date: offset_from(today, seed.to),
            close_date: offset_from(today, seed.close),
            location: seed.location.to_string(),
            scout_in_charge: seed.scout_in_charge.to_string(),
            logistics: seed.logistics.to_string(),
            signup_limit: Some(seed.signup_limit),
            approved: seed.approved,
            created_by: if i == 1 { committee_id } else { asm_id }.to_string(),
        })
        .collect()
}

/// Seeds `state` when it has no users. Returns whether anything was added;
/// a state that already has users is left untouched.
pub fn ensure_seed(state: &mut PortalState, today: NaiveDate) -> bool {
    if !state.users.is_empty() {
        return false;
    }

    let users = default_users(today);
    let events = default_events(today, &users[2].id, &users[3].id);
    state.current_user_id = Some(users[0].id.clone());
    state.users = users;
    state.events = events;
    true
}
