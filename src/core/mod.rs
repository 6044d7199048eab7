//! Core business logic - framework-agnostic operations over the portal state.
//!
//! Every function takes the state explicitly; persistence is the caller's job.

pub mod admin;
pub mod adults;
pub mod advancement;
pub mod dates;
pub mod event;
pub mod ids;
pub mod registration;
pub mod users;
