//! Entity module - Contains the data model of the portal.
//! Every entity is a plain serde struct; together they make up the single
//! [`PortalState`] document that the store persists.

pub mod adult_signup;
pub mod event;
pub mod lenient;
pub mod portal_state;
pub mod registration;
pub mod smc_bor;
pub mod user;

pub use adult_signup::AdultSignup;
pub use event::Event;
pub use portal_state::PortalState;
pub use registration::Registration;
pub use smc_bor::{SmcBorKind, SmcBorRequest};
pub use user::{Role, RoleProfile, TrainingRecords, User};
