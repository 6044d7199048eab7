//! Identifier generation for new records.

use uuid::Uuid;

/// Generates an opaque, unique record identifier.
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
