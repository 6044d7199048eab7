//! Resources screen.

use super::write_title;
use std::fmt;

const RESOURCES_TEXT: &str =
    "Link public info here (camping list, packing checklists, calendar links, \
     troop policies, etc.).";

/// Projection of the resources screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcesView {
    /// Informational text
    pub text: &'static str,
}

impl ResourcesView {
    /// Builds the screen; it does not depend on state.
    #[must_use]
    pub const fn build() -> Self {
        Self {
            text: RESOURCES_TEXT,
        }
    }
}

impl fmt::Display for ResourcesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "Resources")?;
        writeln!(f, "{}", self.text)
    }
}
