//! User entity - Scouts and adult leaders.
//!
//! Each user carries a role with a role-specific payload. On disk the role is
//! stored the way the browser prototype stored it: a `role` string next to a
//! free-form `details` object. In memory it is the [`RoleProfile`] union.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role name without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Youth member
    Scout,
    /// Assistant scoutmaster
    Asm,
    /// Troop committee member
    Committee,
    /// Merit badge counselor
    Mbc,
}

impl Role {
    /// Lowercase name as persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scout => "scout",
            Self::Asm => "asm",
            Self::Committee => "committee",
            Self::Mbc => "mbc",
        }
    }

    /// Adult leader roles may approve events and appear in the directory.
    #[must_use]
    pub const fn is_adult_leader(self) -> bool {
        matches!(self, Self::Asm | Self::Committee | Self::Mbc)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role together with the details that only make sense for that role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleProfile {
    /// Scouts carry no extra details
    Scout,
    /// Assistant scoutmaster and the patrols they advise
    Asm {
        /// Patrol names
        patrols: Vec<String>,
    },
    /// Committee member and their position
    Committee {
        /// Committee position (e.g. "Treasurer"), if any
        position: Option<String>,
    },
    /// Merit badge counselor and the badges they counsel
    Mbc {
        /// Merit badge names
        merit_badges: Vec<String>,
    },
}

impl RoleProfile {
    /// Role without payload.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Scout => Role::Scout,
            Self::Asm { .. } => Role::Asm,
            Self::Committee { .. } => Role::Committee,
            Self::Mbc { .. } => Role::Mbc,
        }
    }

    /// One-line summary used by the adult leader directory. Empty when the
    /// role has nothing to show.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Scout => String::new(),
            Self::Asm { patrols } if !patrols.is_empty() => {
                format!("Patrols: {}", patrols.join(", "))
            }
            Self::Committee {
                position: Some(position),
            } => format!("Position: {position}"),
            Self::Mbc { merit_badges } if !merit_badges.is_empty() => {
                format!("Merit Badges: {}", merit_badges.join(", "))
            }
            _ => String::new(),
        }
    }
}

/// Course name to completion status, in the order courses were first recorded.
pub type TrainingRecords = IndexMap<String, String>;

/// A member of the troop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserRecord", into = "UserRecord")]
pub struct User {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Role and role-specific details
    pub profile: RoleProfile,
    /// Last day the medical record is valid, if one is on file
    pub medical_valid_until: Option<NaiveDate>,
    /// Training course statuses
    pub training: TrainingRecords,
}

impl User {
    /// Role without payload.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }

    /// "Name (role)" label used by user pickers.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.role())
    }
}

/// Persisted shape of [`User`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    id: String,
    name: String,
    email: String,
    role: Option<Role>,
    #[serde(default)]
    details: DetailsRecord,
    #[serde(default, deserialize_with = "super::lenient::optional_date")]
    medical_valid_until: Option<NaiveDate>,
    #[serde(default)]
    training: TrainingRecords,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    patrols: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    merit_badges: Option<Vec<String>>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        let details = record.details;
        // Records without a role predate role tracking; treat them as scouts.
        let profile = match record.role.unwrap_or(Role::Scout) {
            Role::Scout => RoleProfile::Scout,
            Role::Asm => RoleProfile::Asm {
                patrols: details.patrols.unwrap_or_default(),
            },
            Role::Committee => RoleProfile::Committee {
                position: details.position,
            },
            Role::Mbc => RoleProfile::Mbc {
                merit_badges: details.merit_badges.unwrap_or_default(),
            },
        };
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            profile,
            medical_valid_until: record.medical_valid_until,
            training: record.training,
        }
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        let role = user.role();
        let details = match user.profile {
            RoleProfile::Scout => DetailsRecord::default(),
            RoleProfile::Asm { patrols } => DetailsRecord {
                patrols: Some(patrols),
                ..DetailsRecord::default()
            },
            RoleProfile::Committee { position } => DetailsRecord {
                position,
                ..DetailsRecord::default()
            },
            RoleProfile::Mbc { merit_badges } => DetailsRecord {
                merit_badges: Some(merit_badges),
                ..DetailsRecord::default()
            },
        };
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: Some(role),
            details,
            medical_valid_until: user.medical_valid_until,
            training: user.training,
        }
    }
}
