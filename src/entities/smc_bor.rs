//! SMC/BOR entity - Scoutmaster conference and board of review requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status given to new requests.
pub const DEFAULT_STATUS: &str = "pending";

/// Kind of advancement checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmcBorKind {
    /// Scoutmaster conference
    #[serde(rename = "SMC")]
    Smc,
    /// Board of review
    #[serde(rename = "BOR")]
    Bor,
}

impl fmt::Display for SmcBorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Smc => "SMC",
            Self::Bor => "BOR",
        })
    }
}

impl FromStr for SmcBorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SMC" => Ok(Self::Smc),
            "BOR" => Ok(Self::Bor),
            other => Err(format!("unknown request type '{other}', expected SMC or BOR")),
        }
    }
}

/// A scout's request for an SMC or BOR.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmcBorRequest {
    /// Opaque unique identifier
    pub id: String,
    /// Requesting scout
    pub user_id: String,
    /// SMC or BOR
    #[serde(rename = "type")]
    pub kind: SmcBorKind,
    /// Preferred date
    pub date: NaiveDate,
    /// Free-text status
    #[serde(default = "default_status")]
    pub status: String,
    /// Submission time
    pub created_at: DateTime<Utc>,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}
