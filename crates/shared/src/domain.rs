use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a resolved time zone, carrying its canonical IANA identifier
/// (e.g. "Asia/Tokyo"). Equality is by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeZoneRef {
    identifier: String,
}

impl TimeZoneRef {
    pub fn from_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for TimeZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// How the picker is currently browsing the catalog. Exactly one mode is
/// active at a time; switching modes leaves the other modes' transient state
/// in place, it is simply not read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Abbreviation,
    Identifier,
    Search,
}

/// One row of the visible candidate list. Placeholder rows are presentational
/// only and must never be forwarded to a select operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateItem {
    Abbreviation(String),
    Region(String),
    Identifier(String),
    Placeholder(&'static str),
}

impl CandidateItem {
    pub fn label(&self) -> &str {
        match self {
            CandidateItem::Abbreviation(key) => key,
            CandidateItem::Region(region) => region,
            CandidateItem::Identifier(id) => id,
            CandidateItem::Placeholder(text) => text,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, CandidateItem::Placeholder(_))
    }
}
