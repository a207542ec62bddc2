use chrono_tz::{Tz, TZ_VARIANTS};
use shared::domain::TimeZoneRef;
use tracing::debug;

mod abbreviations;

use abbreviations::{identifier_for, ABBREVIATION_TABLE};

/// Source of truth for enumerating and resolving time zones. The picker
/// logic never filters or re-orders what a catalog returns.
pub trait TimeZoneCatalog {
    /// All known abbreviation keys, in catalog order.
    fn abbreviations(&self) -> Vec<String>;

    /// Grouping prefixes for drill-down browsing (e.g. "Asia").
    fn regions(&self) -> Vec<String>;

    /// Full identifiers under one region, in catalog order.
    fn detail_identifiers(&self, region: &str) -> Vec<String>;

    /// Identifiers relating to a free-text key. An empty query matches
    /// nothing.
    fn search(&self, query: &str) -> Vec<String>;

    fn resolve_abbreviation(&self, key: &str) -> Option<TimeZoneRef>;

    fn resolve_identifier(&self, identifier: &str) -> Option<TimeZoneRef>;
}

/// Catalog backed by the IANA database embedded in `chrono-tz`, with the
/// static abbreviation table layered on top.
#[derive(Debug, Clone)]
pub struct ZoneInfoCatalog {
    regions: Vec<String>,
}

impl ZoneInfoCatalog {
    pub fn new() -> Self {
        let mut regions: Vec<String> = Vec::new();
        for name in TZ_VARIANTS.iter().map(|tz| tz.name()) {
            if let Some((region, _)) = name.split_once('/') {
                if !regions.iter().any(|known| known == region) {
                    regions.push(region.to_string());
                }
            }
        }
        debug!(regions = regions.len(), "indexed zoneinfo regions");
        Self { regions }
    }
}

impl Default for ZoneInfoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeZoneCatalog for ZoneInfoCatalog {
    fn abbreviations(&self) -> Vec<String> {
        ABBREVIATION_TABLE
            .iter()
            .map(|(key, _)| (*key).to_string())
            .collect()
    }

    fn regions(&self) -> Vec<String> {
        self.regions.clone()
    }

    fn detail_identifiers(&self, region: &str) -> Vec<String> {
        TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| {
                name.split_once('/')
                    .is_some_and(|(prefix, _)| prefix == region)
            })
            .map(str::to_string)
            .collect()
    }

    fn search(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_ascii_lowercase();
        TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| name.to_ascii_lowercase().contains(&needle))
            .map(str::to_string)
            .collect()
    }

    fn resolve_abbreviation(&self, key: &str) -> Option<TimeZoneRef> {
        self.resolve_identifier(identifier_for(key)?)
    }

    fn resolve_identifier(&self, identifier: &str) -> Option<TimeZoneRef> {
        let tz = identifier.parse::<Tz>().ok()?;
        Some(TimeZoneRef::from_identifier(tz.name()))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
