use catalog::TimeZoneCatalog;
use shared::{
    domain::{CandidateItem, SelectionMode, TimeZoneRef},
    error::SelectionError,
};
use tracing::{debug, warn};

/// Rows shown in Search mode before any keyword is typed. Presentational
/// only; none of them is selectable.
pub const EMPTY_SEARCH_PLACEHOLDERS: [&str; 3] = ["", "type keyword to filter time zones", ""];

/// State machine behind one picker: the active [`SelectionMode`], the search
/// query, the drill-down position, and the pending result.
///
/// The visible candidate list is a pure function of that state and the
/// catalog; rendering layers recompute it on every change. Emitting a result
/// always coincides with requesting dismissal.
pub struct SelectionController<C> {
    catalog: C,
    mode: SelectionMode,
    search_query: String,
    drill_path: Option<String>,
    pending_result: Option<TimeZoneRef>,
    dismiss_requested: bool,
}

impl<C: TimeZoneCatalog> SelectionController<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            mode: SelectionMode::Abbreviation,
            search_query: String::new(),
            drill_path: None,
            pending_result: None,
            dismiss_requested: false,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn drill_path(&self) -> Option<&str> {
        self.drill_path.as_deref()
    }

    pub fn dismiss_requested(&self) -> bool {
        self.dismiss_requested
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Always legal; transient state of the other modes stays in place and is
    /// simply not read.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Meaningful only in Search mode, never rejected elsewhere.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Derives the visible list from (mode, search query, drill path) and the
    /// catalog. Pure; safe to call on every state change.
    pub fn visible_candidates(&self) -> Vec<CandidateItem> {
        match self.mode {
            SelectionMode::Abbreviation => self
                .catalog
                .abbreviations()
                .into_iter()
                .map(CandidateItem::Abbreviation)
                .collect(),
            SelectionMode::Identifier => match self.drill_path.as_deref() {
                None => self
                    .catalog
                    .regions()
                    .into_iter()
                    .map(CandidateItem::Region)
                    .collect(),
                Some(region) => self
                    .catalog
                    .detail_identifiers(region)
                    .into_iter()
                    .map(CandidateItem::Identifier)
                    .collect(),
            },
            SelectionMode::Search => {
                if self.search_query.is_empty() {
                    EMPTY_SEARCH_PLACEHOLDERS
                        .iter()
                        .map(|text| CandidateItem::Placeholder(text))
                        .collect()
                } else {
                    self.catalog
                        .search(&self.search_query)
                        .into_iter()
                        .map(CandidateItem::Identifier)
                        .collect()
                }
            }
        }
    }

    /// Enters a region's detail list. Only meaningful in Identifier mode at
    /// the region level; anything else is a logged no-op.
    pub fn drill_into(&mut self, region: impl Into<String>) {
        let region = region.into();
        if self.mode != SelectionMode::Identifier || self.drill_path.is_some() {
            warn!(%region, "drill_into ignored outside region browsing");
            return;
        }
        debug!(%region, "drilling into region");
        self.drill_path = Some(region);
    }

    /// Returns from a detail list to the region list.
    pub fn drill_out(&mut self) {
        if self.drill_path.take().is_some() {
            debug!("returned to region list");
        }
    }

    pub fn select_abbreviation(&mut self, key: &str) -> Result<TimeZoneRef, SelectionError> {
        let Some(chosen) = self.catalog.resolve_abbreviation(key) else {
            warn!(key, "abbreviation did not resolve; tap ignored");
            return Err(SelectionError::not_found(key));
        };
        debug!(key, identifier = chosen.identifier(), "abbreviation selected");
        Ok(self.finish(chosen))
    }

    /// Catalog-sourced identifiers are expected to resolve; anything else
    /// takes the same non-fatal path as an unknown abbreviation.
    pub fn select_identifier(&mut self, identifier: &str) -> Result<TimeZoneRef, SelectionError> {
        let Some(chosen) = self.catalog.resolve_identifier(identifier) else {
            warn!(identifier, "identifier did not resolve; tap ignored");
            return Err(SelectionError::not_found(identifier));
        };
        debug!(identifier = chosen.identifier(), "identifier selected");
        Ok(self.finish(chosen))
    }

    /// Requests dismissal with no result. Legal at any time.
    pub fn cancel(&mut self) {
        debug!("picker cancelled");
        self.dismiss_requested = true;
    }

    /// Hands the pending result over, at most once.
    pub fn take_result(&mut self) -> Option<TimeZoneRef> {
        self.pending_result.take()
    }

    fn finish(&mut self, chosen: TimeZoneRef) -> TimeZoneRef {
        self.pending_result = Some(chosen.clone());
        self.dismiss_requested = true;
        chosen
    }
}
