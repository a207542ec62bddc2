use catalog::TimeZoneCatalog;
use shared::{
    domain::{CandidateItem, SelectionMode, TimeZoneRef},
    error::SelectionError,
};
use tracing::debug;

use crate::controller::SelectionController;

pub type CompletionCallback = Box<dyn FnMut(&TimeZoneRef)>;

/// One picker lifetime, owning the controller and the caller-facing contract:
/// an open flag, a selection slot, and an optional completion callback.
///
/// On a successful selection the slot is set, the callback fires exactly once
/// with the chosen value, and the open flag clears, all together. On
/// cancellation only the open flag clears. Selection calls made after the
/// session has closed are ignored.
pub struct PickerSession<C> {
    controller: SelectionController<C>,
    is_open: bool,
    selection: Option<TimeZoneRef>,
    completion: Option<CompletionCallback>,
}

impl<C: TimeZoneCatalog> PickerSession<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            controller: SelectionController::new(catalog),
            is_open: true,
            selection: None,
            completion: None,
        }
    }

    /// Seeds the selection slot with the caller's current value. The picker
    /// logic never reads it; cancellation hands it back untouched.
    pub fn with_preselected(mut self, preselected: Option<TimeZoneRef>) -> Self {
        self.selection = preselected;
        self
    }

    pub fn on_select(mut self, completion: impl FnMut(&TimeZoneRef) + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.controller.set_mode(mode);
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selection(&self) -> Option<&TimeZoneRef> {
        self.selection.as_ref()
    }

    pub fn mode(&self) -> SelectionMode {
        self.controller.mode()
    }

    pub fn search_query(&self) -> &str {
        self.controller.search_query()
    }

    pub fn drill_path(&self) -> Option<&str> {
        self.controller.drill_path()
    }

    pub fn catalog(&self) -> &C {
        self.controller.catalog()
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.controller.set_mode(mode);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.controller.set_search_query(query);
    }

    pub fn visible_candidates(&self) -> Vec<CandidateItem> {
        self.controller.visible_candidates()
    }

    pub fn drill_into(&mut self, region: impl Into<String>) {
        self.controller.drill_into(region);
    }

    pub fn drill_out(&mut self) {
        self.controller.drill_out();
    }

    pub fn select_abbreviation(&mut self, key: &str) -> Result<(), SelectionError> {
        if !self.is_open {
            debug!(key, "selection after dismissal ignored");
            return Ok(());
        }
        self.controller.select_abbreviation(key)?;
        self.close_with_result();
        Ok(())
    }

    pub fn select_identifier(&mut self, identifier: &str) -> Result<(), SelectionError> {
        if !self.is_open {
            debug!(identifier, "selection after dismissal ignored");
            return Ok(());
        }
        self.controller.select_identifier(identifier)?;
        self.close_with_result();
        Ok(())
    }

    /// Closes the session with no result; the selection slot keeps whatever
    /// value it held when the picker opened.
    pub fn cancel(&mut self) {
        if !self.is_open {
            return;
        }
        self.controller.cancel();
        self.is_open = false;
    }

    fn close_with_result(&mut self) {
        if let Some(chosen) = self.controller.take_result() {
            if let Some(callback) = self.completion.as_mut() {
                callback(&chosen);
            }
            self.selection = Some(chosen);
            self.is_open = false;
        }
    }
}
