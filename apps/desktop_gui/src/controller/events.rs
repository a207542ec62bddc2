//! UI events and their application to the picker session.

use catalog::TimeZoneCatalog;
use picker_core::PickerSession;
use shared::domain::SelectionMode;

/// A discrete user action collected during a frame. Applying events after
/// rendering keeps the widget handlers free of session borrows.
pub enum PickerEvent {
    ModeSelected(SelectionMode),
    SearchEdited(String),
    AbbreviationTapped(String),
    RegionTapped(String),
    IdentifierTapped(String),
    BackToRegions,
    Cancelled,
}

fn event_name(event: &PickerEvent) -> &'static str {
    match event {
        PickerEvent::ModeSelected(_) => "mode_selected",
        PickerEvent::SearchEdited(_) => "search_edited",
        PickerEvent::AbbreviationTapped(_) => "abbreviation_tapped",
        PickerEvent::RegionTapped(_) => "region_tapped",
        PickerEvent::IdentifierTapped(_) => "identifier_tapped",
        PickerEvent::BackToRegions => "back_to_regions",
        PickerEvent::Cancelled => "cancelled",
    }
}

#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub message: String,
}

/// Applies one event to the session. A failed resolution comes back as a
/// banner for the status area; everything else clears it.
pub fn apply_picker_event<C: TimeZoneCatalog>(
    session: &mut PickerSession<C>,
    event: PickerEvent,
) -> Option<StatusBanner> {
    tracing::debug!(event = event_name(&event), "applying picker event");
    match event {
        PickerEvent::ModeSelected(mode) => {
            session.set_mode(mode);
            None
        }
        PickerEvent::SearchEdited(query) => {
            session.set_search_query(query);
            None
        }
        PickerEvent::AbbreviationTapped(key) => {
            session.select_abbreviation(&key).err().map(|err| StatusBanner {
                message: err.to_string(),
            })
        }
        PickerEvent::RegionTapped(region) => {
            session.drill_into(region);
            None
        }
        PickerEvent::IdentifierTapped(identifier) => {
            session.select_identifier(&identifier).err().map(|err| StatusBanner {
                message: err.to_string(),
            })
        }
        PickerEvent::BackToRegions => {
            session.drill_out();
            None
        }
        PickerEvent::Cancelled => {
            session.cancel();
            None
        }
    }
}
