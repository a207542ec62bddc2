use catalog::{TimeZoneCatalog, ZoneInfoCatalog};
use chrono::Utc;
use chrono_tz::Tz;
use eframe::egui;
use egui::ScrollArea;
use picker_core::PickerSession;
use serde::{Deserialize, Serialize};
use shared::domain::{CandidateItem, SelectionMode, TimeZoneRef};
use tracing::{info, warn};

use crate::controller::events::{apply_picker_event, PickerEvent, StatusBanner};

pub const SETTINGS_STORAGE_KEY: &str = "picker_gui.settings";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub initial_mode: SelectionMode,
    pub preselect: Option<String>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            initial_mode: SelectionMode::Abbreviation,
            preselect: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedPickerSettings {
    pub last_mode: SelectionMode,
}

pub struct PickerGuiApp {
    session: PickerSession<ZoneInfoCatalog>,
    search_draft: String,
    banner: Option<StatusBanner>,
}

impl PickerGuiApp {
    pub fn new(startup: StartupConfig, persisted: Option<PersistedPickerSettings>) -> Self {
        let catalog = ZoneInfoCatalog::new();
        let initial_mode = persisted
            .map(|settings| settings.last_mode)
            .unwrap_or(startup.initial_mode);
        // Preselect identifiers come from the caller, not the catalog; an
        // unresolvable one seeds nothing instead of aborting startup.
        let preselected = startup.preselect.as_deref().and_then(|identifier| {
            let resolved = catalog.resolve_identifier(identifier);
            if resolved.is_none() {
                warn!(identifier, "preselect did not resolve; starting without one");
            }
            resolved
        });
        Self {
            session: open_session(catalog, initial_mode, preselected),
            search_draft: String::new(),
            banner: None,
        }
    }

    fn reopen(&mut self) {
        let preselected = self.session.selection().cloned();
        let mode = self.session.mode();
        self.session = open_session(ZoneInfoCatalog::new(), mode, preselected);
        self.search_draft.clear();
        self.banner = None;
    }

    fn show_picker(&mut self, ui: &mut egui::Ui, pending: &mut Vec<PickerEvent>) {
        let mut mode = self.session.mode();
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, SelectionMode::Abbreviation, "Abbrev (ex: JST)");
            ui.selectable_value(&mut mode, SelectionMode::Identifier, "ID (ex: Asia/Tokyo)");
            ui.selectable_value(&mut mode, SelectionMode::Search, "search");
        });
        if mode != self.session.mode() {
            pending.push(PickerEvent::ModeSelected(mode));
        }
        ui.add_space(4.0);

        if mode == SelectionMode::Search {
            let edit = egui::TextEdit::singleline(&mut self.search_draft)
                .hint_text("search keyword")
                .desired_width(f32::INFINITY);
            if ui.add(edit).changed() {
                pending.push(PickerEvent::SearchEdited(self.search_draft.clone()));
            }
            ui.add_space(4.0);
        }

        if mode == SelectionMode::Identifier {
            if let Some(region) = self.session.drill_path().map(str::to_string) {
                ui.horizontal(|ui| {
                    if ui.button("← All regions").clicked() {
                        pending.push(PickerEvent::BackToRegions);
                    }
                    ui.weak(region);
                });
                ui.add_space(4.0);
            }
        }

        if let Some(banner) = &self.banner {
            ui.colored_label(ui.visuals().warn_fg_color, banner.message.as_str());
            ui.add_space(4.0);
        }

        let candidates = self.session.visible_candidates();
        ScrollArea::vertical()
            .id_salt("candidate_list_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for item in &candidates {
                    self.render_candidate_row(ui, item, pending);
                }
            });
    }

    fn render_candidate_row(
        &self,
        ui: &mut egui::Ui,
        item: &CandidateItem,
        pending: &mut Vec<PickerEvent>,
    ) {
        match item {
            CandidateItem::Placeholder(text) => {
                if text.is_empty() {
                    ui.add_space(16.0);
                } else {
                    ui.weak(*text);
                }
            }
            CandidateItem::Abbreviation(key) => {
                if ui.selectable_label(false, key.as_str()).clicked() {
                    pending.push(PickerEvent::AbbreviationTapped(key.clone()));
                }
            }
            CandidateItem::Region(region) => {
                if ui
                    .selectable_label(false, format!("{region} ▸"))
                    .clicked()
                {
                    pending.push(PickerEvent::RegionTapped(region.clone()));
                }
            }
            CandidateItem::Identifier(identifier) => {
                if ui.selectable_label(false, identifier.as_str()).clicked() {
                    pending.push(PickerEvent::IdentifierTapped(identifier.clone()));
                }
            }
        }
    }

    fn show_result(&self, ui: &mut egui::Ui) -> bool {
        ui.add_space(12.0);
        match self.session.selection() {
            Some(chosen) => {
                ui.heading("Time zone selected");
                ui.add_space(4.0);
                ui.label(zone_status_line(chosen));
            }
            None => {
                ui.heading("No selection");
                ui.add_space(4.0);
                ui.weak("The picker was dismissed without choosing a time zone.");
            }
        }
        ui.add_space(12.0);
        ui.button("Pick again").clicked()
    }
}

fn open_session(
    catalog: ZoneInfoCatalog,
    mode: SelectionMode,
    preselected: Option<TimeZoneRef>,
) -> PickerSession<ZoneInfoCatalog> {
    PickerSession::new(catalog)
        .with_mode(mode)
        .with_preselected(preselected)
        .on_select(|chosen| info!(identifier = chosen.identifier(), "time zone selected"))
}

/// Status-line text for a chosen zone: identifier plus its current wall
/// clock and UTC offset. Falls back to the bare identifier if the zone is
/// not in the embedded database.
fn zone_status_line(zone: &TimeZoneRef) -> String {
    match zone.identifier().parse::<Tz>() {
        Ok(tz) => {
            let now = Utc::now().with_timezone(&tz);
            format!(
                "{} — {} (UTC{})",
                zone.identifier(),
                now.format("%H:%M"),
                now.format("%:z")
            )
        }
        Err(_) => zone.identifier().to_string(),
    }
}

impl eframe::App for PickerGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending: Vec<PickerEvent> = Vec::new();
        let mut reopen = false;

        if self.session.is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            pending.push(PickerEvent::Cancelled);
        }

        egui::TopBottomPanel::top("picker_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Select time zone");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.session.is_open() && ui.button("Cancel").clicked() {
                        pending.push(PickerEvent::Cancelled);
                    }
                });
            });
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("picker_status").show(ctx, |ui| {
            ui.add_space(4.0);
            match self.session.selection() {
                Some(zone) => ui.label(zone_status_line(zone)),
                None => ui.weak("No time zone selected"),
            };
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.is_open() {
                self.show_picker(ui, &mut pending);
            } else {
                reopen = self.show_result(ui);
            }
        });

        for event in pending {
            self.banner = apply_picker_event(&mut self.session, event);
        }
        if reopen {
            self.reopen();
        }

        // Keep the status-line clock ticking.
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedPickerSettings {
            last_mode: self.session.mode(),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::TimeZoneRef;

    use super::zone_status_line;

    #[test]
    fn status_line_includes_identifier_and_offset() {
        let line = zone_status_line(&TimeZoneRef::from_identifier("UTC"));
        assert!(line.starts_with("UTC — "));
        assert!(line.ends_with("(UTC+00:00)"));
    }

    #[test]
    fn status_line_falls_back_to_the_bare_identifier() {
        let line = zone_status_line(&TimeZoneRef::from_identifier("Not/A_Zone"));
        assert_eq!(line, "Not/A_Zone");
    }
}
