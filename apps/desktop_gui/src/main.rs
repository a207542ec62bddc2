use clap::Parser;
use eframe::egui;
use shared::domain::SelectionMode;
use tracing::warn;

mod controller;
mod ui;

use ui::app::{PersistedPickerSettings, SETTINGS_STORAGE_KEY};
use ui::{PickerGuiApp, StartupConfig};

/// Desktop demo embedding the time-zone picker.
#[derive(Parser, Debug)]
struct Args {
    /// Initial selection mode: abbreviation, identifier, or search.
    #[arg(long, default_value = "abbreviation")]
    mode: String,
    /// Identifier to seed the selection slot with (e.g. "Asia/Tokyo").
    #[arg(long)]
    preselect: Option<String>,
}

fn parse_mode(tag: &str) -> Option<SelectionMode> {
    match tag {
        "abbreviation" => Some(SelectionMode::Abbreviation),
        "identifier" => Some(SelectionMode::Identifier),
        "search" => Some(SelectionMode::Search),
        _ => None,
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let initial_mode = parse_mode(&args.mode).unwrap_or_else(|| {
        warn!(mode = %args.mode, "unknown mode tag; falling back to abbreviation");
        SelectionMode::Abbreviation
    });
    let startup = StartupConfig {
        initial_mode,
        preselect: args.preselect,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Time Zone Picker")
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Time Zone Picker",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedPickerSettings>(&text).ok())
            });
            Ok(Box::new(PickerGuiApp::new(startup, persisted)))
        }),
    )
}
