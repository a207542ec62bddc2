//! UI layer for the picker app: app shell and candidate list panels.

pub mod app;

pub use app::{PickerGuiApp, StartupConfig};
