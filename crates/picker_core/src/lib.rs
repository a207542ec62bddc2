//! Selection engine for the time-zone picker: a mode/search/drill state
//! machine over a [`catalog::TimeZoneCatalog`], plus the per-lifetime session
//! contract exposed to embedding applications.

pub mod controller;
pub mod session;

pub use controller::SelectionController;
pub use session::PickerSession;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
