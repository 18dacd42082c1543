//! Almanac calendar utilities - integration test support.
//!
//! Re-exports the workspace crates under one roof and provides shared
//! timestamp fixtures for the property-style suites in `tests/`.

pub mod fixtures;

pub use almanac_app as app;
pub use almanac_calendar as calendar;
pub use almanac_core::config;
