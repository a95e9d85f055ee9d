//! Library entry for tirecat exposing the catalog engine and runtime for the binary and integration tests.

pub mod app;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
pub mod vehicles;
