//! Presentational components for the ExpertLink admin UI.

pub mod components;

pub use components::*;
