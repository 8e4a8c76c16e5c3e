//! Application-level modules for the resize demo.
//!
//! This module contains the demo's state and its sample table content.

mod app_state;
pub mod sample_data;

pub use app_state::AppState;
