//! Low-level rendering helpers for the demo table.

pub mod text_utils;
