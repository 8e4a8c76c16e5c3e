//! UI panel rendering subsystem
//!
//! This module contains all UI rendering for the resize demo:
//! - Controls bar (decorator tunables, reset actions)
//! - Table header (grouped headers with resize handles)
//! - Table body (rows laid out with the resolved column widths)
//! - Status bar (Width Vector, gesture and document style)
//! - Panel manager (panel orchestration and layout)
//! - Pointer bridge (egui input into the pointer hub)
//! - Document bridge (document style onto egui)

pub mod controls;
pub mod document_bridge;
pub mod panel_manager;
pub mod pointer_bridge;
pub mod status_bar;
pub mod table_body;
pub mod table_header;
