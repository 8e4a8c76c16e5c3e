//! Panel orchestration and layout management.
//!
//! Lays out the controls bar, the status bar and the table, and reports
//! interactions that need to be handled by the application.

use eframe::egui;

use crate::app::AppState;
use crate::ui::{controls, status_bar, table_body, table_header};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// Resize configuration was edited
    ConfigChanged,
    /// User asked for default column widths
    ResetWidthsRequested,
    /// User asked to clear the document cursor left by a gesture
    ResetCursorRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            if let Some(controls_interaction) = controls::render_controls(ui, state) {
                interaction = Some(match controls_interaction {
                    controls::ControlsInteraction::ConfigChanged => PanelInteraction::ConfigChanged,
                    controls::ControlsInteraction::ResetWidthsRequested => PanelInteraction::ResetWidthsRequested,
                    controls::ControlsInteraction::ResetCursorRequested => PanelInteraction::ResetCursorRequested,
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let table_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(table_frame).show(ctx, |ui| {
            let table = state.decorated_table();
            let leaf_widths = table_header::resolve_leaf_widths(&table.columns, ui.available_width());

            egui::ScrollArea::horizontal()
                .id_salt("table_horizontal_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        table_header::render_table_header(ui, &table.columns, &leaf_widths);
                        table_body::render_table_body(ui, &table.columns, &leaf_widths, &table.data_source);
                    });
                });
        });

        interaction
    }
}
