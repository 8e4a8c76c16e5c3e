//! Controls bar UI rendering
//!
//! Top bar with the decorator tunables and reset actions.

use eframe::egui;

use crate::app::AppState;

/// Default upper bound offered when the max limit is switched on.
const DEFAULT_MAX_LIMIT: f32 = 600.0;

/// Result of controls bar interactions.
pub enum ControlsInteraction {
    /// A tunable in `state.config` was edited
    ConfigChanged,
    ResetWidthsRequested,
    ResetCursorRequested,
}

/// Renders the controls bar.
///
/// Edits `state.config` in place and reports that it changed; the caller
/// decides when to rebuild the decorator.
pub fn render_controls(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlsInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Column resize");
        ui.separator();

        let config = &mut state.config;
        let mut changed = false;

        changed |= ui.checkbox(&mut config.append_expander, "Append expander").changed();
        changed |= ui
            .checkbox(&mut config.disable_user_select_when_resizing, "Disable selection while resizing")
            .changed();
        changed |= ui
            .add_enabled(
                config.disable_user_select_when_resizing,
                egui::Checkbox::new(&mut config.restore_cursor_on_release, "Restore cursor"),
            )
            .changed();

        ui.separator();
        ui.label("Min");
        changed |= ui
            .add(egui::DragValue::new(&mut config.min_size).range(0.0..=500.0).suffix(" px"))
            .changed();

        let mut limited = config.max_size.is_some();
        if ui.checkbox(&mut limited, "Max").changed() {
            config.max_size = limited.then_some(DEFAULT_MAX_LIMIT.max(config.min_size));
            changed = true;
        }
        if let Some(max_size) = config.max_size.as_mut() {
            changed |= ui
                .add(egui::DragValue::new(max_size).range(config.min_size..=4000.0).suffix(" px"))
                .changed();
            // Keep min <= max when min was raised past it
            if *max_size < config.min_size {
                *max_size = config.min_size;
            }
        }

        if changed {
            interaction = Some(ControlsInteraction::ConfigChanged);
        }

        ui.separator();
        if ui.button("Reset widths").clicked() {
            interaction = Some(ControlsInteraction::ResetWidthsRequested);
        }
        if ui.button("Reset cursor").clicked() {
            interaction = Some(ControlsInteraction::ResetCursorRequested);
        }
    });

    interaction
}
