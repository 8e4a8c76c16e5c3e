//! Status bar UI rendering
//!
//! Shows the Width Vector, gesture state and document style at the bottom
//! of the window.

use colresize::Bounds;
use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let gesture = match state.active_column() {
            Some(index) => format!("Resizing column {index}"),
            None => "Idle".to_string(),
        };
        let gesture_text = RichText::new(gesture).strong();
        ui.label(if state.is_resizing() {
            gesture_text.color(egui::Color32::from_rgb(100, 150, 255))
        } else {
            gesture_text
        });

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Rows: {} | Updates: {}", state.row_count(), state.updates())).strong());

        ui.label(RichText::new("|").strong());
        ui.label(format!("Widths: {}", format_widths(&state.sizes())));
        ui.label(format!("Bounds: {}", format_bounds(state.bounds())));

        let document = &state.env.document;
        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "user-select: {:?} | cursor: {}",
            document.user_select(),
            document.cursor()
        ));
    });
}

/// Formats a Width Vector as `[120, 80, ...]`.
pub fn format_widths(sizes: &[f32]) -> String {
    let widths: Vec<String> = sizes.iter().map(|width| format!("{width:.0}")).collect();
    format!("[{}]", widths.join(", "))
}

/// Formats width limits as `40..300`, or `40..` when unbounded above.
pub fn format_bounds(bounds: Bounds) -> String {
    if bounds.max_size.is_finite() {
        format!("{:.0}..{:.0}", bounds.min_size, bounds.max_size)
    } else {
        format!("{:.0}..", bounds.min_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_widths() {
        assert_eq!(format_widths(&[120.0, 80.4, 99.6]), "[120, 80, 100]");
        assert_eq!(format_widths(&[]), "[]");
    }

    #[test]
    fn test_format_bounds() {
        assert_eq!(format_bounds(Bounds::new(40.0, 300.0)), "40..300");
        assert_eq!(format_bounds(Bounds::default()), "40..");
    }
}
