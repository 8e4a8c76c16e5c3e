//! Mirrors the resize core's document style onto egui.
//!
//! The text-selection mode maps to egui's selectable labels and the cursor
//! style to the window's cursor icon.

use colresize::{CursorStyle, DocumentStyle};
use eframe::egui;

/// egui cursor for a document cursor style. `Auto` leaves egui's choice.
pub fn cursor_icon(cursor: CursorStyle) -> Option<egui::CursorIcon> {
    match cursor {
        CursorStyle::Auto => None,
        CursorStyle::Default => Some(egui::CursorIcon::Default),
        CursorStyle::Pointer => Some(egui::CursorIcon::PointingHand),
        CursorStyle::Text => Some(egui::CursorIcon::Text),
        CursorStyle::ColResize => Some(egui::CursorIcon::ResizeColumn),
    }
}

/// Applies `document` to `ctx`. Call after the frame's widgets so the
/// document cursor wins over per-widget hover cursors.
pub fn apply_document_style(ctx: &egui::Context, document: &DocumentStyle) {
    if let Some(icon) = cursor_icon(document.cursor()) {
        ctx.set_cursor_icon(icon);
    }

    let selectable = !document.selection_disabled();
    if ctx.style().interaction.selectable_labels != selectable {
        ctx.style_mut(|style| style.interaction.selectable_labels = selectable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(cursor_icon(CursorStyle::Auto), None);
        assert_eq!(cursor_icon(CursorStyle::ColResize), Some(egui::CursorIcon::ResizeColumn));
        assert_eq!(cursor_icon(CursorStyle::Text), Some(egui::CursorIcon::Text));
    }
}
