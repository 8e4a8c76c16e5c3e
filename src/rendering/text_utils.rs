//! Text fitting for table cells.
//!
//! Cell and header text is cut to the column width, ending in ".." when it
//! does not fit.

use colresize::TextAlign;
use eframe::egui;

/// Horizontal padding kept free inside a cell (both sides together).
pub const CELL_PADDING: f32 = 8.0;

const ELLIPSIS: &str = "..";

/// Fits `text` into `available_width` using the painter's font metrics.
pub fn truncate_text_to_fit(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    truncate_with(text, available_width - CELL_PADDING, |candidate| {
        painter
            .layout_no_wrap(candidate.to_string(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    })
}

/// Anchor point and alignment for text placed in `rect` with `align`,
/// inset by half the cell padding.
pub fn text_anchor(rect: egui::Rect, align: TextAlign) -> (egui::Pos2, egui::Align2) {
    let inset = egui::vec2(CELL_PADDING / 2.0, 0.0);
    match align {
        TextAlign::Left => (rect.left_center() + inset, egui::Align2::LEFT_CENTER),
        TextAlign::Center => (rect.center(), egui::Align2::CENTER_CENTER),
        TextAlign::Right => (rect.right_center() - inset, egui::Align2::RIGHT_CENTER),
    }
}

/// Longest prefix of `text` (plus ellipsis) whose measured width is at most
/// `max_width`. Returns `text` unchanged when it already fits and an empty
/// string when not even the ellipsis fits.
pub fn truncate_with<F>(text: &str, max_width: f32, measure: F) -> String
where
    F: Fn(&str) -> f32,
{
    if max_width <= 0.0 {
        return String::new();
    }
    if measure(text) <= max_width {
        return text.to_string();
    }

    let room = max_width - measure(ELLIPSIS);
    if room <= 0.0 {
        return String::new();
    }

    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();

    let (mut low, mut high) = (0, boundaries.len());
    while low < high {
        let mid = (low + high).div_ceil(2);
        if measure(prefix(text, &boundaries, mid)) <= room {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    format!("{}{ELLIPSIS}", prefix(text, &boundaries, low))
}

/// First `chars` characters of `text`; `boundaries` are its char offsets.
fn prefix<'a>(text: &'a str, boundaries: &[usize], chars: usize) -> &'a str {
    &text[..boundaries.get(chars).copied().unwrap_or(text.len())]
}
