//! Table body rendering
//!
//! Paints the data rows under the header, one cell per leaf column, using
//! the same resolved widths as the header so the two stay aligned.

use colresize::{collect_leaves, ColumnNode};
use eframe::egui;
use egui::ScrollArea;

use crate::app::sample_data::TableRow;
use crate::rendering::text_utils::{text_anchor, truncate_text_to_fit};

/// Height of one data row.
pub const ROW_HEIGHT: f32 = 22.0;

/// Renders `rows` in a vertically scrolling area, only painting the rows in view.
pub fn render_table_body<R: TableRow>(ui: &mut egui::Ui, columns: &[ColumnNode], leaf_widths: &[f32], rows: &[R]) {
    let leaves = collect_leaves(columns);
    let total_width: f32 = leaf_widths.iter().sum();
    let font_id = egui::FontId::proportional(13.0);

    ScrollArea::vertical()
        .id_salt("table_body_scroll_area")
        .auto_shrink([false, false])
        .show_rows(ui, ROW_HEIGHT, rows.len(), |ui, visible| {
            for index in visible {
                let row = &rows[index];
                let (row_rect, _) = ui.allocate_exact_size(egui::vec2(total_width, ROW_HEIGHT), egui::Sense::hover());
                let painter = ui.painter();

                if index % 2 == 1 {
                    painter.rect_filled(row_rect, 0.0, ui.visuals().faint_bg_color);
                }

                let mut x = row_rect.left();
                for (column, &width) in leaves.iter().zip(leaf_widths) {
                    let cell_rect = egui::Rect::from_min_size(egui::pos2(x, row_rect.top()), egui::vec2(width, ROW_HEIGHT));
                    x += width;

                    let text = truncate_text_to_fit(&row.cell_text(&column.key), width, &font_id, painter);
                    if text.is_empty() {
                        continue;
                    }
                    let (anchor, align) = text_anchor(cell_rect, column.align);
                    painter.with_clip_rect(cell_rect).text(
                        anchor,
                        align,
                        text,
                        font_id.clone(),
                        ui.visuals().text_color(),
                    );
                }
            }
        });
}
