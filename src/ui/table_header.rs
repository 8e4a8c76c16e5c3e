//! Table header component rendering
//!
//! Renders the (possibly multi-row) header of a decorated column tree and
//! the resize handles hanging off each leaf column's right edge. A handle
//! only starts the gesture; widths change through the resize controller.

use colresize::{
    collect_leaves, render_header, ColumnNode, Overflow, PointerEvent, ResizeHandle, TextAlign, RESIZE_HANDLE_OFFSET,
    RESIZE_HANDLE_WIDTH,
};
use eframe::egui;
use egui::Color32;

use crate::rendering::text_utils::{text_anchor, truncate_text_to_fit};

/// Height of one header row.
pub const HEADER_ROW_HEIGHT: f32 = 24.0;

/// Placement of one header cell, relative to the header's top-left corner.
#[derive(Debug, Clone)]
pub struct HeaderCellLayout {
    pub x: f32,
    pub width: f32,
    pub row: usize,
    pub row_span: usize,
    pub text: String,
    pub align: TextAlign,
    pub handle: Option<ResizeHandle>,
    /// Handle may extend past the cell's edges
    pub overflow_visible: bool,
}

/// Display width of every leaf column.
///
/// Leaves with a width keep it. Leaves without one (the expander, or a
/// column the Width Vector does not cover) share what is left of
/// `available_width` equally.
pub fn resolve_leaf_widths(columns: &[ColumnNode], available_width: f32) -> Vec<f32> {
    let leaves = collect_leaves(columns);
    let fixed: f32 = leaves.iter().filter_map(|column| column.width).sum();
    let flexible = leaves.iter().filter(|column| column.width.is_none()).count();

    let share = if flexible == 0 {
        0.0
    } else {
        ((available_width - fixed) / flexible as f32).max(0.0)
    };

    leaves.iter().map(|column| column.width.unwrap_or(share)).collect()
}

/// Lays out header cells for `columns`.
///
/// Groups take one row and span their leaves; leaves span every row below
/// their parent down to the header's bottom edge.
pub fn layout_header(columns: &[ColumnNode], leaf_widths: &[f32]) -> Vec<HeaderCellLayout> {
    let rows = columns.iter().map(ColumnNode::depth).max().unwrap_or(1);
    let mut cells = Vec::new();
    let mut x = 0.0;
    let mut leaf = 0;
    layout_level(columns, 0, rows, leaf_widths, &mut x, &mut leaf, &mut cells);
    cells
}

fn layout_level(
    nodes: &[ColumnNode],
    row: usize,
    rows: usize,
    leaf_widths: &[f32],
    x: &mut f32,
    leaf: &mut usize,
    cells: &mut Vec<HeaderCellLayout>,
) {
    for node in nodes {
        match node {
            ColumnNode::Leaf(column) => {
                let width = leaf_widths.get(*leaf).copied().unwrap_or(0.0);
                cells.push(HeaderCellLayout {
                    x: *x,
                    width,
                    row,
                    row_span: rows - row,
                    text: column.display_header().text_content(),
                    align: column.header_cell.style.text_align.unwrap_or(column.align),
                    handle: column.resize_handle().cloned(),
                    overflow_visible: column.header_cell.style.overflow == Some(Overflow::Visible),
                });
                *x += width;
                *leaf += 1;
            }
            ColumnNode::Group(group) => {
                let span = node.leaf_count();
                let width: f32 = leaf_widths.iter().skip(*leaf).take(span).sum();
                cells.push(HeaderCellLayout {
                    x: *x,
                    width,
                    row,
                    row_span: 1,
                    text: render_header(node).text_content(),
                    align: group.header_cell.style.text_align.unwrap_or(TextAlign::Center),
                    handle: None,
                    overflow_visible: false,
                });
                layout_level(&group.children, row + 1, rows, leaf_widths, x, leaf, cells);
            }
        }
    }
}

/// Renders the header row(s) for a decorated column tree.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `columns` - Decorated column tree
/// * `leaf_widths` - Display width per leaf, from [`resolve_leaf_widths`]
pub fn render_table_header(ui: &mut egui::Ui, columns: &[ColumnNode], leaf_widths: &[f32]) {
    let cells = layout_header(columns, leaf_widths);
    let rows = cells.iter().map(|cell| cell.row + cell.row_span).max().unwrap_or(1);
    let total_width: f32 = leaf_widths.iter().sum();

    let (header_rect, _) = ui.allocate_exact_size(
        egui::vec2(total_width, HEADER_ROW_HEIGHT * rows as f32),
        egui::Sense::hover(),
    );

    let font_id = egui::FontId::proportional(14.0);
    let painter = ui.painter().clone();
    let border = ui.visuals().widgets.noninteractive.bg_stroke;
    let text_color = ui.visuals().strong_text_color();

    for cell in &cells {
        let cell_rect = cell_rect(header_rect, cell);

        painter.line_segment([cell_rect.right_top(), cell_rect.right_bottom()], border);
        painter.line_segment([cell_rect.left_bottom(), cell_rect.right_bottom()], border);

        let text = truncate_text_to_fit(&cell.text, cell.width, &font_id, &painter);
        let (anchor, align) = text_anchor(cell_rect, cell.align);
        painter.text(anchor, align, text, font_id.clone(), text_color);
    }

    // Handles last, so they sit above neighbouring cells
    for cell in &cells {
        if let Some(handle) = &cell.handle {
            render_resize_handle(ui, cell_rect(header_rect, cell), handle, cell.overflow_visible);
        }
    }
}

fn cell_rect(header_rect: egui::Rect, cell: &HeaderCellLayout) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            header_rect.min.x + cell.x,
            header_rect.min.y + HEADER_ROW_HEIGHT * cell.row as f32,
        ),
        egui::vec2(cell.width, HEADER_ROW_HEIGHT * cell.row_span as f32),
    )
}

/// Hit area of a handle: `RESIZE_HANDLE_WIDTH` wide, ending
/// `-RESIZE_HANDLE_OFFSET` past the cell's right edge.
pub fn handle_rect(cell_rect: egui::Rect, overflow_visible: bool) -> egui::Rect {
    let right = cell_rect.right() - RESIZE_HANDLE_OFFSET;
    let rect = egui::Rect::from_min_max(
        egui::pos2(right - RESIZE_HANDLE_WIDTH, cell_rect.top()),
        egui::pos2(right, cell_rect.bottom()),
    );
    if overflow_visible {
        rect
    } else {
        rect.intersect(cell_rect)
    }
}

fn render_resize_handle(ui: &mut egui::Ui, cell_rect: egui::Rect, handle: &ResizeHandle, overflow_visible: bool) {
    let rect = handle_rect(cell_rect, overflow_visible);
    let id = ui.id().with(("resize_handle", handle.column_index()));
    let response = ui.interact(rect, id, egui::Sense::drag());

    if response.drag_started() {
        if let Some(origin) = ui.ctx().input(|i| i.pointer.press_origin()) {
            handle.pointer_down(&PointerEvent::Down { x: origin.x });
        }
    }

    // Visual feedback
    let color = if response.hovered() || handle.is_active() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeColumn);
        Color32::from_rgb(100, 150, 255)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color.gamma_multiply(0.5)
    };

    ui.painter().rect_filled(rect.shrink2(egui::vec2(3.0, 4.0)), 0.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use colresize::{Column, ColumnGroup};

    fn tree() -> Vec<ColumnNode> {
        vec![
            Column::new("id", "#").with_width(50.0).into(),
            ColumnGroup::new(
                "customer",
                "Customer",
                vec![
                    Column::new("first", "First").with_width(100.0).into(),
                    Column::new("last", "Last").with_width(120.0).into(),
                ],
            )
            .into(),
            Column::new("filler", "").into(),
        ]
    }

    #[test]
    fn test_flexible_leaves_share_remaining_width() {
        assert_eq!(resolve_leaf_widths(&tree(), 400.0), vec![50.0, 100.0, 120.0, 130.0]);
        assert_eq!(resolve_leaf_widths(&tree(), 100.0), vec![50.0, 100.0, 120.0, 0.0]);
    }

    #[test]
    fn test_group_spans_children() {
        let widths = [50.0, 100.0, 120.0, 0.0];
        let cells = layout_header(&tree(), &widths);

        let summary: Vec<(&str, f32, f32, usize, usize)> = cells
            .iter()
            .map(|cell| (cell.text.as_str(), cell.x, cell.width, cell.row, cell.row_span))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("#", 0.0, 50.0, 0, 2),
                ("Customer", 50.0, 220.0, 0, 1),
                ("First", 50.0, 100.0, 1, 1),
                ("Last", 150.0, 120.0, 1, 1),
                ("", 270.0, 0.0, 0, 2),
            ]
        );
    }

    #[test]
    fn test_handle_hangs_past_right_edge() {
        let cell = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 24.0));

        let visible = handle_rect(cell, true);
        assert_eq!(visible.left(), 95.0);
        assert_eq!(visible.right(), 105.0);

        let clipped = handle_rect(cell, false);
        assert_eq!(clipped.right(), 100.0);
    }
}
