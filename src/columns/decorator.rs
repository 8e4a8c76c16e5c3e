//! Column decorator: makes every leaf column resizable.
//!
//! For each leaf the decorator:
//! - assigns the width from the Width Vector slot at the leaf's range start
//! - appends a [`ResizeHandle`] after the existing header content
//! - merges `overflow: visible` and `position: relative` into the header cell
//!   style so the handle can hang just past the column's right edge
//!
//! Groups keep their own fields; only their children are decorated.
//! Optionally a width-less filler column is appended at the end.

use std::rc::Rc;

use super::transform::transform_columns;
use super::{
    CellStyle, Column, ColumnNode, HeaderCellProps, HeaderPart, Overflow, Position, ResizeHandle, TableInput,
    TableTransform,
};
use crate::config::ResizeConfig;
use crate::resize::{Bounds, ResizeController, ResizeEnvironment, SizesCallback, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};

/// Class name carried by every resize handle.
pub const RESIZE_HANDLE_CLASS: &str = "resize-handle";

/// Width of the handle's hit area, in pixels.
pub const RESIZE_HANDLE_WIDTH: f32 = 10.0;

/// Horizontal offset of the handle's right edge from the column's right edge.
pub const RESIZE_HANDLE_OFFSET: f32 = -5.0;

/// Key of the filler column appended by `append_expander`.
pub const EXPANDER_KEY: &str = "__expander";

/// Options for [`column_decorator`].
///
/// `sizes` must hold one entry per leaf column; a leaf without an entry is
/// left without a width and its handle does nothing.
#[derive(Clone)]
pub struct ColumnDecoratorOptions {
    pub sizes: Vec<f32>,
    pub on_change_sizes: SizesCallback,
    pub min_size: f32,
    pub max_size: f32,
    pub append_expander: bool,
    pub disable_user_select_when_resizing: bool,
    /// Put the cursor back when a gesture ends (only with
    /// `disable_user_select_when_resizing`)
    pub restore_cursor_on_release: bool,
}

impl ColumnDecoratorOptions {
    pub fn new<F>(sizes: Vec<f32>, on_change_sizes: F) -> Self
    where
        F: Fn(Vec<f32>) + 'static,
    {
        Self {
            sizes,
            on_change_sizes: Rc::new(on_change_sizes),
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            append_expander: false,
            disable_user_select_when_resizing: false,
            restore_cursor_on_release: false,
        }
    }

    /// Options with every tunable taken from `config`.
    pub fn from_config<F>(config: &ResizeConfig, sizes: Vec<f32>, on_change_sizes: F) -> Self
    where
        F: Fn(Vec<f32>) + 'static,
    {
        let bounds = config.bounds();
        Self {
            min_size: bounds.min_size,
            max_size: bounds.max_size,
            append_expander: config.append_expander,
            disable_user_select_when_resizing: config.disable_user_select_when_resizing,
            restore_cursor_on_release: config.restore_cursor_on_release,
            ..Self::new(sizes, on_change_sizes)
        }
    }

    pub fn min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn max_size(mut self, max_size: f32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn append_expander(mut self, append_expander: bool) -> Self {
        self.append_expander = append_expander;
        self
    }

    pub fn disable_user_select_when_resizing(mut self, disable: bool) -> Self {
        self.disable_user_select_when_resizing = disable;
        self
    }

    pub fn restore_cursor_on_release(mut self, restore: bool) -> Self {
        self.restore_cursor_on_release = restore;
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_size, self.max_size)
    }
}

/// Table transform produced by [`column_decorator`].
#[derive(Debug)]
pub struct ColumnDecorator {
    controller: Rc<ResizeController>,
    append_expander: bool,
}

/// Builds a decorator whose handles resize columns through `env`.
pub fn column_decorator(env: &ResizeEnvironment, options: ColumnDecoratorOptions) -> ColumnDecorator {
    let bounds = options.bounds();
    let mut controller = ResizeController::new(env.pointer.clone(), bounds, options.on_change_sizes)
        .with_sizes(options.sizes)
        .with_gesture_tracker(env.gestures.clone());
    if options.disable_user_select_when_resizing {
        controller = controller.with_selection_override(env.document.clone(), options.restore_cursor_on_release);
    }

    ColumnDecorator {
        controller: Rc::new(controller),
        append_expander: options.append_expander,
    }
}

impl ColumnDecorator {
    /// Controller shared by every handle this decorator creates.
    pub fn controller(&self) -> &Rc<ResizeController> {
        &self.controller
    }

    /// Replaces the Width Vector used for the next transform and the next
    /// gesture.
    pub fn set_sizes(&self, sizes: Vec<f32>) {
        self.controller.set_sizes(sizes);
    }

    pub fn sizes(&self) -> Vec<f32> {
        self.controller.sizes()
    }

    fn decorate_leaf(&self, column: Column, index: usize) -> Column {
        let mut title = column.display_header();
        title.push(HeaderPart::ResizeHandle(ResizeHandle::new(index, Rc::clone(&self.controller))));

        let header_cell = HeaderCellProps {
            style: column.header_cell.style.merge(&handle_cell_style()),
            ..column.header_cell
        };

        Column {
            width: self.controller.size_at(index),
            title,
            header_cell,
            ..column
        }
    }
}

impl<R> TableTransform<R> for ColumnDecorator {
    fn transform(&self, input: TableInput<R>) -> TableInput<R> {
        let TableInput { columns, data_source } = input;

        let mut columns = transform_columns(columns, |node, ctx| match node {
            ColumnNode::Leaf(column) => ColumnNode::Leaf(self.decorate_leaf(column, ctx.range.start)),
            group @ ColumnNode::Group(_) => group,
        });

        if self.append_expander {
            columns.push(ColumnNode::Leaf(Column::new(EXPANDER_KEY, "")));
        }

        TableInput { columns, data_source }
    }
}

/// Header cell declarations the resize handle needs.
pub fn handle_cell_style() -> CellStyle {
    CellStyle {
        overflow: Some(Overflow::Visible),
        position: Some(Position::Relative),
        ..CellStyle::default()
    }
}
