//! Column descriptor tree and table transforms.
//!
//! A table's columns form a tree: leaves are the real, resizable columns and
//! map one-to-one onto Width Vector slots; groups only arrange their
//! children under a shared header.

mod decorator;
mod transform;

pub use decorator::{
    column_decorator, handle_cell_style, ColumnDecorator, ColumnDecoratorOptions, EXPANDER_KEY,
    RESIZE_HANDLE_CLASS, RESIZE_HANDLE_OFFSET, RESIZE_HANDLE_WIDTH,
};
pub use transform::{collect_leaves, leaf_count, render_header, transform_columns, LeafRange, TransformContext};

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::resize::{PointerEvent, ResizeController};

/// `overflow` of a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
}

/// `position` of a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Static,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Style declarations for a header cell. `None` means "not set".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    pub overflow: Option<Overflow>,
    pub position: Option<Position>,
    pub text_align: Option<TextAlign>,
    pub background: Option<String>,
    /// Declarations without a typed field, by property name
    pub extra: BTreeMap<String, String>,
}

impl CellStyle {
    /// Returns this style with every declaration set in `overrides` applied
    /// on top. Declarations `overrides` leaves unset are kept.
    pub fn merge(&self, overrides: &CellStyle) -> CellStyle {
        let mut extra = self.extra.clone();
        extra.extend(overrides.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        CellStyle {
            overflow: overrides.overflow.or(self.overflow),
            position: overrides.position.or(self.position),
            text_align: overrides.text_align.or(self.text_align),
            background: overrides.background.clone().or_else(|| self.background.clone()),
            extra,
        }
    }
}

/// Presentation properties of a header cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderCellProps {
    pub class_name: Option<String>,
    pub style: CellStyle,
}

/// Drag affordance that starts resizing one column.
#[derive(Clone)]
pub struct ResizeHandle {
    column_index: usize,
    controller: Rc<ResizeController>,
}

impl fmt::Debug for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHandle")
            .field("column_index", &self.column_index)
            .finish()
    }
}

impl PartialEq for ResizeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.column_index == other.column_index && Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl ResizeHandle {
    pub fn new(column_index: usize, controller: Rc<ResizeController>) -> Self {
        Self {
            column_index,
            controller,
        }
    }

    /// Width Vector slot this handle resizes.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Pointer-down on the handle: starts a gesture for its column.
    pub fn pointer_down(&self, event: &PointerEvent) -> bool {
        self.controller.start_resize(self.column_index, event)
    }

    /// Returns true while this handle's column is being resized.
    pub fn is_active(&self) -> bool {
        self.controller.active_column() == Some(self.column_index)
    }
}

/// One piece of header content.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderPart {
    Text(String),
    ResizeHandle(ResizeHandle),
}

/// Ordered header content of a column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Header {
    parts: Vec<HeaderPart>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![HeaderPart::Text(text.into())],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[HeaderPart] {
        &self.parts
    }

    pub fn push(&mut self, part: HeaderPart) {
        self.parts.push(part);
    }

    /// Concatenated text parts.
    pub fn text_content(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                HeaderPart::Text(text) => Some(text.as_str()),
                HeaderPart::ResizeHandle(_) => None,
            })
            .collect()
    }

    /// First resize handle in this header, if any.
    pub fn resize_handle(&self) -> Option<&ResizeHandle> {
        self.parts.iter().find_map(|part| match part {
            HeaderPart::ResizeHandle(handle) => Some(handle),
            HeaderPart::Text(_) => None,
        })
    }
}

/// A leaf column: one Width Vector slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub key: String,
    /// Fallback header text when `title` is empty
    pub name: String,
    pub title: Header,
    pub width: Option<f32>,
    pub align: TextAlign,
    pub header_cell: HeaderCellProps,
}

impl Column {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: Header) -> Self {
        self.title = title;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_header_cell(mut self, header_cell: HeaderCellProps) -> Self {
        self.header_cell = header_cell;
        self
    }

    pub fn resize_handle(&self) -> Option<&ResizeHandle> {
        self.title.resize_handle()
    }

    /// Title, or the name when the title is empty.
    pub fn display_header(&self) -> Header {
        if self.title.is_empty() {
            Header::text(self.name.as_str())
        } else {
            self.title.clone()
        }
    }
}

/// A grouping node spanning its children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnGroup {
    pub key: String,
    pub name: String,
    pub title: Header,
    pub header_cell: HeaderCellProps,
    pub children: Vec<ColumnNode>,
}

impl ColumnGroup {
    pub fn new(key: impl Into<String>, name: impl Into<String>, children: Vec<ColumnNode>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            children,
            ..Self::default()
        }
    }
}

/// A node of the column tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnNode {
    Leaf(Column),
    Group(ColumnGroup),
}

impl From<Column> for ColumnNode {
    fn from(column: Column) -> Self {
        ColumnNode::Leaf(column)
    }
}

impl From<ColumnGroup> for ColumnNode {
    fn from(group: ColumnGroup) -> Self {
        ColumnNode::Group(group)
    }
}

impl ColumnNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, ColumnNode::Leaf(_))
    }

    pub fn key(&self) -> &str {
        match self {
            ColumnNode::Leaf(column) => &column.key,
            ColumnNode::Group(group) => &group.key,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ColumnNode::Leaf(column) => &column.name,
            ColumnNode::Group(group) => &group.name,
        }
    }

    pub fn title(&self) -> &Header {
        match self {
            ColumnNode::Leaf(column) => &column.title,
            ColumnNode::Group(group) => &group.title,
        }
    }

    pub fn header_cell(&self) -> &HeaderCellProps {
        match self {
            ColumnNode::Leaf(column) => &column.header_cell,
            ColumnNode::Group(group) => &group.header_cell,
        }
    }

    /// Number of leaf columns in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            ColumnNode::Leaf(_) => 1,
            ColumnNode::Group(group) => leaf_count(&group.children),
        }
    }

    /// Height of this subtree in header rows.
    pub fn depth(&self) -> usize {
        match self {
            ColumnNode::Leaf(_) => 1,
            ColumnNode::Group(group) => 1 + group.children.iter().map(ColumnNode::depth).max().unwrap_or(0),
        }
    }
}

/// Columns and rows flowing through a table transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TableInput<R> {
    pub columns: Vec<ColumnNode>,
    pub data_source: Vec<R>,
}

impl<R> TableInput<R> {
    pub fn new(columns: Vec<ColumnNode>, data_source: Vec<R>) -> Self {
        Self { columns, data_source }
    }
}

/// A structural rewrite of a table's columns and rows.
pub trait TableTransform<R> {
    fn transform(&self, input: TableInput<R>) -> TableInput<R>;
}

impl<R, F> TableTransform<R> for F
where
    F: Fn(TableInput<R>) -> TableInput<R>,
{
    fn transform(&self, input: TableInput<R>) -> TableInput<R> {
        self(input)
    }
}
