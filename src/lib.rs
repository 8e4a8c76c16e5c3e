pub mod columns;
pub mod config;
pub mod resize;

// Export the resize core
pub use resize::{
    clamp, Bounds, CursorStyle, DocumentStyle, GestureTracker, PointerEvent, PointerEvents, ResizeController,
    ResizeEnvironment, ResizeGesture, SelectionOverride, SizesCallback, Subscription,
};

// Export the column tree and decorator
pub use columns::{
    column_decorator, collect_leaves, handle_cell_style, leaf_count, render_header, transform_columns, CellStyle,
    Column, ColumnDecorator, ColumnDecoratorOptions, ColumnGroup, ColumnNode, Header, HeaderCellProps, HeaderPart,
    LeafRange, Overflow, Position, ResizeHandle, TableInput, TableTransform, TextAlign, TransformContext,
    EXPANDER_KEY, RESIZE_HANDLE_CLASS, RESIZE_HANDLE_OFFSET, RESIZE_HANDLE_WIDTH,
};

// Export configuration
pub use config::ResizeConfig;
