//! Centralized state for the resize demo.
//!
//! The demo plays the role of the owning table: it holds the Width Vector,
//! receives every update from the resize controller through the
//! `on_change_sizes` callback, and decorates its column tree each frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use colresize::{
    column_decorator, leaf_count, Bounds, ColumnDecorator, ColumnDecoratorOptions, ColumnNode, ResizeConfig,
    ResizeEnvironment, TableInput, TableTransform,
};
use tracing::info;

use super::sample_data::{order_columns, OrderRow};

/// Demo table state.
pub struct AppState {
    /// Pointer hub and document style shared with the resize core
    pub env: ResizeEnvironment,
    /// Decorator tunables, editable from the controls bar
    pub config: ResizeConfig,
    /// Undecorated column tree
    columns: Vec<ColumnNode>,
    rows: Vec<OrderRow>,
    /// Width Vector, written by the resize callback
    sizes: Rc<RefCell<Vec<f32>>>,
    /// Number of width updates received so far
    updates: Rc<Cell<u64>>,
    decorator: ColumnDecorator,
}

impl AppState {
    pub fn new(config: ResizeConfig, rows: Vec<OrderRow>) -> Self {
        let env = ResizeEnvironment::new();
        let columns = order_columns();
        let sizes = Rc::new(RefCell::new(config.initial_sizes(leaf_count(&columns))));
        let updates = Rc::new(Cell::new(0));
        let decorator = build_decorator(&env, &config, &sizes, &updates);

        Self {
            env,
            config,
            columns,
            rows,
            sizes,
            updates,
            decorator,
        }
    }

    /// Current Width Vector.
    pub fn sizes(&self) -> Vec<f32> {
        self.sizes.borrow().clone()
    }

    pub fn updates(&self) -> u64 {
        self.updates.get()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column index being resized, if a gesture is in progress.
    pub fn active_column(&self) -> Option<usize> {
        self.decorator.controller().active_column()
    }

    pub fn is_resizing(&self) -> bool {
        self.decorator.controller().is_resizing()
    }

    /// Width limits the live decorator clamps to.
    pub fn bounds(&self) -> Bounds {
        self.decorator.controller().bounds()
    }

    /// Columns and rows with widths and resize handles applied.
    pub fn decorated_table(&self) -> TableInput<OrderRow> {
        self.decorator.set_sizes(self.sizes());
        self.decorator
            .transform(TableInput::new(self.columns.clone(), self.rows.clone()))
    }

    /// Puts every column back to the configured default width.
    pub fn reset_widths(&mut self) {
        self.decorator.controller().cancel();
        *self.sizes.borrow_mut() = self.config.initial_sizes(leaf_count(&self.columns));
        info!("column widths reset");
    }

    /// Rebuilds the decorator after `config` changed, cancelling any gesture
    /// the previous one was running.
    pub fn apply_config(&mut self) {
        self.decorator.controller().cancel();
        let sizes: Vec<f32> = {
            let bounds = self.config.bounds();
            self.sizes.borrow().iter().map(|&width| bounds.clamp(width)).collect()
        };
        *self.sizes.borrow_mut() = sizes;
        self.decorator = build_decorator(&self.env, &self.config, &self.sizes, &self.updates);
        info!(config = ?self.config, "resize configuration applied");
    }
}

fn build_decorator(
    env: &ResizeEnvironment,
    config: &ResizeConfig,
    sizes: &Rc<RefCell<Vec<f32>>>,
    updates: &Rc<Cell<u64>>,
) -> ColumnDecorator {
    let sink = Rc::clone(sizes);
    let counter = Rc::clone(updates);
    let options = ColumnDecoratorOptions::from_config(config, sizes.borrow().clone(), move |next| {
        *sink.borrow_mut() = next;
        counter.set(counter.get() + 1);
    });
    column_decorator(env, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colresize::{collect_leaves, PointerEvent};

    use crate::app::sample_data::generate_orders;

    #[test]
    fn test_callback_updates_width_vector() {
        let state = AppState::new(ResizeConfig::default(), generate_orders(3, 1));
        let table = state.decorated_table();
        let handle = collect_leaves(&table.columns)[2].resize_handle().cloned().unwrap();

        handle.pointer_down(&PointerEvent::Down { x: 100.0 });
        assert_eq!(state.active_column(), Some(2));
        state.env.pointer.dispatch(PointerEvent::Move { x: 130.0 });
        state.env.pointer.dispatch(PointerEvent::Up { x: 130.0 });

        assert_eq!(state.sizes()[2], 150.0);
        assert_eq!(state.updates(), 1);
        assert!(!state.is_resizing());

        let table = state.decorated_table();
        assert_eq!(collect_leaves(&table.columns)[2].width, Some(150.0));
        assert_eq!(table.data_source.len(), 3);
    }

    #[test]
    fn test_apply_config_clamps_existing_widths() {
        let mut state = AppState::new(ResizeConfig::default(), vec![]);
        state.config.max_size = Some(80.0);
        state.apply_config();

        assert!(state.sizes().iter().all(|&width| width == 80.0));
        assert_eq!(state.bounds(), Bounds::new(40.0, 80.0));
    }

    #[test]
    fn test_apply_config_cancels_gesture() {
        let mut state = AppState::new(ResizeConfig::default(), vec![]);
        let table = state.decorated_table();
        let handle = collect_leaves(&table.columns)[0].resize_handle().cloned().unwrap();
        drop(table);

        handle.pointer_down(&PointerEvent::Down { x: 0.0 });
        state.config.append_expander = true;
        state.apply_config();

        assert!(!handle.is_active());
        assert!(!state.is_resizing());
        assert_eq!(state.env.pointer.listener_count(), 0);
    }

    #[test]
    fn test_reset_widths() {
        let mut state = AppState::new(ResizeConfig::default(), vec![]);
        *state.sizes.borrow_mut() = vec![1.0; 9];
        state.reset_widths();
        assert_eq!(state.sizes(), vec![120.0; 9]);
    }
}
