//! Resize gesture lifecycle.
//!
//! A [`ResizeController`] turns one pointer drag into a sequence of Width
//! Vector updates:
//! - `start_resize` snapshots the widths and the pointer position
//! - every pointer move emits a fresh, clamped Width Vector to the callback
//! - the first pointer up ends the gesture and releases everything it holds
//!
//! At most one gesture is active per [`GestureTracker`], and every
//! controller wired to the same environment shares one tracker. Starting a
//! gesture cancels whichever gesture is live first, even one started by
//! another controller, so two listener sets never race on the same widths
//! or on the document style.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::document::{DocumentStyle, SelectionOverride};
use super::pointer::{PointerEvent, PointerEvents, Subscription};
use super::Bounds;

/// Callback receiving every Width Vector produced during a gesture.
pub type SizesCallback = Rc<dyn Fn(Vec<f32>)>;

/// Baseline captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    /// Index into the Width Vector
    pub column_index: usize,
    /// Pointer X coordinate at pointer-down
    pub start_x: f32,
    /// Width of the column at pointer-down
    pub start_width: f32,
}

impl ResizeGesture {
    /// Width of the column for a pointer currently at `pointer_x`.
    pub fn width_at(&self, pointer_x: f32, bounds: Bounds) -> f32 {
        bounds.clamp(self.start_width + (pointer_x - self.start_x))
    }

    /// Returns a copy of `sizes` with this gesture's column set to the width
    /// for `pointer_x`.
    pub fn next_sizes(&self, sizes: &[f32], pointer_x: f32, bounds: Bounds) -> Vec<f32> {
        let mut next = sizes.to_vec();
        if let Some(width) = next.get_mut(self.column_index) {
            *width = self.width_at(pointer_x, bounds);
        }
        next
    }
}

/// Gesture currently holding the pointer listener and, optionally, the
/// selection override. Fields drop in order: the listener goes first.
struct ActiveGesture {
    id: u64,
    gesture: ResizeGesture,
    _subscription: Subscription,
    _selection: Option<SelectionOverride>,
}

type GestureSlot = Rc<RefCell<Option<ActiveGesture>>>;

/// Tracks the one live gesture across every controller sharing it.
///
/// Cloning is cheap and every clone refers to the same tracker.
#[derive(Clone, Default)]
pub struct GestureTracker {
    current: Rc<RefCell<Option<Weak<RefCell<Option<ActiveGesture>>>>>>,
}

impl fmt::Debug for GestureTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureTracker")
            .field("active", &self.is_active())
            .finish()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while some controller sharing this tracker is resizing.
    pub fn is_active(&self) -> bool {
        let Some(slot) = self.current.borrow().as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        let active = slot.borrow().is_some();
        active
    }

    /// Ends the live gesture, whichever controller owns it.
    pub fn cancel_current(&self) {
        let Some(slot) = self.current.borrow_mut().take().and_then(|weak| weak.upgrade()) else {
            return;
        };
        let cancelled = slot.borrow_mut().take();
        if let Some(active) = cancelled {
            debug!(column_index = active.gesture.column_index, "column resize superseded");
        }
    }

    fn track(&self, slot: &GestureSlot) {
        *self.current.borrow_mut() = Some(Rc::downgrade(slot));
    }
}

/// Drives resize gestures for one set of columns.
pub struct ResizeController {
    pointer: PointerEvents,
    bounds: Bounds,
    on_change_sizes: SizesCallback,
    sizes: RefCell<Vec<f32>>,
    /// Set when selection must be disabled while resizing
    document: Option<DocumentStyle>,
    restore_cursor: bool,
    tracker: GestureTracker,
    active: GestureSlot,
    next_gesture_id: Cell<u64>,
}

impl fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeController")
            .field("bounds", &self.bounds)
            .field("sizes", &self.sizes.borrow())
            .field("active_column", &self.active_column())
            .field("disables_selection", &self.document.is_some())
            .finish()
    }
}

impl ResizeController {
    /// Creates a controller listening on `pointer` and reporting widths to
    /// `on_change_sizes`.
    pub fn new(pointer: PointerEvents, bounds: Bounds, on_change_sizes: SizesCallback) -> Self {
        Self {
            pointer,
            bounds,
            on_change_sizes,
            sizes: RefCell::new(Vec::new()),
            document: None,
            restore_cursor: false,
            tracker: GestureTracker::new(),
            active: Rc::new(RefCell::new(None)),
            next_gesture_id: Cell::new(0),
        }
    }

    /// Sets the initial Width Vector.
    pub fn with_sizes(self, sizes: Vec<f32>) -> Self {
        *self.sizes.borrow_mut() = sizes;
        self
    }

    /// Disables text selection on `document` for the duration of every
    /// gesture. With `restore_cursor`, the cursor is put back as well.
    pub fn with_selection_override(mut self, document: DocumentStyle, restore_cursor: bool) -> Self {
        self.document = Some(document);
        self.restore_cursor = restore_cursor;
        self
    }

    /// Shares `tracker` with other controllers, so that a gesture started
    /// here ends any gesture they have in progress.
    pub fn with_gesture_tracker(mut self, tracker: GestureTracker) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replaces the Width Vector the next gesture will read from.
    ///
    /// A gesture already in progress keeps its own snapshot.
    pub fn set_sizes(&self, sizes: Vec<f32>) {
        *self.sizes.borrow_mut() = sizes;
    }

    /// Returns a copy of the current Width Vector.
    pub fn sizes(&self) -> Vec<f32> {
        self.sizes.borrow().clone()
    }

    /// Width of the column at `index`, if the Width Vector covers it.
    pub fn size_at(&self, index: usize) -> Option<f32> {
        self.sizes.borrow().get(index).copied()
    }

    pub fn is_resizing(&self) -> bool {
        self.active.borrow().is_some()
    }

    /// Column index of the gesture in progress, if any.
    pub fn active_column(&self) -> Option<usize> {
        self.active_gesture().map(|gesture| gesture.column_index)
    }

    pub fn active_gesture(&self) -> Option<ResizeGesture> {
        self.active.borrow().as_ref().map(|active| active.gesture)
    }

    /// Starts resizing `column_index` from the pointer position in `start_event`.
    ///
    /// Any gesture still in progress on this controller or on another one
    /// sharing its tracker is cancelled first. Nothing is emitted
    /// until the first pointer move. Returns false, without starting a
    /// gesture, when the Width Vector has no entry at `column_index`.
    pub fn start_resize(&self, column_index: usize, start_event: &PointerEvent) -> bool {
        self.cancel();
        self.tracker.cancel_current();

        let snapshot = self.sizes();
        let Some(&start_width) = snapshot.get(column_index) else {
            warn!(
                column_index,
                columns = snapshot.len(),
                "resize requested for a column outside the width vector"
            );
            return false;
        };

        let gesture = ResizeGesture {
            column_index,
            start_x: start_event.x(),
            start_width,
        };

        let selection = self
            .document
            .as_ref()
            .map(|document| SelectionOverride::acquire(document, self.restore_cursor));

        let id = self.next_gesture_id.get();
        self.next_gesture_id.set(id + 1);

        let bounds = self.bounds;
        let on_change_sizes = Rc::clone(&self.on_change_sizes);
        let slot = Rc::downgrade(&self.active);
        let subscription = self.pointer.subscribe(move |event| match *event {
            PointerEvent::Move { x } => {
                let next = gesture.next_sizes(&snapshot, x, bounds);
                trace!(column_index, width = next[column_index], "column resized");
                on_change_sizes(next);
            }
            PointerEvent::Up { .. } => finish_gesture(&slot, id),
            PointerEvent::Down { .. } => {}
        });

        *self.active.borrow_mut() = Some(ActiveGesture {
            id,
            gesture,
            _subscription: subscription,
            _selection: selection,
        });
        self.tracker.track(&self.active);

        debug!(column_index, start_x = gesture.start_x, start_width, "column resize started");
        true
    }

    /// Ends the gesture in progress without emitting anything further.
    pub fn cancel(&self) {
        let cancelled = self.active.borrow_mut().take();
        if let Some(active) = cancelled {
            debug!(column_index = active.gesture.column_index, "column resize cancelled");
        }
    }
}

/// Pointer-up path: drops the gesture if it is still the active one.
fn finish_gesture(slot: &Weak<RefCell<Option<ActiveGesture>>>, id: u64) {
    let Some(slot) = slot.upgrade() else {
        return;
    };

    let finished = {
        let mut active = slot.borrow_mut();
        if active.as_ref().is_some_and(|active| active.id == id) {
            active.take()
        } else {
            None
        }
    };

    if let Some(active) = finished {
        debug!(column_index = active.gesture.column_index, "column resize finished");
    }
}
