//! Drag-to-resize core.
//!
//! This module contains the interaction state machine that turns a pointer
//! drag on a column boundary into a stream of Width Vector updates:
//! - Width clamping (`clamp`, `Bounds`)
//! - The process-wide pointer notification hub (`PointerEvents`)
//! - Global document presentation state (`DocumentStyle`)
//! - The gesture lifecycle (`ResizeController`)

mod controller;
mod document;
mod pointer;

pub use controller::{GestureTracker, ResizeController, ResizeGesture, SizesCallback};
pub use document::{CursorStyle, DocumentStyle, SelectionOverride, USER_SELECT_NONE};
pub use pointer::{PointerEvent, PointerEvents, Subscription};

/// Default lower bound for a column width, in pixels.
pub const DEFAULT_MIN_SIZE: f32 = 40.0;

/// Default upper bound for a column width (unbounded).
pub const DEFAULT_MAX_SIZE: f32 = f32::INFINITY;

/// Clamps `x` into `[min, max]`.
///
/// Computed as `max(min, min(x, max))`. With inverted bounds (`min > max`)
/// the outer `max` wins and every input maps to `min`; callers are expected
/// to keep `min <= max`.
pub fn clamp(min: f32, x: f32, max: f32) -> f32 {
    min.max(x.min(max))
}

/// Host-provided shared state a resize gesture interacts with.
///
/// The host UI dispatches its pointer notifications into `pointer` and
/// mirrors `document` onto its own selection and cursor handling. Every
/// decorator built from one environment shares `gestures`, so only one of
/// them can be resizing at a time.
#[derive(Debug, Clone, Default)]
pub struct ResizeEnvironment {
    pub pointer: PointerEvents,
    pub document: DocumentStyle,
    pub gestures: GestureTracker,
}

impl ResizeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Uniform width limits applied to every column of one decorator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_size: f32,
    pub max_size: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl Bounds {
    pub fn new(min_size: f32, max_size: f32) -> Self {
        Self { min_size, max_size }
    }

    /// Clamps a candidate width into these bounds.
    pub fn clamp(&self, width: f32) -> f32 {
        clamp(self.min_size, width, self.max_size)
    }

    /// Returns true if the bounds are well formed (`min_size <= max_size`).
    pub fn is_valid(&self) -> bool {
        self.min_size <= self.max_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_below_min() {
        assert_eq!(clamp(40.0, 10.0, 300.0), 40.0);
    }

    #[test]
    fn test_clamp_above_max() {
        assert_eq!(clamp(40.0, 550.0, 300.0), 300.0);
    }

    #[test]
    fn test_clamp_inside_range() {
        assert_eq!(clamp(40.0, 130.0, 300.0), 130.0);
    }

    #[test]
    fn test_clamp_is_idempotent_and_monotonic() {
        let (min, max) = (40.0, 300.0);
        let mut prev = f32::NEG_INFINITY;
        for i in -10..=70 {
            let x = i as f32 * 10.0;
            let once = clamp(min, x, max);
            assert_eq!(clamp(min, once, max), once);
            assert!((min..=max).contains(&once));
            assert!(once >= prev);
            prev = once;
        }
    }

    #[test]
    fn test_clamp_unbounded_max() {
        assert_eq!(clamp(DEFAULT_MIN_SIZE, 10_000.0, DEFAULT_MAX_SIZE), 10_000.0);
    }

    #[test]
    fn test_inverted_bounds_degenerate() {
        let bounds = Bounds::new(300.0, 40.0);
        assert!(!bounds.is_valid());
        for x in [0.0, 100.0, 1000.0] {
            assert_eq!(bounds.clamp(x), 300.0);
        }
    }
}
