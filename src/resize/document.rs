//! Global document presentation state.
//!
//! Holds the two pieces of document-level styling a resize gesture touches:
//! the text-selection mode and the cursor. [`SelectionOverride`] is the
//! scoped acquisition a gesture takes while it runs.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Text-selection value applied while a gesture holds the override.
pub const USER_SELECT_NONE: &str = "none";

/// Cursor appearance requested for the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Auto,
    Default,
    Pointer,
    Text,
    ColResize,
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CursorStyle::Auto => "auto",
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
            CursorStyle::Text => "text",
            CursorStyle::ColResize => "col-resize",
        };
        f.write_str(name)
    }
}

/// Values in place before the first override was acquired.
#[derive(Debug, Clone)]
struct Baseline {
    user_select: String,
    cursor: CursorStyle,
}

#[derive(Debug, Default)]
struct StyleState {
    user_select: String,
    cursor: CursorStyle,
    /// Number of overrides currently held
    holders: usize,
    baseline: Option<Baseline>,
}

/// Shared handle to the document-level style.
///
/// Every clone refers to the same underlying state.
#[derive(Clone, Default)]
pub struct DocumentStyle {
    state: Rc<RefCell<StyleState>>,
}

impl fmt::Debug for DocumentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DocumentStyle")
            .field("user_select", &state.user_select)
            .field("cursor", &state.cursor)
            .field("holders", &state.holders)
            .finish()
    }
}

impl DocumentStyle {
    /// Creates a document style with an empty selection mode and auto cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text-selection mode. Empty means "not set".
    pub fn user_select(&self) -> String {
        self.state.borrow().user_select.clone()
    }

    pub fn set_user_select(&self, value: impl Into<String>) {
        self.state.borrow_mut().user_select = value.into();
    }

    pub fn cursor(&self) -> CursorStyle {
        self.state.borrow().cursor
    }

    pub fn set_cursor(&self, cursor: CursorStyle) {
        self.state.borrow_mut().cursor = cursor;
    }

    /// Returns true while text selection is disabled.
    pub fn selection_disabled(&self) -> bool {
        self.state.borrow().user_select == USER_SELECT_NONE
    }

    /// Returns true while a [`SelectionOverride`] is held.
    pub fn is_overridden(&self) -> bool {
        self.state.borrow().holders > 0
    }
}

/// Scoped override of the document's selection mode and cursor.
///
/// Acquiring disables selection and shows the column-resize cursor. The
/// values in place before the first override are kept in the document
/// itself, so overlapping overrides share one baseline. It is written back
/// when the last override is released, either by
/// [`SelectionOverride::release`] or on drop. The cursor is only restored
/// when that last override was acquired with `restore_cursor`.
pub struct SelectionOverride {
    document: DocumentStyle,
    restore_cursor: bool,
    released: bool,
}

impl fmt::Debug for SelectionOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionOverride")
            .field("previous_user_select", &self.previous_user_select())
            .field("restore_cursor", &self.restore_cursor)
            .field("released", &self.released)
            .finish()
    }
}

impl SelectionOverride {
    pub fn acquire(document: &DocumentStyle, restore_cursor: bool) -> Self {
        {
            let mut guard = document.state.borrow_mut();
            let state = &mut *guard;
            let user_select = std::mem::replace(&mut state.user_select, USER_SELECT_NONE.to_string());
            let cursor = std::mem::replace(&mut state.cursor, CursorStyle::ColResize);
            if state.holders == 0 {
                state.baseline = Some(Baseline { user_select, cursor });
            } else {
                warn!(holders = state.holders, "selection override acquired while another is still held");
            }
            state.holders += 1;
        }

        trace!("text selection disabled");

        Self {
            document: document.clone(),
            restore_cursor,
            released: false,
        }
    }

    /// The selection mode that will be written back once every override
    /// is released.
    pub fn previous_user_select(&self) -> String {
        self.document
            .state
            .borrow()
            .baseline
            .as_ref()
            .map(|baseline| baseline.user_select.clone())
            .unwrap_or_default()
    }

    /// Releases this override now.
    pub fn release(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let mut guard = self.document.state.borrow_mut();
        let state = &mut *guard;
        state.holders = state.holders.saturating_sub(1);
        if state.holders > 0 {
            return;
        }

        if let Some(baseline) = state.baseline.take() {
            state.user_select = baseline.user_select;
            if self.restore_cursor {
                state.cursor = baseline.cursor;
            }
        }

        trace!(restored = %state.user_select, cursor = %state.cursor, "text selection restored");
    }
}

impl Drop for SelectionOverride {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_disables_selection() {
        let document = DocumentStyle::new();
        let guard = SelectionOverride::acquire(&document, false);

        assert_eq!(document.user_select(), USER_SELECT_NONE);
        assert_eq!(document.cursor(), CursorStyle::ColResize);
        assert!(document.selection_disabled());
        assert!(document.is_overridden());
        assert_eq!(guard.previous_user_select(), "");
    }

    #[test]
    fn test_overlapping_overrides_keep_first_baseline() {
        let document = DocumentStyle::new();
        document.set_user_select("text");

        let first = SelectionOverride::acquire(&document, false);
        let second = SelectionOverride::acquire(&document, false);
        assert_eq!(second.previous_user_select(), "text");

        first.release();
        assert_eq!(document.user_select(), USER_SELECT_NONE);
        assert!(document.is_overridden());

        second.release();
        assert_eq!(document.user_select(), "text");
        assert!(!document.is_overridden());
    }

    #[test]
    fn test_release_restores_empty_selection() {
        let document = DocumentStyle::new();
        SelectionOverride::acquire(&document, false).release();

        assert_eq!(document.user_select(), "");
        assert!(!document.is_overridden());
    }

    #[test]
    fn test_release_restores_custom_selection() {
        let document = DocumentStyle::new();
        document.set_user_select("text");

        let guard = SelectionOverride::acquire(&document, false);
        assert_eq!(document.user_select(), USER_SELECT_NONE);
        drop(guard);

        assert_eq!(document.user_select(), "text");
    }

    #[test]
    fn test_cursor_left_as_resize_by_default() {
        let document = DocumentStyle::new();
        document.set_cursor(CursorStyle::Text);

        SelectionOverride::acquire(&document, false).release();
        assert_eq!(document.cursor(), CursorStyle::ColResize);
    }

    #[test]
    fn test_cursor_restored_when_requested() {
        let document = DocumentStyle::new();
        document.set_cursor(CursorStyle::Text);

        SelectionOverride::acquire(&document, true).release();
        assert_eq!(document.cursor(), CursorStyle::Text);
    }

    #[test]
    fn test_cursor_style_serde_names() {
        let json = serde_json::to_string(&CursorStyle::ColResize).unwrap();
        assert_eq!(json, "\"col-resize\"");
        assert_eq!(CursorStyle::ColResize.to_string(), "col-resize");
    }
}
