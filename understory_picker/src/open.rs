// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/close controller for a picker surface.
//!
//! ## Modes
//!
//! The mode is fixed when the controller is built:
//!
//! - **Uncontrolled** (`OpenState::new(None)`): the controller owns the flag.
//!   Requests update it directly.
//! - **Controlled** (`OpenState::new(Some(open))`): the owner's flag is the
//!   single source of truth. Requests leave the flag untouched and only produce
//!   notifications; the owner answers by calling [`OpenState::sync`].
//!
//! In both modes every request produces [`PickerEvent::Open`] or
//! [`PickerEvent::Close`], even when the flag already has that value.
//!
//! ```
//! use understory_picker::{OpenState, PickerEvent};
//!
//! let mut open = OpenState::new(Some(false));
//! assert_eq!(open.request::<()>(true), PickerEvent::Open);
//! // Still closed until the owner agrees.
//! assert!(!open.is_open());
//! open.sync(Some(true)).unwrap();
//! assert!(open.is_open());
//! ```

use thiserror::Error;

use crate::event::PickerEvent;

/// Raised when an owner switches a controller between controlled and uncontrolled mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum OpenStateError {
    /// A controlled controller was handed no flag.
    #[error("open state is controlled; an explicit `open` flag is required")]
    MissingControlledFlag,
    /// An uncontrolled controller was handed a flag.
    #[error("open state is uncontrolled; it cannot start following an `open` flag")]
    UnexpectedControlledFlag,
}

/// Visibility of the picker surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpenState {
    controlled: bool,
    open: bool,
}

impl OpenState {
    /// Create a controller. `Some(_)` selects controlled mode with that initial flag.
    pub fn new(open: Option<bool>) -> Self {
        Self {
            controlled: open.is_some(),
            open: open.unwrap_or(false),
        }
    }

    /// Whether the surface is currently visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the owner drives the flag.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Ask for the surface to open or close.
    ///
    /// Uncontrolled controllers apply the change immediately.
    pub fn request<V>(&mut self, open: bool) -> PickerEvent<V> {
        if !self.controlled {
            self.open = open;
        }
        tracing::debug!(open, controlled = self.controlled, "open state requested");
        if open {
            PickerEvent::Open
        } else {
            PickerEvent::Close
        }
    }

    /// Shorthand for `request(true)`.
    pub fn open<V>(&mut self) -> PickerEvent<V> {
        self.request(true)
    }

    /// Shorthand for `request(false)`.
    pub fn close<V>(&mut self) -> PickerEvent<V> {
        self.request(false)
    }

    /// Push the owner's `open` flag into the controller.
    ///
    /// Uncontrolled controllers accept `None` as a no-op.
    pub fn sync(&mut self, open: Option<bool>) -> Result<(), OpenStateError> {
        match (self.controlled, open) {
            (true, Some(open)) => {
                self.open = open;
                Ok(())
            }
            (false, None) => Ok(()),
            (true, None) => {
                tracing::debug!("controlled open state lost its flag");
                Err(OpenStateError::MissingControlledFlag)
            }
            (false, Some(_)) => {
                tracing::debug!("uncontrolled open state received a flag");
                Err(OpenStateError::UnexpectedControlledFlag)
            }
        }
    }
}

impl Default for OpenState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_requests_apply_immediately() {
        let mut state = OpenState::default();
        assert!(!state.is_open());
        assert!(!state.is_controlled());

        assert_eq!(state.open::<()>(), PickerEvent::Open);
        assert!(state.is_open());
        assert_eq!(state.close::<()>(), PickerEvent::Close);
        assert!(!state.is_open());
    }

    #[test]
    fn controlled_requests_only_notify() {
        let mut state = OpenState::new(Some(true));
        assert!(state.is_open());

        assert_eq!(state.close::<()>(), PickerEvent::Close);
        assert!(state.is_open(), "owner has not answered yet");

        state.sync(Some(false)).unwrap();
        assert!(!state.is_open());
    }

    #[test]
    fn repeated_close_still_notifies() {
        let mut state = OpenState::default();
        assert_eq!(state.close::<()>(), PickerEvent::Close);
        assert_eq!(state.close::<()>(), PickerEvent::Close);
        assert!(!state.is_open());
    }

    #[test]
    fn mixing_modes_is_rejected() {
        let mut controlled = OpenState::new(Some(true));
        assert_eq!(
            controlled.sync(None),
            Err(OpenStateError::MissingControlledFlag)
        );
        assert!(controlled.is_open(), "state is untouched on error");

        let mut uncontrolled = OpenState::new(None);
        assert_eq!(uncontrolled.sync(None), Ok(()));
        assert_eq!(
            uncontrolled.sync(Some(true)),
            Err(OpenStateError::UnexpectedControlledFlag)
        );
        assert!(!uncontrolled.is_open());
    }
}
