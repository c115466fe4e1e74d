// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by picker operations.
//!
//! Picker operations never call back into the owner. Each one returns the
//! notifications it produced, in the order the owner should observe them.
//! Hosts that prefer callbacks can implement [`PickerListener`] and call
//! [`PickerEvents::dispatch`].
//!
//! ```
//! use understory_picker::{PickerEvent, PickerEvents, PickerListener};
//!
//! #[derive(Default)]
//! struct Log {
//!     changes: Vec<Option<u32>>,
//!     closed: bool,
//! }
//!
//! impl PickerListener<Option<u32>> for Log {
//!     fn on_change(&mut self, value: &Option<u32>, _keyboard_input: Option<&str>) {
//!         self.changes.push(*value);
//!     }
//!     fn on_close(&mut self) {
//!         self.closed = true;
//!     }
//! }
//!
//! let mut events = PickerEvents::new();
//! events.push(PickerEvent::change(Some(3)));
//! events.push(PickerEvent::Close);
//!
//! let mut log = Log::default();
//! events.dispatch(&mut log);
//! assert_eq!(log.changes, vec![Some(3)]);
//! assert!(log.closed);
//! ```

use alloc::string::String;
use core::ops::Deref;

use smallvec::SmallVec;

/// A single notification for the picker's owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerEvent<V> {
    /// The owner's value should become `value`.
    ///
    /// `keyboard_input` carries the raw text when the change came from typing.
    Change {
        /// New value.
        value: V,
        /// Raw text typed by the user, if any.
        keyboard_input: Option<String>,
    },
    /// The picker asked to open.
    Open,
    /// The picker asked to close.
    Close,
    /// The value was accepted and the picker closed.
    Accept(V),
}

impl<V> PickerEvent<V> {
    /// A change with no keyboard text.
    pub fn change(value: V) -> Self {
        Self::Change {
            value,
            keyboard_input: None,
        }
    }

    /// The value carried by a `Change` or `Accept` notification.
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Change { value, .. } | Self::Accept(value) => Some(value),
            Self::Open | Self::Close => None,
        }
    }
}

/// Callback-style receiver for [`PickerEvent`]s. Every method defaults to a no-op.
pub trait PickerListener<V> {
    /// Called for [`PickerEvent::Change`].
    fn on_change(&mut self, value: &V, keyboard_input: Option<&str>) {
        let _ = (value, keyboard_input);
    }
    /// Called for [`PickerEvent::Open`].
    fn on_open(&mut self) {}
    /// Called for [`PickerEvent::Close`].
    fn on_close(&mut self) {}
    /// Called for [`PickerEvent::Accept`].
    fn on_accept(&mut self, value: &V) {
        let _ = value;
    }
}

/// Ordered notifications produced by one picker operation.
///
/// The longest sequence an operation emits is change, close, accept, so this
/// stays inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerEvents<V> {
    events: SmallVec<[PickerEvent<V>; 3]>,
}

impl<V> PickerEvents<V> {
    /// An empty sequence.
    pub fn new() -> Self {
        Self {
            events: SmallVec::new(),
        }
    }

    /// Append a notification.
    pub fn push(&mut self, event: PickerEvent<V>) {
        self.events.push(event);
    }

    /// Whether a close was requested.
    pub fn closes(&self) -> bool {
        self.events.iter().any(|e| matches!(e, PickerEvent::Close))
    }

    /// The last value sent to the owner through `Change`, if any.
    pub fn last_change(&self) -> Option<&V> {
        self.events.iter().rev().find_map(|e| match e {
            PickerEvent::Change { value, .. } => Some(value),
            _ => None,
        })
    }

    /// Deliver every notification to `listener`, in order.
    pub fn dispatch(&self, listener: &mut impl PickerListener<V>) {
        for event in &self.events {
            match event {
                PickerEvent::Change {
                    value,
                    keyboard_input,
                } => listener.on_change(value, keyboard_input.as_deref()),
                PickerEvent::Open => listener.on_open(),
                PickerEvent::Close => listener.on_close(),
                PickerEvent::Accept(value) => listener.on_accept(value),
            }
        }
    }
}

impl<V> Default for PickerEvents<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Deref for PickerEvents<V> {
    type Target = [PickerEvent<V>];

    fn deref(&self) -> &Self::Target {
        &self.events
    }
}

impl<V> From<PickerEvent<V>> for PickerEvents<V> {
    fn from(event: PickerEvent<V>) -> Self {
        let mut events = Self::new();
        events.push(event);
        events
    }
}

impl<V> IntoIterator for PickerEvents<V> {
    type Item = PickerEvent<V>;
    type IntoIter = smallvec::IntoIter<[PickerEvent<V>; 3]>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
