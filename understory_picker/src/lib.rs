// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_picker --heading-base-level=0

//! Understory Picker: headless value and open state for date pickers.
//!
//! ## Overview
//!
//! A date picker juggles two values: the one its owner holds, and the one the
//! user is currently navigating to. This crate reconciles them.
//! It does not render anything. A toolkit drives a [`PickerState`] from its
//! event handlers and renders from the prop views it exposes.
//!
//! - [`PickerState`] keeps a [`Draftable`] (committed + draft value), the value a
//!   dismiss rolls back to, and the last value that parsed successfully.
//! - [`OpenState`] tracks whether the surface is visible, in controlled or
//!   uncontrolled mode.
//! - [`DateAdapter`] is the seam to a date library; the core only compares dates
//!   through it.
//! - [`ValueManager`] describes a value shape (empty value, parsing, equality,
//!   reduction). [`DateValueManager`] covers a single optional date.
//!
//! ## Notifications
//!
//! Operations return [`PickerEvents`] rather than invoking callbacks. The owner
//! applies `Change` values to its own state and hands them back with
//! [`PickerState::set_value`]. If the owner's value ever differs from what the
//! picker committed, the owner wins and the draft is discarded.
//!
//! ## Selection states
//!
//! Surface selections carry a [`SelectionState`]:
//!
//! - `Partial`: commit, stay open.
//! - `Shallow`: update the draft only.
//! - `Finish`: commit, and close unless close-on-select is disabled (mobile
//!   pickers default to staying open).
//!
//! ## Example
//!
//! ```
//! use understory_picker::{
//!     DateAdapter, DateValueManager, PickerEvent, PickerOptions, PickerState, PickerVariant,
//!     RawValue, SelectionState,
//! };
//!
//! // A toy adapter over day numbers.
//! struct Days;
//! impl DateAdapter for Days {
//!     type Date = u32;
//!     fn parse(&self, raw: &str) -> Option<u32> { raw.parse().ok() }
//!     fn is_equal(&self, a: &u32, b: &u32) -> bool { a == b }
//!     fn now(&self) -> u32 { 100 }
//!     fn format(&self, d: &u32, _: &str) -> String { d.to_string() }
//! }
//!
//! let mut picker = PickerState::new(
//!     Days,
//!     DateValueManager::<Days>::new(),
//!     PickerOptions::new(),
//!     RawValue::Date(1),
//! );
//! picker.open_picker();
//!
//! // Hovering through hours of a date-time: nothing reaches the owner.
//! let events = picker.on_date_change(Some(5), PickerVariant::Desktop, SelectionState::Shallow);
//! assert!(events.is_empty());
//! assert_eq!(picker.draft(), &Some(5));
//! assert_eq!(picker.value(), &Some(1));
//!
//! // Escape: roll back and close.
//! let events = picker.dismiss();
//! assert_eq!(events[0], PickerEvent::change(Some(1)));
//! assert!(!picker.is_open());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `tracing` and `thiserror`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`PickerOptions`],
//!   [`SelectionState`], and [`PickerVariant`].
//! - `chrono`: enables [`adapters::chrono`], a [`DateAdapter`] over
//!   `chrono::NaiveDate`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod adapters;
pub mod draft;
pub mod event;
pub mod input;
pub mod open;
pub mod state;
pub mod value;

#[cfg(test)]
mod test_support;

pub use adapter::DateAdapter;
pub use draft::{DraftAction, Draftable};
pub use event::{PickerEvent, PickerEvents, PickerListener};
pub use open::{OpenState, OpenStateError};
pub use state::{
    InputProps, PickerOptions, PickerPhase, PickerProps, PickerState, PickerVariant,
    SelectionState, WrapperProps,
};
pub use value::{DateReducer, DateValueManager, RawValue, ValueManager};
