// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value reconciliation core.
//!
//! [`PickerState`] owns the committed/draft pair, the rollback value used by
//! dismiss, the last value that parsed successfully, and the open state.
//!
//! ## Commit rules
//!
//! Every finalizing action funnels through [`PickerState::accept_date`], which
//! always emits a change and, when closing, also emits close and accept.
//!
//! | Operation | Draft | Commits | Closes |
//! |---|---|---|---|
//! | `on_date_change(.., Partial)` | new value | yes | no |
//! | `on_date_change(.., Shallow)` | new value | no | no |
//! | `on_date_change(.., Finish)` | new value | yes | unless close-on-select is disabled |
//! | `accept` | unchanged | draft | yes |
//! | `dismiss` | rollback value | rollback value | yes |
//! | `clear` | empty value | empty value | yes |
//! | `set_today` | today | today | unless close-on-select is disabled |
//!
//! For `Finish`, an explicit `disable_close_on_select` always wins. When it is
//! unset, [`PickerVariant::Mobile`] stays open and [`PickerVariant::Desktop`] closes.
//! `set_today` ignores the variant and closes unless the flag is `Some(true)`.
//!
//! ## Owner resync
//!
//! The owner's value is the source of truth. Call [`PickerState::set_value`]
//! whenever it changes; if the parsed value differs from the committed one (by
//! the value manager's equality), any draft is discarded.

use alloc::string::String;
use core::fmt;

use crate::adapter::DateAdapter;
use crate::draft::{DraftAction, Draftable};
use crate::event::{PickerEvent, PickerEvents};
use crate::input;
use crate::open::{OpenState, OpenStateError};
use crate::value::ValueManager;

/// How complete a selection step is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectionState {
    /// A single step that completes the value; commits without closing.
    #[default]
    Partial,
    /// An intermediate step of a multi-step selection; never commits.
    Shallow,
    /// The last step of a multi-step selection; always commits.
    Finish,
}

/// Presentation the picker surface is shown in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PickerVariant {
    /// Popup anchored to the input.
    #[default]
    Desktop,
    /// Modal dialog.
    Mobile,
}

/// Coarse lifecycle of a picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PickerPhase {
    /// Surface hidden.
    Closed,
    /// Surface visible and accepting edits.
    Editing,
}

/// Owner configuration for a [`PickerState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerOptions {
    /// Keep the picker open after a finishing selection or a "today" action.
    ///
    /// `None` derives the behavior from the [`PickerVariant`].
    pub disable_close_on_select: Option<bool>,
    /// Controlled open flag. `Some(_)` puts the open state in controlled mode.
    pub open: Option<bool>,
}

impl PickerOptions {
    /// Default options: uncontrolled, close-on-select derived from the variant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `disable_close_on_select` explicitly.
    pub fn with_disable_close_on_select(mut self, disable: bool) -> Self {
        self.disable_close_on_select = Some(disable);
        self
    }

    /// Control the open flag from the owner.
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Whether a finishing selection in `variant` closes the picker.
    pub fn closes_on_finish(&self, variant: PickerVariant) -> bool {
        !self
            .disable_close_on_select
            .unwrap_or(variant == PickerVariant::Mobile)
    }

    /// Whether a "today" action closes the picker.
    pub fn closes_on_today(&self) -> bool {
        !self.disable_close_on_select.unwrap_or(false)
    }
}

/// What the picker surface renders from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PickerProps<'a, V> {
    /// The draft value.
    pub date: &'a V,
    /// Whether the mobile text-entry view replaces the calendar.
    pub is_mobile_keyboard_view_open: bool,
}

/// What the text input renders from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputProps<'a, I> {
    /// Whether the picker is open.
    pub open: bool,
    /// The owner's raw value, unparsed.
    pub raw_value: &'a I,
}

/// What the surrounding chrome (action bar, dialog) renders from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WrapperProps {
    /// Whether the picker is open.
    pub open: bool,
}

/// Value and open state for one picker.
pub struct PickerState<A, M>
where
    A: DateAdapter,
    M: ValueManager<A>,
{
    adapter: A,
    manager: M,
    disable_close_on_select: Option<bool>,
    open: OpenState,
    raw_value: M::Input,
    draft: Draftable<M::Value>,
    /// Rollback value for dismiss.
    initial: M::Value,
    last_valid: Option<M::Value>,
    mobile_keyboard_view_open: bool,
}

impl<A, M> PickerState<A, M>
where
    A: DateAdapter,
    M: ValueManager<A>,
{
    /// Create a closed picker (unless `options.open` says otherwise) mirroring `raw_value`.
    pub fn new(adapter: A, manager: M, options: PickerOptions, raw_value: M::Input) -> Self {
        let parsed = manager.parse_input(&adapter, &raw_value);
        let last_valid = (!manager.is_empty(&parsed)).then(|| parsed.clone());
        Self {
            adapter,
            manager,
            disable_close_on_select: options.disable_close_on_select,
            open: OpenState::new(options.open),
            raw_value,
            initial: parsed.clone(),
            draft: Draftable::new(parsed),
            last_valid,
            mobile_keyboard_view_open: false,
        }
    }

    /// The date adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The value manager.
    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Current options.
    pub fn options(&self) -> PickerOptions {
        PickerOptions {
            disable_close_on_select: self.disable_close_on_select,
            open: self.open.is_controlled().then_some(self.open.is_open()),
        }
    }

    /// Change `disable_close_on_select`.
    pub fn set_disable_close_on_select(&mut self, disable: Option<bool>) {
        self.disable_close_on_select = disable;
    }

    /// Push the owner's controlled `open` flag. See [`OpenState::sync`].
    pub fn set_open(&mut self, open: Option<bool>) -> Result<(), OpenStateError> {
        self.open.sync(open)
    }

    /// Mirror a new owner value.
    ///
    /// Returns `true` if the committed value diverged and the draft was reset.
    /// A value that parses to empty never replaces the last valid value.
    pub fn set_value(&mut self, raw_value: M::Input) -> bool {
        self.raw_value = raw_value;
        let parsed = self.manager.parse_input(&self.adapter, &self.raw_value);
        if !self.manager.is_empty(&parsed) {
            self.last_valid = Some(parsed.clone());
        }
        if self
            .manager
            .are_values_equal(&self.adapter, &self.draft.committed, &parsed)
        {
            return false;
        }
        tracing::debug!(value = ?parsed, "owner value diverged, resetting draft");
        self.draft.apply(DraftAction::Reset(parsed));
        true
    }

    /// The owner's raw value as last supplied.
    pub fn raw_value(&self) -> &M::Input {
        &self.raw_value
    }

    /// Last value propagated to the owner.
    ///
    /// This is the last value sent, not necessarily the owner's value. An owner
    /// that rejects a change keeps reporting the stale value here until it
    /// reasserts its own through [`set_value`](Self::set_value).
    pub fn value(&self) -> &M::Value {
        &self.draft.committed
    }

    /// Value currently being edited.
    pub fn draft(&self) -> &M::Value {
        &self.draft.draft
    }

    /// Committed and draft values together.
    pub fn draftable(&self) -> &Draftable<M::Value> {
        &self.draft
    }

    /// Value a dismiss rolls back to.
    pub fn initial_value(&self) -> &M::Value {
        &self.initial
    }

    /// Most recent non-empty parse of the owner's value.
    pub fn last_valid_value(&self) -> Option<&M::Value> {
        self.last_valid.as_ref()
    }

    /// Whether the picker surface is visible.
    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    /// Closed or editing.
    pub fn phase(&self) -> PickerPhase {
        if self.open.is_open() {
            PickerPhase::Editing
        } else {
            PickerPhase::Closed
        }
    }

    /// Whether the mobile text-entry view is showing.
    pub fn is_mobile_keyboard_view_open(&self) -> bool {
        self.mobile_keyboard_view_open
    }

    /// Flip the mobile text-entry view.
    pub fn toggle_mobile_keyboard_view(&mut self) {
        self.mobile_keyboard_view_open = !self.mobile_keyboard_view_open;
    }

    /// Propagate `value` to the owner, and optionally close and accept.
    pub fn accept_date(&mut self, value: M::Value, should_close: bool) -> PickerEvents<M::Value> {
        tracing::debug!(value = ?value, close = should_close, "committing value");
        let mut events = PickerEvents::new();
        events.push(PickerEvent::change(value.clone()));
        self.draft.apply(DraftAction::Reset(value.clone()));
        if should_close {
            events.push(self.open.close());
            self.initial = value.clone();
            events.push(PickerEvent::Accept(value));
        }
        events
    }

    /// Handle a selection made on the picker surface.
    pub fn on_date_change(
        &mut self,
        value: M::Value,
        variant: PickerVariant,
        selection: SelectionState,
    ) -> PickerEvents<M::Value> {
        self.draft.apply(DraftAction::Update(value.clone()));
        match selection {
            SelectionState::Partial => self.accept_date(value, false),
            SelectionState::Finish => {
                let close = self.options().closes_on_finish(variant);
                self.accept_date(value, close)
            }
            SelectionState::Shallow => {
                tracing::trace!(draft = ?value, "draft updated");
                PickerEvents::new()
            }
        }
    }

    /// Commit the draft and close.
    pub fn accept(&mut self) -> PickerEvents<M::Value> {
        let draft = self.draft.draft.clone();
        self.accept_date(draft, true)
    }

    /// Roll back to the value held when the picker last closed, and close.
    pub fn dismiss(&mut self) -> PickerEvents<M::Value> {
        let initial = self.initial.clone();
        self.accept_date(initial, true)
    }

    /// Commit the empty value and close.
    pub fn clear(&mut self) -> PickerEvents<M::Value> {
        let empty = self.manager.empty_value();
        self.accept_date(empty, true)
    }

    /// Commit today's date, closing unless close-on-select is disabled.
    pub fn set_today(&mut self) -> PickerEvents<M::Value> {
        let today = self.manager.today_value(&self.adapter);
        self.draft.apply(DraftAction::Update(today.clone()));
        let close = self.options().closes_on_today();
        self.accept_date(today, close)
    }

    /// Forward a value typed into the input to the owner.
    ///
    /// The value is normalized by the manager against the last valid value.
    /// Committed and draft values are left alone; they follow once the owner
    /// calls [`set_value`](Self::set_value).
    pub fn on_input_change(
        &mut self,
        value: M::Value,
        keyboard_input: Option<String>,
    ) -> PickerEvents<M::Value> {
        let value = self
            .manager
            .reduce_value(&self.adapter, self.last_valid.as_ref(), value);
        PickerEvent::Change {
            value,
            keyboard_input,
        }
        .into()
    }

    /// Ask for the picker to open.
    pub fn open_picker(&mut self) -> PickerEvents<M::Value> {
        self.open.open::<M::Value>().into()
    }

    /// Ask for the picker to close without committing anything.
    pub fn close_picker(&mut self) -> PickerEvents<M::Value> {
        self.open.close::<M::Value>().into()
    }

    /// A click on the input opens the picker unless the input is read-only.
    pub fn on_input_click(&mut self, read_only: bool) -> PickerEvents<M::Value> {
        if read_only {
            PickerEvents::new()
        } else {
            self.open_picker()
        }
    }

    /// Space or Enter on the input opens the picker.
    pub fn on_input_key(&mut self, key: &str) -> PickerEvents<M::Value> {
        if input::opens_picker(key) {
            self.open_picker()
        } else {
            PickerEvents::new()
        }
    }

    /// Text the input shows for the owner's raw value.
    pub fn display_text(&self, pattern: &str) -> String {
        input::display_text(&self.adapter, &self.manager, &self.raw_value, pattern)
    }

    /// Props for the picker surface.
    pub fn picker_props(&self) -> PickerProps<'_, M::Value> {
        PickerProps {
            date: &self.draft.draft,
            is_mobile_keyboard_view_open: self.mobile_keyboard_view_open,
        }
    }

    /// Props for the text input.
    pub fn input_props(&self) -> InputProps<'_, M::Input> {
        InputProps {
            open: self.open.is_open(),
            raw_value: &self.raw_value,
        }
    }

    /// Props for the surrounding chrome.
    pub fn wrapper_props(&self) -> WrapperProps {
        WrapperProps {
            open: self.open.is_open(),
        }
    }
}

impl<A, M> fmt::Debug for PickerState<A, M>
where
    A: DateAdapter,
    M: ValueManager<A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerState")
            .field("disable_close_on_select", &self.disable_close_on_select)
            .field("open", &self.open)
            .field("draft", &self.draft)
            .field("initial", &self.initial)
            .field("last_valid", &self.last_valid)
            .field("mobile_keyboard_view_open", &self.mobile_keyboard_view_open)
            .finish_non_exhaustive()
    }
}
