// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Committed/draft value pair and its transition function.

/// A value being edited next to the value last handed to the owner.
///
/// `draft` diverges from `committed` only between a non-committing update and
/// the next reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draftable<V> {
    /// Last value propagated to the owner.
    pub committed: V,
    /// Value currently being edited.
    pub draft: V,
}

/// Transition applied to a [`Draftable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftAction<V> {
    /// Replace the draft, keep the committed value.
    Update(V),
    /// Replace both halves.
    Reset(V),
}

impl<V: Clone> Draftable<V> {
    /// A pair with both halves equal to `value`.
    pub fn new(value: V) -> Self {
        Self {
            committed: value.clone(),
            draft: value,
        }
    }

    /// Apply `action` and return the next state.
    #[must_use]
    pub fn reduce(self, action: DraftAction<V>) -> Self {
        match action {
            DraftAction::Update(draft) => Self { draft, ..self },
            DraftAction::Reset(value) => Self::new(value),
        }
    }

    /// Apply `action` in place.
    pub fn apply(&mut self, action: DraftAction<V>) {
        match action {
            DraftAction::Update(draft) => self.draft = draft,
            DraftAction::Reset(value) => *self = Self::new(value),
        }
    }
}
