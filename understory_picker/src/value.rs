// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value managers: how a picker's value type is parsed, compared, and emptied.
//!
//! A [`ValueManager`] bundles the rules for one value shape. The core is generic
//! over it so the same reconciliation logic serves any value that can be built
//! from the owner's raw input.
//!
//! [`DateValueManager`] covers the common single-date picker, where the value is
//! `Option<Date>` and `None` is the empty value.

use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use crate::adapter::DateAdapter;

/// Rules for a picker value type.
pub trait ValueManager<A: DateAdapter> {
    /// Raw value the owner supplies (for example a date, a string, or nothing).
    type Input;
    /// Parsed value the picker works with.
    type Value: Clone + fmt::Debug;

    /// The value written by a clear action.
    fn empty_value(&self) -> Self::Value;

    /// Parse the owner's raw value. Unparsable input yields an empty value.
    fn parse_input(&self, adapter: &A, input: &Self::Input) -> Self::Value;

    /// Compare two values using the adapter's notion of equality.
    fn are_values_equal(&self, adapter: &A, a: &Self::Value, b: &Self::Value) -> bool;

    /// The value a "today" action writes, built from the adapter's current date.
    fn today_value(&self, adapter: &A) -> Self::Value;

    /// Whether `value` is the null value that must never replace the last valid value.
    fn is_empty(&self, value: &Self::Value) -> bool;

    /// Normalize a value typed by the user against the last valid value.
    ///
    /// The default passes `value` through unchanged.
    fn reduce_value(
        &self,
        adapter: &A,
        last_valid: Option<&Self::Value>,
        value: Self::Value,
    ) -> Self::Value {
        let _ = (adapter, last_valid);
        value
    }

    /// Render a value for a text field. Empty values render as an empty string.
    fn format_value(&self, adapter: &A, value: &Self::Value, pattern: &str) -> String;
}

/// Raw value an owner can hand to a single-date picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawValue<D> {
    /// No value.
    Empty,
    /// An already-built date.
    Date(D),
    /// Text to be parsed by the adapter.
    Text(String),
}

impl<D> Default for RawValue<D> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<D> From<Option<D>> for RawValue<D> {
    fn from(value: Option<D>) -> Self {
        match value {
            Some(date) => Self::Date(date),
            None => Self::Empty,
        }
    }
}

/// Signature of a value reducer for [`DateValueManager`].
pub type DateReducer<A> = fn(
    &A,
    Option<&Option<<A as DateAdapter>::Date>>,
    Option<<A as DateAdapter>::Date>,
) -> Option<<A as DateAdapter>::Date>;

/// Value manager for a single, possibly empty date.
pub struct DateValueManager<A: DateAdapter> {
    reducer: Option<DateReducer<A>>,
    _adapter: PhantomData<fn(&A)>,
}

impl<A: DateAdapter> DateValueManager<A> {
    /// Create a manager with no reducer.
    pub fn new() -> Self {
        Self {
            reducer: None,
            _adapter: PhantomData,
        }
    }

    /// Install a reducer applied to user-typed values before they reach the owner.
    pub fn with_reducer(mut self, reducer: DateReducer<A>) -> Self {
        self.reducer = Some(reducer);
        self
    }
}

impl<A: DateAdapter> Default for DateValueManager<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: DateAdapter> Clone for DateValueManager<A> {
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer,
            _adapter: PhantomData,
        }
    }
}

impl<A: DateAdapter> fmt::Debug for DateValueManager<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateValueManager")
            .field("has_reducer", &self.reducer.is_some())
            .finish_non_exhaustive()
    }
}

impl<A> ValueManager<A> for DateValueManager<A>
where
    A: DateAdapter,
    A::Date: fmt::Debug,
{
    type Input = RawValue<A::Date>;
    type Value = Option<A::Date>;

    fn empty_value(&self) -> Self::Value {
        None
    }

    fn parse_input(&self, adapter: &A, input: &Self::Input) -> Self::Value {
        match input {
            RawValue::Empty => None,
            RawValue::Date(date) => Some(date.clone()),
            RawValue::Text(text) => adapter.parse(text),
        }
    }

    fn are_values_equal(&self, adapter: &A, a: &Self::Value, b: &Self::Value) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => adapter.is_equal(a, b),
            _ => false,
        }
    }

    fn today_value(&self, adapter: &A) -> Self::Value {
        Some(adapter.now())
    }

    fn is_empty(&self, value: &Self::Value) -> bool {
        value.is_none()
    }

    fn reduce_value(
        &self,
        adapter: &A,
        last_valid: Option<&Self::Value>,
        value: Self::Value,
    ) -> Self::Value {
        match self.reducer {
            Some(reducer) => reducer(adapter, last_valid, value),
            None => value,
        }
    }

    fn format_value(&self, adapter: &A, value: &Self::Value, pattern: &str) -> String {
        value
            .as_ref()
            .map(|date| adapter.format(date, pattern))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestAdapter, TestDate};

    #[test]
    fn parse_input_handles_each_raw_shape() {
        let adapter = TestAdapter::default();
        let manager = DateValueManager::<TestAdapter>::new();

        assert_eq!(manager.parse_input(&adapter, &RawValue::Empty), None);
        assert_eq!(
            manager.parse_input(&adapter, &RawValue::Date(TestDate::ymd(2020, 1, 1))),
            Some(TestDate::ymd(2020, 1, 1))
        );
        assert_eq!(
            manager.parse_input(&adapter, &RawValue::Text("2021-03-04".into())),
            Some(TestDate::ymd(2021, 3, 4))
        );
        assert_eq!(
            manager.parse_input(&adapter, &RawValue::Text("not a date".into())),
            None
        );
    }

    #[test]
    fn equality_goes_through_the_adapter() {
        let adapter = TestAdapter::default();
        let manager = DateValueManager::<TestAdapter>::new();
        let a = Some(TestDate::ymd(2020, 1, 1));
        let b = Some(TestDate::ymd(2020, 1, 1).with_tag(7));

        assert_ne!(a, b, "native equality sees the tag");
        assert!(manager.are_values_equal(&adapter, &a, &b));
        assert!(manager.are_values_equal(&adapter, &None, &None));
        assert!(!manager.are_values_equal(&adapter, &a, &None));
    }

    #[test]
    fn reducer_sees_last_valid_value() {
        fn keep_last(
            _: &TestAdapter,
            last: Option<&Option<TestDate>>,
            value: Option<TestDate>,
        ) -> Option<TestDate> {
            value.or_else(|| last.cloned().flatten())
        }

        let adapter = TestAdapter::default();
        let manager = DateValueManager::<TestAdapter>::new().with_reducer(keep_last);
        let last = Some(TestDate::ymd(2020, 1, 1));

        assert_eq!(
            manager.reduce_value(&adapter, Some(&last), None),
            Some(TestDate::ymd(2020, 1, 1))
        );
        assert_eq!(
            DateValueManager::<TestAdapter>::new().reduce_value(&adapter, Some(&last), None),
            None
        );
    }

    #[test]
    fn empty_formats_as_empty_string() {
        let adapter = TestAdapter::default();
        let manager = DateValueManager::<TestAdapter>::new();

        assert_eq!(manager.format_value(&adapter, &None, "%Y"), "");
        assert_eq!(
            manager.format_value(&adapter, &Some(TestDate::ymd(2020, 1, 2)), "iso"),
            "2020-01-02"
        );
    }
}
