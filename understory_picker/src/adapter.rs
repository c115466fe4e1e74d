// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date utility adapter: the seam between the picker core and a date library.
//!
//! The core never inspects dates directly. Parsing, comparison, "now", and
//! formatting all go through a [`DateAdapter`], so the date type can be a
//! foreign or wrapped representation whose native equality is not meaningful.

use alloc::string::String;

/// Date operations supplied by the host's date library.
///
/// Implementations should be cheap to call; the core calls [`DateAdapter::is_equal`]
/// on every resync.
pub trait DateAdapter {
    /// Opaque date representation.
    type Date: Clone;

    /// Parse free-form text into a date, or `None` if the text is not a date.
    fn parse(&self, raw: &str) -> Option<Self::Date>;

    /// Compare two dates for equality.
    ///
    /// This is the only equality the core uses for divergence detection.
    fn is_equal(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// The current date.
    fn now(&self) -> Self::Date;

    /// Format a date with a library-specific pattern.
    fn format(&self, date: &Self::Date, pattern: &str) -> String;
}

impl<T: DateAdapter + ?Sized> DateAdapter for &T {
    type Date = T::Date;

    fn parse(&self, raw: &str) -> Option<Self::Date> {
        (**self).parse(raw)
    }

    fn is_equal(&self, a: &Self::Date, b: &Self::Date) -> bool {
        (**self).is_equal(a, b)
    }

    fn now(&self) -> Self::Date {
        (**self).now()
    }

    fn format(&self, date: &Self::Date, pattern: &str) -> String {
        (**self).format(date, pattern)
    }
}
