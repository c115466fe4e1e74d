// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`DateAdapter`] for [`NaiveDate`].
//!
//! ```
//! use understory_picker::adapters::chrono::NaiveDateAdapter;
//! use understory_picker::DateAdapter;
//!
//! let adapter = NaiveDateAdapter::default();
//! let date = adapter.parse("2024-02-29").unwrap();
//! assert_eq!(adapter.format(&date, "%d/%m/%Y"), "29/02/2024");
//! assert!(adapter.parse("2023-02-29").is_none());
//! ```

use alloc::string::String;
use core::fmt::Write;

use ::chrono::{Local, NaiveDate};

use crate::adapter::DateAdapter;

/// ISO 8601 calendar date, the default parse format.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Calendar dates without a time zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NaiveDateAdapter {
    /// `strftime`-style pattern used by [`DateAdapter::parse`].
    pub parse_format: &'static str,
}

impl NaiveDateAdapter {
    /// An adapter that parses text with `parse_format`.
    pub fn new(parse_format: &'static str) -> Self {
        Self { parse_format }
    }
}

impl Default for NaiveDateAdapter {
    fn default() -> Self {
        Self::new(ISO_DATE)
    }
}

impl DateAdapter for NaiveDateAdapter {
    type Date = NaiveDate;

    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(raw.trim(), self.parse_format) {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::trace!(%err, raw, "unparsable date text");
                None
            }
        }
    }

    fn is_equal(&self, a: &NaiveDate, b: &NaiveDate) -> bool {
        a == b
    }

    fn now(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Invalid patterns produce whatever was written before the bad item.
    fn format(&self, date: &NaiveDate, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(pattern)).is_err() {
            tracing::debug!(pattern, "invalid date format pattern");
        }
        out
    }
}
