// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small calendar adapter shared by the unit tests.

use alloc::format;
use alloc::string::String;

/// Calendar date with an extra tag that adapter equality ignores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TestDate {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
    pub(crate) tag: u32,
}

impl TestDate {
    pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            tag: 0,
        }
    }

    pub(crate) fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }
}

/// Parses `YYYY-MM-DD` and reports a fixed "today".
#[derive(Clone, Copy, Debug)]
pub(crate) struct TestAdapter {
    pub(crate) today: TestDate,
}

impl Default for TestAdapter {
    fn default() -> Self {
        Self {
            today: TestDate::ymd(2022, 5, 17),
        }
    }
}

impl crate::DateAdapter for TestAdapter {
    type Date = TestDate;

    fn parse(&self, raw: &str) -> Option<TestDate> {
        let mut parts = raw.trim().splitn(3, '-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        ((1..=12).contains(&month) && (1..=31).contains(&day))
            .then_some(TestDate::ymd(year, month, day))
    }

    fn is_equal(&self, a: &TestDate, b: &TestDate) -> bool {
        (a.year, a.month, a.day) == (b.year, b.month, b.day)
    }

    fn now(&self) -> TestDate {
        self.today
    }

    fn format(&self, date: &TestDate, _pattern: &str) -> String {
        format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
    }
}
