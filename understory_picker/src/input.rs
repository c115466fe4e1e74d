// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers for the read-only text input that sits next to a picker.
//!
//! The input shows the owner's value as text and opens the picker on click or
//! on Space/Enter. Masking and free typing are left to the host.

use alloc::string::String;

use crate::adapter::DateAdapter;
use crate::value::ValueManager;

/// Text shown for `raw`. Empty and unparsable values show nothing.
pub fn display_text<A, M>(adapter: &A, manager: &M, raw: &M::Input, pattern: &str) -> String
where
    A: DateAdapter,
    M: ValueManager<A>,
{
    let value = manager.parse_input(adapter, raw);
    if manager.is_empty(&value) {
        return String::new();
    }
    manager.format_value(adapter, &value, pattern)
}

/// Whether a key (as a DOM-style key name) opens the picker from the input.
pub fn opens_picker(key: &str) -> bool {
    matches!(key, " " | "Enter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestAdapter, TestDate};
    use crate::value::{DateValueManager, RawValue};

    #[test]
    fn display_text_formats_or_blanks() {
        let adapter = TestAdapter::default();
        let manager = DateValueManager::<TestAdapter>::new();

        assert_eq!(display_text(&adapter, &manager, &RawValue::Empty, "iso"), "");
        assert_eq!(
            display_text(&adapter, &manager, &RawValue::Text("garbage".into()), "iso"),
            ""
        );
        assert_eq!(
            display_text(
                &adapter,
                &manager,
                &RawValue::Date(TestDate::ymd(1999, 12, 31)),
                "iso"
            ),
            "1999-12-31"
        );
    }

    #[test]
    fn space_and_enter_open() {
        assert!(opens_picker(" "));
        assert!(opens_picker("Enter"));
        assert!(!opens_picker("Escape"));
        assert!(!opens_picker("enter"));
    }
}
