// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a date picker through a scripted session and print what the owner sees.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example picker_walkthrough`

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;
use understory_picker::adapters::chrono::NaiveDateAdapter;
use understory_picker::{
    DateValueManager, PickerEvent, PickerEvents, PickerOptions, PickerState, PickerVariant,
    RawValue, SelectionState,
};

type Picker = PickerState<NaiveDateAdapter, DateValueManager<NaiveDateAdapter>>;

const FORMAT: &str = "%Y-%m-%d";

/// The owning form field: holds the value and echoes changes back into the picker.
struct Field {
    value: Option<NaiveDate>,
}

impl Field {
    fn apply(&mut self, picker: &mut Picker, step: &str, events: PickerEvents<Option<NaiveDate>>) {
        println!("== {step}");
        for event in events {
            match event {
                PickerEvent::Change { value, .. } => {
                    self.value = value;
                    println!("   change -> {}", show(value));
                }
                PickerEvent::Accept(value) => println!("   accept -> {}", show(value)),
                PickerEvent::Open => println!("   open"),
                PickerEvent::Close => println!("   close"),
            }
        }
        picker.set_value(RawValue::from(self.value));
        println!(
            "   [{:?}] input={:?} draft={} committed={}",
            picker.phase(),
            picker.display_text(FORMAT),
            show(*picker.draft()),
            show(*picker.value()),
        );
    }
}

fn show(value: Option<NaiveDate>) -> String {
    value.map_or_else(|| "-".to_owned(), |d| d.format(FORMAT).to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut field = Field {
        value: NaiveDate::from_ymd_opt(2020, 1, 1),
    };
    let mut picker: Picker = PickerState::new(
        NaiveDateAdapter::new(FORMAT),
        DateValueManager::new(),
        PickerOptions::new(),
        RawValue::from(field.value),
    );

    let events = picker.on_input_key("Enter");
    field.apply(&mut picker, "press Enter on the input", events);

    for day in [10, 11, 12] {
        let events = picker.on_date_change(
            NaiveDate::from_ymd_opt(2020, 6, day),
            PickerVariant::Desktop,
            SelectionState::Shallow,
        );
        field.apply(&mut picker, "arrow through June", events);
    }

    let events = picker.dismiss();
    field.apply(&mut picker, "Escape", events);

    let events = picker.open_picker();
    field.apply(&mut picker, "reopen", events);

    let events = picker.on_date_change(
        NaiveDate::from_ymd_opt(2020, 6, 15),
        PickerVariant::Desktop,
        SelectionState::Finish,
    );
    field.apply(&mut picker, "click June 15", events);

    let events = picker.open_picker();
    field.apply(&mut picker, "reopen", events);
    let events = picker.clear();
    field.apply(&mut picker, "Clear", events);

    let events = picker.on_input_click(false);
    field.apply(&mut picker, "click the input", events);
    let events = picker.set_today();
    field.apply(&mut picker, "Today", events);
}
