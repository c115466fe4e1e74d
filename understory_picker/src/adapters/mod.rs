// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date adapters for common date libraries.
//!
//! Each adapter is gated behind a feature flag to keep the core lightweight and `no_std` by default.
//!
//! ## Available Adapters
//!
//! - [`chrono`] (`chrono` feature): [`DateAdapter`](crate::DateAdapter) over
//!   [`::chrono::NaiveDate`], using the local clock for "today".

#[cfg(feature = "chrono")]
pub mod chrono;
