// SPDX-License-Identifier: MPL-2.0
//! Presentation layer.
//!
//! - [`snackbar`] - Queued top-of-screen banners

pub mod snackbar;
