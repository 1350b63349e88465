// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`snackbar`]: Banner configuration ([`SnackbarDuration`](snackbar::SnackbarDuration),
//!   [`SnackbarConfiguration`](snackbar::SnackbarConfiguration), [`Style`](snackbar::Style))
//!   and the duration policy

pub mod diagnostics;
pub mod snackbar;
