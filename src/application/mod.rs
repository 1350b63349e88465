// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the scheduler and the host toolkit.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Toolkit adapters implement application layer ports
//! - The snackbar scheduler consumes the ports, never a concrete toolkit

pub mod port;
