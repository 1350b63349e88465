// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that UI toolkit adapters
//! implement. The scheduler only ever talks to the view tree through them.
//!
//! # Available Ports
//!
//! - [`host`]: View-tree attachment, layout, animation and announcements
//!
//! # Example
//!
//! ```ignore
//! use topsnack::application::port::{HostBinding, LayoutStatus, Placement};
//!
//! fn show_now(host: &mut impl HostBinding, banner: &Banner, placement: Placement) -> bool {
//!     host.attach(banner, placement) && host.request_layout(banner) == LayoutStatus::Ready
//! }
//! ```

pub mod host;

pub use host::{AttachTarget, HostBinding, InsertPosition, LayoutStatus, Placement};
