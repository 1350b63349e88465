// SPDX-License-Identifier: MPL-2.0
//! `topsnack` presents transient banners ("snackbars") at the top of a host
//! view tree, one at a time, in the order they were requested.
//!
//! The crate never draws anything itself. A UI toolkit adapter implements
//! [`application::port::HostBinding`] and the scheduler decides when each
//! banner is attached, animated in, kept on screen, animated out and
//! detached.
//!
//! # Layout
//!
//! - [`domain`] - Value types: durations, animations, styles, owner handles
//! - [`application`] - The host binding port
//! - [`ui::snackbar`] - Banners, the scheduler state machine and its tokio service
//! - [`diagnostics`] - Bounded lifecycle event log
//! - [`config`] - `settings.toml` handling

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
