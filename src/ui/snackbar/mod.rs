// SPDX-License-Identifier: MPL-2.0
//! Snackbar presentation: banners, the single-slot scheduler and its async
//! service.
//!
//! # Overview
//!
//! - [`Banner`] / [`BannerBuilder`]: the notification value and its lifecycle state
//! - [`Scheduler`]: deterministic FIFO state machine, one banner on screen at a time
//! - [`SnackbarService`] / [`Snackbars`]: tokio task plus cloneable producer handle
//! - [`LifecycleListener`]: `on_displayed` / `on_removed` callbacks
//!
//! # Example
//!
//! ```
//! use topsnack::domain::snackbar::{OwnerId, Style};
//! use topsnack::ui::snackbar::{Banner, BannerState};
//!
//! let banner = Banner::text(OwnerId::new(1), "Photo deleted", Style::info());
//! assert_eq!(banner.state(), BannerState::Unattached);
//! assert_eq!(banner.text_content(), Some("Photo deleted"));
//! ```

mod banner;
mod listener;
mod messages;
mod scheduler;
mod service;
mod settings;

pub use banner::{Banner, BannerBuilder, BannerId, BannerState};
pub use listener::{FnListener, LifecycleListener};
pub use messages::{Message, MessageKind, MessageQueue, MessageTarget};
pub use scheduler::{Scheduler, SchedulerState};
pub use service::{Command, SnackbarService, Snackbars};
pub use settings::SchedulerSettings;
