// SPDX-License-Identifier: MPL-2.0
//! Async front end of the scheduler.
//!
//! [`SnackbarService::spawn`] moves a [`Scheduler`] into a tokio task.
//! Producers on any thread talk to it through a [`Snackbars`] handle; each
//! call becomes a [`Command`] on an unbounded channel, so the scheduler only
//! ever runs on its own task.
//!
//! # Example
//!
//! ```ignore
//! let (snackbars, task) = SnackbarService::spawn(host, SchedulerSettings::default(), diagnostics);
//! snackbars.show_text(owner, "Saved", Style::confirm())?;
//! // ... on teardown
//! snackbars.cancel_for_owner(owner)?;
//! snackbars.shutdown()?;
//! task.await?;
//! ```

use super::banner::Banner;
use super::scheduler::Scheduler;
use super::settings::SchedulerSettings;
use crate::application::port::HostBinding;
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::snackbar::{CustomViewId, OwnerId, Style};
use crate::error::{Error, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Commands sent from producers to the scheduler task.
#[derive(Debug, Clone)]
pub enum Command {
    /// Enqueue a banner.
    Show(Banner),
    /// Animate a banner out, or withdraw it if it is still waiting.
    Hide(Banner),
    /// Withdraw a banner immediately.
    Cancel(Banner),
    /// Withdraw every banner of an owner.
    CancelForOwner(OwnerId),
    /// Withdraw everything.
    CancelAll,
    /// The host finished measuring a banner's view.
    LayoutReady(Banner),
    /// Clear everything and stop the task.
    Shutdown,
}

/// Producer handle. Cheap to clone, usable from any thread.
#[derive(Debug, Clone)]
pub struct Snackbars {
    command_tx: mpsc::UnboundedSender<Command>,
}

impl Snackbars {
    /// Sends a command to the scheduler task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn send_command(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::SchedulerStopped)
    }

    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn show(&self, banner: &Banner) -> Result<()> {
        self.send_command(Command::Show(banner.clone()))
    }

    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn hide(&self, banner: &Banner) -> Result<()> {
        self.send_command(Command::Hide(banner.clone()))
    }

    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn cancel(&self, banner: &Banner) -> Result<()> {
        self.send_command(Command::Cancel(banner.clone()))
    }

    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn cancel_all(&self) -> Result<()> {
        self.send_command(Command::CancelAll)
    }

    /// Call when `owner` is being torn down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn cancel_for_owner(&self, owner: OwnerId) -> Result<()> {
        self.send_command(Command::CancelForOwner(owner))
    }

    /// Reports that the host measured `banner`'s view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn layout_ready(&self, banner: &Banner) -> Result<()> {
        self.send_command(Command::LayoutReady(banner.clone()))
    }

    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has already ended.
    pub fn shutdown(&self) -> Result<()> {
        self.send_command(Command::Shutdown)
    }

    /// Builds a text banner and shows it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn show_text(&self, owner: OwnerId, text: impl Into<String>, style: Style) -> Result<Banner> {
        let banner = Banner::text(owner, text, style);
        self.show(&banner)?;
        Ok(banner)
    }

    /// Builds a custom-view banner and shows it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulerStopped`] if the task has ended.
    pub fn show_custom(&self, owner: OwnerId, view: CustomViewId) -> Result<Banner> {
        let banner = Banner::custom(owner, view);
        self.show(&banner)?;
        Ok(banner)
    }
}

/// Runs a [`Scheduler`] on a tokio task.
pub struct SnackbarService<H: HostBinding> {
    scheduler: Scheduler<H>,
    command_rx: mpsc::UnboundedReceiver<Command>,
}

impl<H: HostBinding + 'static> SnackbarService<H> {
    /// Spawns the scheduler task. Must be called within a tokio runtime.
    ///
    /// The task ends on [`Command::Shutdown`] or once every [`Snackbars`]
    /// handle is dropped, and yields the host back.
    pub fn spawn(
        host: H,
        settings: SchedulerSettings,
        diagnostics: DiagnosticsHandle,
    ) -> (Snackbars, JoinHandle<H>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let service = Self {
            scheduler: Scheduler::new(host, settings, diagnostics),
            command_rx,
        };
        let task = tokio::spawn(service.run());
        (Snackbars { command_tx }, task)
    }

    async fn run(mut self) -> H {
        tracing::debug!("snackbar scheduler started");
        loop {
            let deadline = self.scheduler.next_deadline().map(Instant::from_std);
            let timer = async move {
                match deadline {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => self.handle(command),
                },
                () = timer => {
                    self.scheduler.run_due(Instant::now().into_std());
                }
            }
        }

        self.scheduler.clear_all();
        tracing::debug!("snackbar scheduler stopped");
        let Self { scheduler, .. } = self;
        scheduler.into_host()
    }

    fn handle(&mut self, command: Command) {
        let now = Instant::now().into_std();
        // Timers that came due while the command waited run first.
        self.scheduler.run_due(now);

        tracing::trace!(?command, "command");
        match command {
            Command::Show(banner) => self.scheduler.enqueue(banner, now),
            Command::Hide(banner) => self.scheduler.hide(&banner, now),
            Command::Cancel(banner) => self.scheduler.cancel(&banner, now),
            Command::CancelForOwner(owner) => self.scheduler.clear_owner(owner, now),
            Command::CancelAll => self.scheduler.clear_all(),
            Command::LayoutReady(banner) => self.scheduler.layout_ready(&banner, now),
            Command::Shutdown => {}
        }
    }
}
