// SPDX-License-Identifier: MPL-2.0
//! Lifecycle callbacks for a single banner.

/// Notified when a banner is shown and when it goes away.
///
/// Each method is invoked at most once per banner, on the scheduler's task.
/// `on_removed` is only delivered to banners that received `on_displayed`.
pub trait LifecycleListener: Send + Sync {
    /// The banner's enter animation started.
    fn on_displayed(&self) {}

    /// The banner left the view tree.
    fn on_removed(&self) {}
}

/// Adapts a pair of closures into a [`LifecycleListener`].
///
/// ```
/// use topsnack::ui::snackbar::{FnListener, LifecycleListener};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let removed = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&removed);
/// let listener = FnListener::new(|| {}, move || flag.store(true, Ordering::SeqCst));
///
/// listener.on_removed();
/// assert!(removed.load(Ordering::SeqCst));
/// ```
pub struct FnListener<D, R> {
    displayed: D,
    removed: R,
}

impl<D, R> FnListener<D, R>
where
    D: Fn() + Send + Sync,
    R: Fn() + Send + Sync,
{
    pub fn new(displayed: D, removed: R) -> Self {
        Self { displayed, removed }
    }
}

impl<D, R> LifecycleListener for FnListener<D, R>
where
    D: Fn() + Send + Sync,
    R: Fn() + Send + Sync,
{
    fn on_displayed(&self) {
        (self.displayed)();
    }

    fn on_removed(&self) {
        (self.removed)();
    }
}
