// SPDX-License-Identifier: MPL-2.0
//! The banner value moving through the scheduler.
//!
//! A [`Banner`] is a cheap, cloneable handle. Clones share identity: the
//! scheduler tags its timers with the banner's [`BannerId`] and two handles
//! compare equal only if they refer to the same banner.
//!
//! Content and style never change after construction. The attachment record
//! (owner, target views, listener, state, memoized animations) is mutated by the
//! scheduler, and its references are dropped once the banner leaves the view
//! tree so a finished banner no longer retains anything from the host.

use crate::domain::snackbar::{
    Content, ContainerRef, CustomViewId, OwnerId, ResolvedAnimations, SnackbarConfiguration, Style,
    ViewRef,
};
use crate::error::{BannerField, Error, Result};
use crate::ui::snackbar::LifecycleListener;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Process-unique identifier of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(u64);

impl BannerId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "banner#{}", self.0)
    }
}

/// Where a banner is in its presentation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerState {
    /// Built, never shown. The only state from which it can be enqueued.
    #[default]
    Unattached,
    /// Waiting in the queue, or at the head waiting for its view to attach.
    Queued,
    /// Enter animation running.
    Entering,
    /// Fully on screen.
    Visible,
    /// Exit animation running; already out of the queue.
    Exiting,
    /// Done. References to owner, target views and listener are cleared.
    Detached,
}

#[derive(Default)]
struct Attachment {
    state: BannerState,
    owner: Option<OwnerId>,
    owner_view: Option<ViewRef>,
    container: Option<ContainerRef>,
    listener: Option<Arc<dyn LifecycleListener>>,
    configuration: Option<SnackbarConfiguration>,
    animations: Option<ResolvedAnimations>,
    displayed_notified: bool,
    removed_notified: bool,
    recheck_used: bool,
}

struct Inner {
    id: BannerId,
    content: Content,
    style: Style,
    attachment: Mutex<Attachment>,
}

/// A single queued notification.
#[derive(Clone)]
pub struct Banner {
    inner: Arc<Inner>,
}

impl Banner {
    /// A text banner shown in the owner's content root.
    pub fn text(owner: OwnerId, text: impl Into<String>, style: Style) -> Self {
        Self::from_parts(owner, Content::Text(text.into()), style, None, None, None, None)
    }

    /// A text banner added to `container` instead of the content root.
    pub fn text_in(
        owner: OwnerId,
        text: impl Into<String>,
        style: Style,
        container: ContainerRef,
    ) -> Self {
        Self::from_parts(
            owner,
            Content::Text(text.into()),
            style,
            None,
            Some(container),
            None,
            None,
        )
    }

    /// A text banner added to `view`, a sub-view of the owner, instead of
    /// the owner's content root.
    pub fn text_in_view(
        owner: OwnerId,
        view: ViewRef,
        text: impl Into<String>,
        style: Style,
    ) -> Self {
        Self::from_parts(
            owner,
            Content::Text(text.into()),
            style,
            Some(view),
            None,
            None,
            None,
        )
    }

    /// A banner showing a caller-built view, with the default style.
    #[must_use]
    pub fn custom(owner: OwnerId, view: CustomViewId) -> Self {
        Self::from_parts(
            owner,
            Content::Custom(view),
            Style::default(),
            None,
            None,
            None,
            None,
        )
    }

    /// A custom-view banner in `container` with its own configuration.
    #[must_use]
    pub fn custom_in(
        owner: OwnerId,
        view: CustomViewId,
        container: ContainerRef,
        configuration: SnackbarConfiguration,
    ) -> Self {
        Self::from_parts(
            owner,
            Content::Custom(view),
            Style::default(),
            None,
            Some(container),
            Some(configuration),
            None,
        )
    }

    /// A custom-view banner added to `owner_view`, a sub-view of the owner.
    /// A `container`, when given, still takes precedence at attach time.
    #[must_use]
    pub fn custom_in_view(
        owner: OwnerId,
        owner_view: ViewRef,
        view: CustomViewId,
        container: Option<ContainerRef>,
        configuration: Option<SnackbarConfiguration>,
    ) -> Self {
        Self::from_parts(
            owner,
            Content::Custom(view),
            Style::default(),
            Some(owner_view),
            container,
            configuration,
            None,
        )
    }

    /// Starts a builder for banners assembled from optional parts.
    #[must_use]
    pub fn builder() -> BannerBuilder {
        BannerBuilder::default()
    }

    fn from_parts(
        owner: OwnerId,
        content: Content,
        style: Style,
        owner_view: Option<ViewRef>,
        container: Option<ContainerRef>,
        configuration: Option<SnackbarConfiguration>,
        listener: Option<Arc<dyn LifecycleListener>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                id: BannerId::next(),
                content,
                style,
                attachment: Mutex::new(Attachment {
                    owner: Some(owner),
                    owner_view,
                    container,
                    configuration,
                    listener,
                    ..Attachment::default()
                }),
            }),
        }
    }

    fn attachment(&self) -> MutexGuard<'_, Attachment> {
        // The record holds plain values only; a panic elsewhere cannot leave it torn.
        self.inner
            .attachment
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    #[must_use]
    pub fn id(&self) -> BannerId {
        self.inner.id
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.inner.content
    }

    /// The banner text, `None` for custom-view banners.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        self.inner.content.text()
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.inner.style
    }

    /// The explicit configuration if one was set, otherwise the style's.
    #[must_use]
    pub fn configuration(&self) -> SnackbarConfiguration {
        self.attachment()
            .configuration
            .unwrap_or_else(|| self.inner.style.configuration())
    }

    #[must_use]
    pub fn owner(&self) -> Option<OwnerId> {
        self.attachment().owner
    }

    /// The owner sub-view the banner is added to, if any.
    #[must_use]
    pub fn owner_view(&self) -> Option<ViewRef> {
        self.attachment().owner_view
    }

    #[must_use]
    pub fn container(&self) -> Option<ContainerRef> {
        self.attachment().container
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.attachment().listener.is_some()
    }

    #[must_use]
    pub fn state(&self) -> BannerState {
        self.attachment().state
    }

    /// The memoized enter/exit animations, once the scheduler resolved them.
    #[must_use]
    pub fn animations(&self) -> Option<ResolvedAnimations> {
        self.attachment().animations
    }

    // =========================================================================
    // Pre-show setters
    // =========================================================================

    /// Sets the lifecycle listener. Ignored once the banner was enqueued.
    pub fn set_listener(&self, listener: Arc<dyn LifecycleListener>) -> bool {
        let mut attachment = self.attachment();
        if attachment.state != BannerState::Unattached {
            return false;
        }
        attachment.listener = Some(listener);
        true
    }

    /// Overrides the style's configuration. Ignored once the banner was
    /// enqueued.
    pub fn set_configuration(&self, configuration: SnackbarConfiguration) -> bool {
        let mut attachment = self.attachment();
        if attachment.state != BannerState::Unattached {
            return false;
        }
        attachment.configuration = Some(configuration);
        attachment.animations = None;
        true
    }

    // =========================================================================
    // Detach operations
    // =========================================================================

    pub fn clear_owner(&self) {
        self.attachment().owner = None;
    }

    pub fn clear_owner_view(&self) {
        self.attachment().owner_view = None;
    }

    pub fn clear_container(&self) {
        self.attachment().container = None;
    }

    pub fn clear_listener(&self) {
        self.attachment().listener = None;
    }

    // =========================================================================
    // Scheduler bookkeeping
    // =========================================================================

    pub(crate) fn set_state(&self, state: BannerState) {
        self.attachment().state = state;
    }

    /// Moves `Unattached` to `Queued`; returns `false` for any other state.
    pub(crate) fn mark_queued(&self) -> bool {
        let mut attachment = self.attachment();
        if attachment.state != BannerState::Unattached {
            return false;
        }
        attachment.state = BannerState::Queued;
        true
    }

    /// Returns the memoized animations, resolving them with `resolve` the
    /// first time an owner is known.
    ///
    /// `resolve` runs without the attachment lock held so it may read the
    /// banner freely.
    pub(crate) fn resolve_animations<F>(&self, resolve: F) -> Option<ResolvedAnimations>
    where
        F: FnOnce(OwnerId, SnackbarConfiguration) -> ResolvedAnimations,
    {
        let (owner, configuration) = {
            let attachment = self.attachment();
            if let Some(animations) = attachment.animations {
                return Some(animations);
            }
            let owner = attachment.owner?;
            let configuration = attachment
                .configuration
                .unwrap_or_else(|| self.inner.style.configuration());
            (owner, configuration)
        };

        let resolved = resolve(owner, configuration);
        let mut attachment = self.attachment();
        Some(*attachment.animations.get_or_insert(resolved))
    }

    /// Drops owner, target views and listener in one go.
    pub(crate) fn detach_references(&self) {
        let mut attachment = self.attachment();
        attachment.owner = None;
        attachment.owner_view = None;
        attachment.container = None;
        attachment.listener = None;
    }

    /// Delivers `on_displayed` once.
    pub(crate) fn notify_displayed(&self) {
        let listener = {
            let mut attachment = self.attachment();
            if attachment.displayed_notified {
                return;
            }
            attachment.displayed_notified = true;
            attachment.listener.clone()
        };
        if let Some(listener) = listener {
            listener.on_displayed();
        }
    }

    /// Delivers `on_removed` once, and only after `on_displayed`.
    ///
    /// Must run before [`Banner::detach_references`] drops the listener.
    pub(crate) fn notify_removed(&self) {
        let listener = {
            let mut attachment = self.attachment();
            if !attachment.displayed_notified || attachment.removed_notified {
                return;
            }
            attachment.removed_notified = true;
            attachment.listener.clone()
        };
        if let Some(listener) = listener {
            listener.on_removed();
        }
    }

    /// Returns `true` the first time it is called for this banner.
    pub(crate) fn take_recheck(&self) -> bool {
        let mut attachment = self.attachment();
        !std::mem::replace(&mut attachment.recheck_used, true)
    }
}

impl PartialEq for Banner {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Banner {}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attachment = self.attachment();
        f.debug_struct("Banner")
            .field("id", &self.inner.id)
            .field("content", &self.inner.content)
            .field("style", &self.inner.style)
            .field("state", &attachment.state)
            .field("owner", &attachment.owner)
            .field("owner_view", &attachment.owner_view)
            .field("container", &attachment.container)
            .field("has_listener", &attachment.listener.is_some())
            .finish()
    }
}

// =============================================================================
// BannerBuilder
// =============================================================================

/// Assembles a banner from optional parts, rejecting incomplete ones.
///
/// ```
/// use topsnack::domain::snackbar::{OwnerId, Style};
/// use topsnack::error::{BannerField, Error};
/// use topsnack::ui::snackbar::Banner;
///
/// let missing_owner = Banner::builder().text("Saved").style(Style::confirm()).build();
/// assert_eq!(missing_owner.unwrap_err(), Error::InvalidBanner(BannerField::Owner));
///
/// let banner = Banner::builder()
///     .owner(OwnerId::new(1))
///     .text("Saved")
///     .style(Style::confirm())
///     .build()
///     .expect("complete banner");
/// assert_eq!(banner.text_content(), Some("Saved"));
/// ```
#[derive(Default)]
pub struct BannerBuilder {
    owner: Option<OwnerId>,
    content: Option<Content>,
    style: Option<Style>,
    owner_view: Option<ViewRef>,
    container: Option<ContainerRef>,
    configuration: Option<SnackbarConfiguration>,
    listener: Option<Arc<dyn LifecycleListener>>,
}

impl BannerBuilder {
    #[must_use]
    pub fn owner(mut self, owner: OwnerId) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Some(Content::Text(text.into()));
        self
    }

    #[must_use]
    pub fn custom_view(mut self, view: CustomViewId) -> Self {
        self.content = Some(Content::Custom(view));
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Adds the banner to a sub-view of the owner instead of its content
    /// root.
    #[must_use]
    pub fn owner_view(mut self, view: ViewRef) -> Self {
        self.owner_view = Some(view);
        self
    }

    #[must_use]
    pub fn container(mut self, container: ContainerRef) -> Self {
        self.container = Some(container);
        self
    }

    #[must_use]
    pub fn configuration(mut self, configuration: SnackbarConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    #[must_use]
    pub fn listener(mut self, listener: Arc<dyn LifecycleListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Builds the banner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBanner`] when the owner or the content is
    /// missing, or when a text banner has no style.
    pub fn build(self) -> Result<Banner> {
        let owner = self.owner.ok_or(Error::InvalidBanner(BannerField::Owner))?;
        let content = self
            .content
            .ok_or(Error::InvalidBanner(BannerField::Content))?;
        let style = match (&content, self.style) {
            (_, Some(style)) => style,
            (Content::Custom(_), None) => Style::default(),
            (Content::Text(_), None) => return Err(Error::InvalidBanner(BannerField::Style)),
        };

        Ok(Banner::from_parts(
            owner,
            content,
            style,
            self.owner_view,
            self.container,
            self.configuration,
            self.listener,
        ))
    }
}
