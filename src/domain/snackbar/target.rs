// SPDX-License-Identifier: MPL-2.0
//! Identity of what a banner shows and where it is shown.
//!
//! All of these are opaque handles into the host's world: the scheduler
//! compares and forwards them but never dereferences them.

/// The hosting context (screen, window, activity) a banner belongs to.
///
/// The host decides whether an owner is still alive; the scheduler only
/// asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(u64);

impl OwnerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Host handle of a caller-built view shown instead of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomViewId(u64);

impl CustomViewId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Host handle of a view inside the owner (a sub-screen root, for
/// instance) that replaces the owner's content root as the banner's parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewRef(u64);

impl ViewRef {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// What a banner displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    /// Plain text, rendered by the host according to the banner style.
    Text(String),
    /// A view the caller built itself.
    Custom(CustomViewId),
}

impl Content {
    /// The text to render and announce, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Custom(_) => None,
        }
    }
}

// =============================================================================
// Containers
// =============================================================================

/// Layout kind of a caller-supplied container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Children stacked on top of each other.
    Frame,
    /// Children managed by an adapter; indices are not meaningful.
    Adapter,
    /// Children positioned relative to each other.
    Relative,
    /// Children laid out in sequence.
    Linear,
    /// Anything else.
    Other,
}

impl ContainerKind {
    /// Whether a child index carries no meaning for this kind, in which case
    /// the banner is appended instead of inserted first.
    #[must_use]
    pub fn ignores_child_order(self) -> bool {
        matches!(
            self,
            ContainerKind::Frame | ContainerKind::Adapter | ContainerKind::Relative
        )
    }
}

/// A container inside the owner the banner should be added to, overriding
/// the owner's content root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerRef {
    id: u64,
    kind: ContainerKind,
}

impl ContainerRef {
    #[must_use]
    pub fn new(id: u64, kind: ContainerKind) -> Self {
        Self { id, kind }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_insensitive_kinds() {
        assert!(ContainerKind::Frame.ignores_child_order());
        assert!(ContainerKind::Adapter.ignores_child_order());
        assert!(ContainerKind::Relative.ignores_child_order());
        assert!(!ContainerKind::Linear.ignores_child_order());
        assert!(!ContainerKind::Other.ignores_child_order());
    }

    #[test]
    fn only_text_content_has_text() {
        assert_eq!(Content::Text("saved".into()).text(), Some("saved"));
        assert_eq!(Content::Custom(CustomViewId::new(1)).text(), None);
    }
}
