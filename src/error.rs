// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A banner was built without one of its required fields.
    #[error("Invalid banner: missing {0}")]
    InvalidBanner(BannerField),

    /// The scheduler service task is no longer running.
    #[error("Snackbar scheduler is not running")]
    SchedulerStopped,

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

/// Required identity fields of a banner.
///
/// Construction is rejected up front when one of these is absent, so a
/// banner that reaches the queue is always presentable (modulo its owner
/// going away later).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerField {
    /// The owner the banner is displayed within.
    Owner,
    /// Either the text or the custom view.
    Content,
    /// The style, required for text banners.
    Style,
}

impl fmt::Display for BannerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerField::Owner => write!(f, "owner"),
            BannerField::Content => write!(f, "content"),
            BannerField::Style => write!(f, "style"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn invalid_banner_names_the_missing_field() {
        assert_eq!(
            Error::InvalidBanner(BannerField::Owner).to_string(),
            "Invalid banner: missing owner"
        );
        assert_eq!(
            Error::InvalidBanner(BannerField::Content).to_string(),
            "Invalid banner: missing content"
        );
        assert_eq!(
            Error::InvalidBanner(BannerField::Style).to_string(),
            "Invalid banner: missing style"
        );
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn scheduler_stopped_display() {
        assert_eq!(
            Error::SchedulerStopped.to_string(),
            "Snackbar scheduler is not running"
        );
    }
}
