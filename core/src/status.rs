//! The four lifecycle statuses of a request.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseStatusError;

/// Lifecycle status of a request tracked by an [`AjaxEvent`](crate::AjaxEvent).
///
/// The expected order is `Ready → Executing → (Success | Error) → Ready`, but
/// nothing prevents jumping between any two statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AjaxEventStatus {
    /// Nothing in flight. Initial status.
    #[default]
    Ready,
    /// A request has been issued and has not completed yet.
    Executing,
    /// The last request failed.
    Error,
    /// The last request succeeded.
    Success,
}

impl AjaxEventStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Ready, Self::Executing, Self::Error, Self::Success];

    /// Stable upper-case label for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Executing => "EXECUTING",
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
        }
    }

    /// Whether this status ends a request cycle (`Success` or `Error`).
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl fmt::Display for AjaxEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AjaxEventStatus {
    type Err = ParseStatusError;

    /// Parses a label case-insensitively, so both `"READY"` and `"ready"` work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() {
            return Err(ParseStatusError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ParseStatusError::UnknownLabel(label.to_string()))
    }
}
