//! Error types for the `ajax-event` crate.
//!
//! Transitions on [`AjaxEvent`](crate::AjaxEvent) never fail. The only fallible
//! operation is reading an [`AjaxEventStatus`](crate::AjaxEventStatus) back from
//! its label.

use thiserror::Error;

/// Error returned when a string is not a known status label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStatusError {
    /// The label does not name any of the four statuses.
    #[error("Unknown status label: '{0}'")]
    UnknownLabel(String),

    /// The label was empty or only whitespace.
    #[error("Status label is empty")]
    Empty,
}
