//! Per-instance configuration for [`AjaxEvent`](crate::AjaxEvent).

/// Fixed prefixes prepended to the message of every success or error.
///
/// Reset transitions never use a base message.
///
/// # Example
///
/// ```
/// use ajax_event::{AjaxEvent, BaseMessages};
///
/// let config = BaseMessages::new().with_error("Could not load profile: ");
/// let mut event: AjaxEvent<u32, String> = AjaxEvent::with_base_messages(config);
///
/// event.reject("timeout".to_string(), Some("server timed out"));
/// assert_eq!(event.message(), "Could not load profile: server timed out");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseMessages {
    success: Option<String>,
    error: Option<String>,
}

impl BaseMessages {
    /// No base messages.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            success: None,
            error: None,
        }
    }

    /// Set the prefix used by `resolve`.
    #[must_use]
    pub fn with_success(mut self, base: impl Into<String>) -> Self {
        self.success = Some(base.into());
        self
    }

    /// Set the prefix used by `reject`.
    #[must_use]
    pub fn with_error(mut self, base: impl Into<String>) -> Self {
        self.error = Some(base.into());
        self
    }

    /// The success prefix, if configured.
    #[must_use]
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// The error prefix, if configured.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn compose(base: Option<&str>, message: &str) -> String {
        match base {
            Some(base) => format!("{base}{message}"),
            None => message.to_string(),
        }
    }
}
