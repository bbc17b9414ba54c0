//! The [`AjaxEvent`] state holder.
//!
//! An `AjaxEvent` records where one asynchronous request is in its lifecycle.
//! It performs no I/O itself: the caller marks the request as executing before
//! issuing it and resolves or rejects the event once the outcome is known.
//!
//! # Example
//!
//! ```
//! use ajax_event::{AjaxEvent, AjaxEventStatus};
//!
//! let mut event: AjaxEvent<u32, String> = AjaxEvent::new();
//! assert!(event.is_ready());
//!
//! event.reset_to_executing();
//! assert!(event.is_executing());
//!
//! assert!(event.resolve(Some(42), Some("done")).is_successful());
//! assert_eq!(event.status(), AjaxEventStatus::Success);
//! assert_eq!(event.data(), Some(&42));
//! assert_eq!(event.message(), "done");
//! ```

use crate::config::BaseMessages;
use crate::status::AjaxEventStatus;

/// Message stored whenever no message is given.
pub const DEFAULT_MESSAGE: &str = "";

/// Lifecycle state of one asynchronous request.
///
/// - `T`: payload produced by a successful request
/// - `E`: error value produced by a failed request
///
/// "No data" and "no error" are tracked independently as `None`. Every
/// transition takes `&mut self` and returns `&mut Self`, so calls chain on the
/// same instance:
///
/// ```
/// # use ajax_event::AjaxEvent;
/// let mut event: AjaxEvent<i32, String> = AjaxEvent::new();
/// assert!(event.reset_to_executing().resolve(Some(1), None).is_successful());
/// ```
///
/// Fields are only reachable through accessors. The status can only change
/// through [`reset_to_ready`](Self::reset_to_ready),
/// [`reset_to_executing`](Self::reset_to_executing),
/// [`resolve`](Self::resolve) and [`reject`](Self::reject).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AjaxEvent<T, E> {
    status: AjaxEventStatus,
    error: Option<E>,
    message: String,
    data: Option<T>,
    base_messages: BaseMessages,
}

impl<T, E> AjaxEvent<T, E> {
    /// Data stored whenever no data is given.
    pub const DEFAULT_DATA: Option<T> = None;

    /// Error stored in every status other than `Error`.
    pub const DEFAULT_ERROR: Option<E> = None;

    /// Create an event in the `Ready` status with no error, message or data.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_base_messages(BaseMessages::new())
    }

    /// Create a `Ready` event whose success and error messages are prefixed
    /// with the configured base messages.
    #[must_use]
    pub const fn with_base_messages(base_messages: BaseMessages) -> Self {
        Self {
            status: AjaxEventStatus::Ready,
            error: Self::DEFAULT_ERROR,
            message: String::new(),
            data: Self::DEFAULT_DATA,
            base_messages,
        }
    }

    // ========== Transitions ==========

    /// Return to `Ready`, clearing error, message and data.
    pub fn reset_to_ready(&mut self) -> &mut Self {
        self.transition(
            AjaxEventStatus::Ready,
            Self::DEFAULT_ERROR,
            DEFAULT_MESSAGE.to_string(),
            Self::DEFAULT_DATA,
        )
    }

    /// Mark a request as in flight, clearing error, message and data.
    ///
    /// Data from a previous cycle is not carried over.
    pub fn reset_to_executing(&mut self) -> &mut Self {
        self.transition(
            AjaxEventStatus::Executing,
            Self::DEFAULT_ERROR,
            DEFAULT_MESSAGE.to_string(),
            Self::DEFAULT_DATA,
        )
    }

    /// Record a successful outcome.
    ///
    /// `None` for `data` stores no data and `None` for `message` stores
    /// [`DEFAULT_MESSAGE`]. A configured success base message is prepended.
    pub fn resolve(&mut self, data: Option<T>, message: Option<&str>) -> &mut Self {
        let message = BaseMessages::compose(
            self.base_messages.success(),
            message.unwrap_or(DEFAULT_MESSAGE),
        );
        self.transition(AjaxEventStatus::Success, Self::DEFAULT_ERROR, message, data)
    }

    /// Record a failed outcome. Any data is cleared.
    ///
    /// `None` for `message` stores [`DEFAULT_MESSAGE`]. A configured error base
    /// message is prepended.
    pub fn reject(&mut self, error: E, message: Option<&str>) -> &mut Self {
        let message = BaseMessages::compose(
            self.base_messages.error(),
            message.unwrap_or(DEFAULT_MESSAGE),
        );
        self.transition(AjaxEventStatus::Error, Some(error), message, Self::DEFAULT_DATA)
    }

    fn transition(
        &mut self,
        status: AjaxEventStatus,
        error: Option<E>,
        message: String,
        data: Option<T>,
    ) -> &mut Self {
        let from = self.status;

        self.status = status;
        self.error = error;
        self.message = message;
        self.data = data;

        tracing::trace!(
            from = %from,
            to = %status,
            has_error = self.error.is_some(),
            has_data = self.data.is_some(),
            message = %self.message,
            "AjaxEvent transitioned"
        );

        self
    }

    // ========== Queries ==========

    /// `true` when the status is `Success`.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self.status, AjaxEventStatus::Success)
    }

    /// `true` when the status is `Executing`.
    #[must_use]
    pub const fn is_executing(&self) -> bool {
        matches!(self.status, AjaxEventStatus::Executing)
    }

    /// Negation of [`is_executing`](Self::is_executing).
    #[must_use]
    pub const fn is_not_executing(&self) -> bool {
        !self.is_executing()
    }

    /// `true` when the status is `Ready`.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.status, AjaxEventStatus::Ready)
    }

    /// Negation of [`is_ready`](Self::is_ready).
    #[must_use]
    pub const fn is_not_ready(&self) -> bool {
        !self.is_ready()
    }

    /// `true` when an error is stored.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// `true` when data is stored.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// `true` when the stored message is non-empty.
    ///
    /// Only the stored message counts. A base message that has not been
    /// applied by a transition does not.
    #[must_use]
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    // ========== Accessors ==========

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> AjaxEventStatus {
        self.status
    }

    /// Stored error, present only in the `Error` status.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Stored message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stored data, present only after a successful resolution.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Base messages this event was created with.
    #[must_use]
    pub const fn base_messages(&self) -> &BaseMessages {
        &self.base_messages
    }

    /// Consume the event, returning status, error, message and data.
    #[must_use]
    pub fn into_parts(self) -> (AjaxEventStatus, Option<E>, String, Option<T>) {
        (self.status, self.error, self.message, self.data)
    }
}

impl<T, E> Default for AjaxEvent<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestEvent = AjaxEvent<u64, String>;

    fn failed_event() -> TestEvent {
        let mut event = TestEvent::new();
        event.reject("stale".to_string(), Some("previous failure"));
        event
    }

    #[test]
    fn new_event_is_ready_and_empty() {
        let event = TestEvent::new();

        assert_eq!(event.status(), AjaxEventStatus::Ready);
        assert_eq!(event.error(), None);
        assert_eq!(event.message(), DEFAULT_MESSAGE);
        assert_eq!(event.data(), None);
        assert!(!event.has_error());
        assert!(!event.has_data());
        assert!(!event.has_message());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(TestEvent::default(), TestEvent::new());
    }

    #[test]
    fn reset_to_ready_clears_everything() {
        let mut event = failed_event();

        event.reset_to_ready();

        assert_eq!(event.status(), AjaxEventStatus::Ready);
        assert_eq!(event.error(), None);
        assert_eq!(event.message(), "");
        assert_eq!(event.data(), None);
    }

    #[test]
    fn reset_to_executing_clears_previous_data() {
        let mut event = TestEvent::new();
        event.resolve(Some(7), Some("cached"));

        event.reset_to_executing();

        assert_eq!(event.status(), AjaxEventStatus::Executing);
        assert_eq!(event.error(), None);
        assert_eq!(event.message(), "");
        assert_eq!(event.data(), None);
    }

    #[test]
    fn reset_to_executing_clears_previous_error() {
        let mut event = failed_event();

        event.reset_to_executing();

        assert!(event.is_executing());
        assert!(!event.has_error());
        assert!(!event.has_message());
    }

    #[test]
    fn resolve_stores_data_and_message() {
        let mut event = failed_event();

        event.resolve(Some(99), Some("loaded"));

        assert_eq!(event.status(), AjaxEventStatus::Success);
        assert_eq!(event.error(), None);
        assert_eq!(event.data(), Some(&99));
        assert_eq!(event.message(), "loaded");
    }

    #[test]
    fn resolve_without_arguments_uses_defaults() {
        let mut event = TestEvent::new();

        event.resolve(None, None);

        assert!(event.is_successful());
        assert_eq!(event.data(), None);
        assert_eq!(event.message(), "");
        assert!(!event.has_data());
        assert!(!event.has_message());
    }

    #[test]
    fn reject_stores_error_and_clears_data() {
        let mut event = TestEvent::new();
        event.resolve(Some(5), None);

        event.reject("boom".to_string(), Some("failed"));

        assert_eq!(event.status(), AjaxEventStatus::Error);
        assert_eq!(event.error().map(String::as_str), Some("boom"));
        assert_eq!(event.message(), "failed");
        assert_eq!(event.data(), None);
    }

    #[test]
    fn reject_without_message_uses_default() {
        let mut event = TestEvent::new();

        event.reject("boom".to_string(), None);

        assert!(event.has_error());
        assert_eq!(event.message(), DEFAULT_MESSAGE);
    }

    #[test]
    fn not_predicates_negate() {
        let mut event = TestEvent::new();
        assert!(!event.is_not_ready());
        assert!(event.is_not_executing());

        event.reset_to_executing();
        assert!(event.is_not_ready());
        assert!(!event.is_not_executing());
    }

    #[test]
    fn has_message_tracks_stored_message() {
        let mut event = TestEvent::new();

        event.resolve(Some(1), None);
        assert!(!event.has_message());

        event.resolve(Some(1), Some("Some message"));
        assert!(event.has_message());

        event.reject("oh no".to_string(), Some("Some message"));
        assert!(event.has_message());
    }

    #[test]
    fn base_messages_prefix_terminal_messages_only() {
        let config = BaseMessages::new()
            .with_success("Saved: ")
            .with_error("Failed: ");
        let mut event = TestEvent::with_base_messages(config);

        event.resolve(Some(1), Some("3 rows"));
        assert_eq!(event.message(), "Saved: 3 rows");

        event.reject("io".to_string(), None);
        assert_eq!(event.message(), "Failed: ");

        event.reset_to_executing();
        assert_eq!(event.message(), "");

        event.reset_to_ready();
        assert_eq!(event.message(), "");
    }

    #[test]
    fn unapplied_base_message_does_not_count_as_message() {
        let event = TestEvent::with_base_messages(BaseMessages::new().with_success("Saved"));

        assert!(event.is_ready());
        assert!(!event.has_message());
    }

    #[test]
    fn into_parts_moves_payload_out() {
        let mut event: AjaxEvent<Vec<u8>, String> = AjaxEvent::new();
        event.resolve(Some(vec![1, 2, 3]), Some("bytes"));

        let (status, error, message, data) = event.into_parts();

        assert_eq!(status, AjaxEventStatus::Success);
        assert_eq!(error, None);
        assert_eq!(message, "bytes");
        assert_eq!(data, Some(vec![1, 2, 3]));
    }
}
