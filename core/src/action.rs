//! Transitions as values.
//!
//! [`AjaxEventAction`] names each of the four transitions so that a lifecycle
//! can be recorded, queued by the caller, or replayed against a fresh event.

use crate::event::AjaxEvent;

/// One transition of an [`AjaxEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AjaxEventAction<T, E> {
    /// See [`AjaxEvent::reset_to_ready`].
    ResetToReady,
    /// See [`AjaxEvent::reset_to_executing`].
    ResetToExecuting,
    /// See [`AjaxEvent::resolve`].
    Resolve {
        /// Payload of the successful request
        data: Option<T>,
        /// Optional message; `None` means the default message
        message: Option<String>,
    },
    /// See [`AjaxEvent::reject`].
    Reject {
        /// Error of the failed request
        error: E,
        /// Optional message; `None` means the default message
        message: Option<String>,
    },
}

impl<T, E> AjaxEventAction<T, E> {
    /// Name of the transition, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ResetToReady => "ResetToReady",
            Self::ResetToExecuting => "ResetToExecuting",
            Self::Resolve { .. } => "Resolve",
            Self::Reject { .. } => "Reject",
        }
    }
}

impl<T, E> AjaxEvent<T, E> {
    /// Apply a single action.
    pub fn apply(&mut self, action: AjaxEventAction<T, E>) -> &mut Self {
        tracing::debug!(action = action.name(), "Applying action");

        match action {
            AjaxEventAction::ResetToReady => self.reset_to_ready(),
            AjaxEventAction::ResetToExecuting => self.reset_to_executing(),
            AjaxEventAction::Resolve { data, message } => self.resolve(data, message.as_deref()),
            AjaxEventAction::Reject { error, message } => self.reject(error, message.as_deref()),
        }
    }

    /// Apply actions in order.
    pub fn apply_all<I>(&mut self, actions: I) -> &mut Self
    where
        I: IntoIterator<Item = AjaxEventAction<T, E>>,
    {
        for action in actions {
            self.apply(action);
        }
        self
    }
}
