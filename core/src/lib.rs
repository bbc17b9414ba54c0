//! # AjaxEvent
//!
//! A small state holder tracking the lifecycle of one asynchronous request.
//!
//! ## Core Concepts
//!
//! - **Status**: `Ready`, `Executing`, `Error` or `Success`
//! - **Transitions**: `reset_to_ready`, `reset_to_executing`, `resolve`, `reject`
//! - **Queries**: side-effect free predicates such as `is_executing` and `has_data`
//! - **Base messages**: optional prefixes for success and error messages
//!
//! The event does not perform requests, retries or scheduling. The caller owns
//! the request and reports its progress:
//!
//! ```
//! use ajax_event::AjaxEvent;
//!
//! fn fetch_user(id: u32) -> Result<String, String> {
//!     if id == 0 { Err("no such user".to_string()) } else { Ok(format!("user-{id}")) }
//! }
//!
//! let mut event: AjaxEvent<String, String> = AjaxEvent::new();
//!
//! event.reset_to_executing();
//! match fetch_user(7) {
//!     Ok(user) => event.resolve(Some(user), Some("loaded")),
//!     Err(e) => event.reject(e, Some("could not load user")),
//! };
//!
//! assert!(event.is_successful());
//! assert_eq!(event.data().map(String::as_str), Some("user-7"));
//! ```
//!
//! Every state is reachable from every other one. The conventional order is
//! `Ready → Executing → (Success | Error) → Ready`, but it is not enforced.

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod status;

pub use action::AjaxEventAction;
pub use config::BaseMessages;
pub use error::ParseStatusError;
pub use event::{AjaxEvent, DEFAULT_MESSAGE};
pub use status::AjaxEventStatus;
