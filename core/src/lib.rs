//! State container and data-loading core for the terminal todo viewer.
//!
//! # Overview
//! [`TodoStore`] holds the todo collection plus loading/error status and
//! mediates all reads and writes. The asynchronous load follows the
//! host-does-IO pattern: `begin_load` returns an [`HttpRequest`] for the
//! caller to execute, and `finish_load` applies the outcome through the
//! single mutation entry point. The core never touches the network,
//! making every state transition deterministic and testable.
//!
//! # Design
//! - [`TodoClient`] is stateless — it holds only `base_url` and splits
//!   the remote listing into `build_fetch` / `parse_fetch`.
//! - [`TodoStore`] exposes `subscribe`/`unsubscribe` plus a `state()`
//!   snapshot read so views re-render reactively without the core
//!   depending on any rendering technology.
//! - Every load failure collapses into one fixed user-visible message;
//!   the concrete [`LoadError`] is logged, not surfaced.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::LoadError;
pub use http::{HttpRequest, HttpResponse};
pub use store::{SubscriptionId, TodoStore, TodosState, LOAD_FAILED_MESSAGE};
pub use types::Todo;
