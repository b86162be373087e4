//! The tickbox list controller.
//!
//! One [`TodoController`] is constructed per view session and exclusively
//! owns the session state: the item list, the optimistic create draft, the
//! per-item in-flight tracker, the status filter, the single edit target,
//! and the timed error notice. Presentation layers read [`Snapshot`]s and
//! forward user intents back in; they never mutate state directly.
//!
//! Concurrency model: operations are discrete, network calls are the only
//! suspension points, and bulk intents (`toggle_all`, `clear_completed`)
//! fan out one request per item and await the batch jointly with
//! partial-failure semantics. No rollback, no cross-request locking, no
//! retries, no cancellation.

pub mod controller;
pub mod error;
pub mod state;
pub mod tracker;

pub use controller::TodoController;
pub use error::{Result, UiError, ERROR_DISPLAY_DURATION};
pub use state::{EditSession, ListState, Snapshot};
pub use tracker::{OpKind, PendingOps};
