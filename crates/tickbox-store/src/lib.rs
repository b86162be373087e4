//! Remote item store seam.
//!
//! The controller only ever talks to [`TodoStore`]; which side of the wire
//! the items live on is a backend detail. [`HttpStore`] speaks to a
//! REST-ish todo API, [`MemoryStore`] keeps everything in-process for tests
//! and offline use.

pub mod error;
pub mod http;
pub mod memory;

pub use error::{Error, Result};
pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use tickbox_types::{NewTodo, Todo, TodoId, TodoPatch, UserId};

/// Contract for the remote item store.
///
/// One method per API operation. Errors are opaque failures to callers:
/// a request either settles successfully or it does not, and the client
/// layer reacts to whichever occurs. No retries here.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Fetch every item owned by `user_id`, in server order.
    async fn list(&self, user_id: UserId) -> Result<Vec<Todo>>;

    /// Create an item; the returned copy carries the server-assigned id.
    async fn create(&self, new_todo: NewTodo) -> Result<Todo>;

    /// Apply a partial update and return the full updated item.
    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo>;

    /// Remove an item by id.
    async fn delete(&self, id: TodoId) -> Result<()>;
}
