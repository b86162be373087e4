pub mod filter;
pub mod models;

pub use filter::{filter_todos, StatusFilter};
pub use models::{DraftTodo, NewTodo, Todo, TodoId, TodoPatch, UserId};
