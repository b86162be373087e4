//! Test utilities shared across the tickbox crates: fixture builders and a
//! scriptable store for failure injection and in-flight observation.

pub mod fixtures;
pub mod store;

pub use fixtures::{completed_todo, todo, USER};
pub use store::{Call, GateHandle, ScriptedStore};
