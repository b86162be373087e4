// NOTE: tickbox CLI Architecture
//
// The binary is session-per-invocation: every subcommand builds a fresh
// controller over the HTTP store, loads the list once, applies exactly one
// user intent, and renders the resulting snapshot. There is no daemon and
// no local cache; the remote API is the single source of truth, and the
// controller's optimistic bookkeeping exists for the in-flight window of
// that one intent.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod output;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
