use crate::types::{FilterArg, OutputFormat};
use clap::{Parser, Subcommand};
use tickbox_types::TodoId;

#[derive(Parser)]
#[command(name = "tickbox")]
#[command(about = "Manage a remote to-do list from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API root, e.g. https://jsonplaceholder.typicode.com
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Owner of the list on the remote API
    #[arg(long, global = true)]
    pub user: Option<i64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the list, optionally narrowed to active or completed items
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },

    /// Add a new item
    Add {
        #[arg(required = true, trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Mark an item completed
    Done { id: TodoId },

    /// Mark an item active again
    Undone { id: TodoId },

    /// Rename an item. An empty title deletes it, like clearing the title
    /// in an edit field.
    Edit {
        id: TodoId,

        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Delete an item
    Rm { id: TodoId },

    /// Complete every item, or reactivate all when everything is completed
    ToggleAll,

    /// Delete every completed item
    ClearCompleted,
}
