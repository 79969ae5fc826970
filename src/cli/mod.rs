//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod report;

pub use expense::{
    handle_add, handle_delete, handle_edit, handle_list, AddArgs, DeleteArgs, EditArgs, ListArgs,
};
pub use report::handle_summary;
