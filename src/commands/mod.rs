//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation.

pub mod config;
pub mod list;
pub mod tag;

pub use config::execute as config;
pub use list::execute as list;
pub use tag::execute as tag;
pub use tag::{show as tags, untag};
