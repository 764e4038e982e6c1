//! CLI domain: parse and route only.

mod parse;
mod route;

pub use parse::{Cli, Commands, SourceArgs};
pub use route::RunContext;
