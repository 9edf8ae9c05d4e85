//! CLI command implementations

pub mod completions;
pub mod config;
pub mod info;
pub mod interactive;
pub mod lookup;
pub mod neighbors;
pub mod path;
