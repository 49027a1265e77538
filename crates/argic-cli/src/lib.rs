//! Library side of the `argic` command-line tool.

pub mod config;
pub mod logging;
pub mod request;
