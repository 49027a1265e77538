#![deny(unsafe_code)]

pub mod csv;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod registry;
pub mod tables;

pub use crate::error::StandardsError;
pub use crate::registry::{VerifySummary, load_tables_dir, verify_and_load};
pub use crate::tables::{TableRole, TableSet, default_tables};
