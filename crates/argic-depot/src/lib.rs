//! Client for the depot lookup SOAP service.
//!
//! The service exposes a single operation we use, `GetDepots`, which lists
//! the depots an account can book fitting work into. This crate builds the
//! SOAP 1.1 envelope, posts it, and parses the answer.
//!
//! ```no_run
//! use argic_depot::{Credentials, DepotConfig, DepotLookup, SoapDepotClient};
//!
//! let client = SoapDepotClient::new(DepotConfig::default())?;
//! for depot in client.fetch_depots(&Credentials::new("ACCOUNT", "secret"))? {
//!     println!("{}: {}", depot.depot_code, depot.depot_name);
//! }
//! # Ok::<(), argic_depot::DepotError>(())
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod response;

pub use client::{DepotLookup, SoapDepotClient};
pub use config::{Credentials, DepotConfig};
pub use error::{DepotError, Result};
pub use response::{Depot, DepotsResponse};
