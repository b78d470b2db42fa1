//! Address search integration for RideLink
//!
//! Provides free-text address search via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org), returning
//! the raw candidate list in the order the service ranked it.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`AddressSearchClient`] defines the interface, implemented by
//! [`NominatimClient`]. Failures are typed here; callers that want the
//! "empty list on any failure" behaviour collapse them at the adapter layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_nominatim::{AddressSearchClient, NominatimClient, NominatimConfig};
//!
//! let client = NominatimClient::new(&NominatimConfig::default())?;
//! let places = client.search("Rua Tiradentes 100, Santos").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{AddressSearchClient, NominatimClient};
pub use config::NominatimConfig;
pub use error::NominatimError;
pub use models::{NominatimAddress, NominatimPlace};
