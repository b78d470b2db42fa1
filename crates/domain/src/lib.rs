//! Domain layer for RideLink
//!
//! Contains the address candidates returned by geocoding, the per-field
//! selection state machine, and the value objects shared by every layer.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
