//! Value Objects - Immutable, identity-less domain primitives

mod field_role;
mod geo_location;
mod provider;

pub use field_role::FieldRole;
pub use geo_location::GeoLocation;
pub use provider::Provider;
