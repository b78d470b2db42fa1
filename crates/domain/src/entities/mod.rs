//! Domain entities - Objects with identity and lifecycle

mod address_candidate;
mod field_state;

pub use address_candidate::{AddressCandidate, AddressDetails};
pub use field_state::{ApplyOutcome, FieldPhase, FieldState};
