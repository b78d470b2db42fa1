//! Ride deep-link builder
//!
//! Pure functions mapping a provider and two confirmed addresses to the
//! absolute URL that opens the ride app with pickup and dropoff filled in.
//! Parameter values are `application/x-www-form-urlencoded`.
//!
//! The raw typed text is used for titles and formatted addresses because the
//! geocoder's display name may drop the house number the user typed.

use domain::{AddressCandidate, FieldRole, FieldState, Provider};
use tracing::debug;
use url::form_urlencoded;

use crate::error::ApplicationError;

/// 99 app deep-link endpoint
pub const NINETY_NINE_LINK_BASE: &str = "https://99.onelink.me/Mayr/ac1f1c4e";

/// Uber universal-link endpoint
pub const UBER_LINK_BASE: &str = "https://m.uber.com/ul/";

const NINETY_NINE_CLIENT_ID: &str = "GOOGLE_MAPS";
const NINETY_NINE_PRODUCT_ID: &str = "316";
const FARE_CURRENCY: &str = "BRL";

/// One end of the ride: the confirmed candidate plus what the user typed
#[derive(Debug, Clone, Copy)]
pub struct RideEndpoint<'a> {
    /// The candidate the user confirmed
    pub candidate: &'a AddressCandidate,
    /// The raw text typed into the field
    pub typed_text: &'a str,
}

impl<'a> RideEndpoint<'a> {
    /// Create an endpoint
    #[must_use]
    pub const fn new(candidate: &'a AddressCandidate, typed_text: &'a str) -> Self {
        Self {
            candidate,
            typed_text,
        }
    }

    /// Endpoint of a confirmed field, `None` otherwise
    #[must_use]
    pub fn from_field(field: &'a FieldState) -> Option<Self> {
        field
            .confirmed()
            .map(|candidate| Self::new(candidate, field.text()))
    }
}

/// Build the deep link for `provider`
#[must_use]
pub fn build_link(provider: Provider, pickup: RideEndpoint<'_>, dropoff: RideEndpoint<'_>) -> String {
    let link = match provider {
        Provider::NinetyNine => ninety_nine_link(pickup, dropoff),
        Provider::Uber => uber_link(pickup, dropoff),
    };
    debug!(%provider, len = link.len(), "Built ride link");
    link
}

/// Build the deep link from two fields, refusing unless both are confirmed
pub fn build_link_for_fields(
    provider: Provider,
    origin: &FieldState,
    destination: &FieldState,
) -> Result<String, ApplicationError> {
    match (
        RideEndpoint::from_field(origin),
        RideEndpoint::from_field(destination),
    ) {
        (Some(pickup), Some(dropoff)) => Ok(build_link(provider, pickup, dropoff)),
        _ => Err(ApplicationError::SelectionIncomplete),
    }
}

fn ninety_nine_link(pickup: RideEndpoint<'_>, dropoff: RideEndpoint<'_>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("client_id", NINETY_NINE_CLIENT_ID)
        .append_pair("deep_link_product_id", NINETY_NINE_PRODUCT_ID);

    for (role, end) in [(FieldRole::Origin, pickup), (FieldRole::Destination, dropoff)] {
        let prefix = role.link_prefix();
        query
            .append_pair(&format!("{prefix}_latitude"), &end.candidate.lat)
            .append_pair(&format!("{prefix}_longitude"), &end.candidate.lon)
            .append_pair(&format!("{prefix}_title"), end.typed_text)
            .append_pair(
                &format!("{prefix}_formatted_address"),
                &end.candidate.display_name,
            );
    }

    query.append_pair("fare_currency", FARE_CURRENCY);

    format!("{NINETY_NINE_LINK_BASE}?{}", query.finish())
}

fn uber_link(pickup: RideEndpoint<'_>, dropoff: RideEndpoint<'_>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("action", "setPickup");

    for (role, end) in [(FieldRole::Origin, pickup), (FieldRole::Destination, dropoff)] {
        let prefix = role.link_prefix();
        query
            .append_pair(&format!("{prefix}[latitude]"), &end.candidate.lat)
            .append_pair(&format!("{prefix}[longitude]"), &end.candidate.lon)
            .append_pair(&format!("{prefix}[formatted_address]"), end.typed_text);
    }

    format!("{UBER_LINK_BASE}?{}", query.finish())
}
