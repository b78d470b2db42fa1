//! Address search adapter - Implements AddressSearchPort using integration_nominatim

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::AddressSearchPort;
use async_trait::async_trait;
use domain::{AddressCandidate, AddressDetails};
use integration_nominatim::{AddressSearchClient, NominatimClient, NominatimConfig, NominatimPlace};
use tracing::{debug, instrument, warn};

/// Adapter for address search via Nominatim
///
/// Every client failure is logged and reported to the form as an empty
/// candidate list.
pub struct NominatimSearchAdapter {
    client: Arc<dyn AddressSearchClient>,
}

impl std::fmt::Debug for NominatimSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimSearchAdapter")
            .field("client", &"AddressSearchClient")
            .finish()
    }
}

impl NominatimSearchAdapter {
    /// Create an adapter backed by a [`NominatimClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around any search client
    #[must_use]
    pub fn with_client(client: Arc<dyn AddressSearchClient>) -> Self {
        Self { client }
    }

    /// Convert an integration place to a domain candidate
    ///
    /// Places whose coordinates do not parse or fall outside valid ranges
    /// cannot anchor a ride link and are dropped.
    fn convert_place(place: NominatimPlace) -> Option<AddressCandidate> {
        let candidate = AddressCandidate {
            place_id: place.place_id,
            display_name: place.display_name,
            lat: place.lat,
            lon: place.lon,
            address: AddressDetails {
                road: place.address.road,
                suburb: place.address.suburb,
                neighbourhood: place.address.neighbourhood,
                city: place.address.city,
                postcode: place.address.postcode,
            },
            bounding_box: place.boundingbox,
            name: place.name,
            licence: place.licence,
            osm_type: place.osm_type,
            osm_id: place.osm_id,
        };

        match candidate.location() {
            Ok(location) => {
                debug!(place_id = candidate.place_id, %location, "Candidate located");
                Some(candidate)
            },
            Err(e) => {
                warn!(place_id = candidate.place_id, error = %e, "Dropping place with unusable coordinates");
                None
            },
        }
    }
}

#[async_trait]
impl AddressSearchPort for NominatimSearchAdapter {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Vec<AddressCandidate> {
        match self.client.search(query).await {
            Ok(places) => {
                debug!(count = places.len(), "Address candidates received");
                places.into_iter().filter_map(Self::convert_place).collect()
            },
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Address search failed, showing no results");
                Vec::new()
            },
        }
    }
}
