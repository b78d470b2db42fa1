//! Address candidate domain entity

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// Structured address parts attached to a candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetails {
    /// Street name
    pub road: Option<String>,
    /// Suburb (bairro)
    pub suburb: Option<String>,
    /// Neighbourhood, used when no suburb is known
    pub neighbourhood: Option<String>,
    /// City
    pub city: Option<String>,
    /// Postal code (CEP)
    pub postcode: Option<String>,
}

/// One geocoding result describing a plausible real-world address
///
/// Coordinates are kept as the decimal strings the service returned so the
/// generated links carry them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCandidate {
    /// Stable identifier assigned by the geocoding service
    pub place_id: u64,
    /// Human-readable full address
    pub display_name: String,
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
    /// Structured address parts
    #[serde(default)]
    pub address: AddressDetails,
    /// Bounding box as `[min_lat, max_lat, min_lon, max_lon]`
    #[serde(default)]
    pub bounding_box: Vec<String>,
    /// Name of the place (POIs), if any
    #[serde(default)]
    pub name: Option<String>,
    /// Data licence attribution
    #[serde(default)]
    pub licence: Option<String>,
    /// OSM element type ("node", "way", "relation")
    #[serde(default)]
    pub osm_type: Option<String>,
    /// OSM element identifier
    #[serde(default)]
    pub osm_id: Option<u64>,
}

impl AddressCandidate {
    /// Create a candidate with the mandatory fields
    #[must_use]
    pub fn new(
        place_id: u64,
        display_name: impl Into<String>,
        lat: impl Into<String>,
        lon: impl Into<String>,
    ) -> Self {
        Self {
            place_id,
            display_name: display_name.into(),
            lat: lat.into(),
            lon: lon.into(),
            address: AddressDetails::default(),
            bounding_box: Vec::new(),
            name: None,
            licence: None,
            osm_type: None,
            osm_id: None,
        }
    }

    /// Attach structured address parts
    #[must_use]
    pub fn with_address(mut self, address: AddressDetails) -> Self {
        self.address = address;
        self
    }

    /// Attach a place name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Main line of a list entry: road, else place name, else the first
    /// segment of the display name
    #[must_use]
    pub fn title(&self) -> &str {
        non_empty(self.address.road.as_deref())
            .or_else(|| non_empty(self.name.as_deref()))
            .unwrap_or_else(|| {
                self.display_name
                    .split(',')
                    .next()
                    .unwrap_or_default()
                    .trim()
            })
    }

    /// Secondary line of a list entry: suburb or neighbourhood, then the city
    #[must_use]
    pub fn subtitle(&self) -> String {
        let area = non_empty(self.address.suburb.as_deref())
            .or_else(|| non_empty(self.address.neighbourhood.as_deref()))
            .unwrap_or_default();

        match non_empty(self.address.city.as_deref()) {
            Some(city) => format!("{area} - {city}"),
            None => area.to_string(),
        }
    }

    /// Parsed, validated coordinates
    pub fn location(&self) -> Result<GeoLocation, DomainError> {
        GeoLocation::parse(&self.lat, &self.lon)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
