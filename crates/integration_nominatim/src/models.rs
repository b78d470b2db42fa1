//! Nominatim response models

use serde::{Deserialize, Serialize};

/// Structured address block returned with `addressdetails=1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominatimAddress {
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub neighbourhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

/// One entry of the `/search` JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominatimPlace {
    pub place_id: u64,
    #[serde(default)]
    pub licence: Option<String>,
    #[serde(default)]
    pub osm_type: Option<String>,
    #[serde(default)]
    pub osm_id: Option<u64>,
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    #[serde(default)]
    pub address: NominatimAddress,
    #[serde(default)]
    pub boundingbox: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
}
