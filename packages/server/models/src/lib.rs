#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the playground map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the dataset record types so the API contract can evolve
//! independently of the dataset shape.

use playground_map_playground_models::{
    Accessibility, Borough, ComfortStation, PlaygroundRecord, PlaygroundReview,
};
use playground_map_query::{BathroomRequirement, FilterCriteria, FilterMatch};
use playground_map_spatial::BoundingBox;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Always `true` when the server is responding.
    pub healthy: bool,
    /// Crate version.
    pub version: String,
}

/// One borough in the taxonomy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBorough {
    /// Property-ID prefix character.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl From<Borough> for ApiBorough {
    fn from(borough: Borough) -> Self {
        Self {
            code: borough.code().to_string(),
            name: borough.to_string(),
        }
    }
}

/// A feature badge shown in a marker popup, e.g. `{"kind": "spray",
/// "label": "2 Spray Showers"}`. The kind doubles as the frontend's
/// styling hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFeatureTag {
    /// Stable tag kind: `accessible`, `spray`, `sensory`, `bathroom`,
    /// `fountain`.
    pub kind: String,
    /// Human-readable label.
    pub label: String,
}

impl ApiFeatureTag {
    fn new(kind: &str, label: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            label: label.into(),
        }
    }
}

/// A playground as returned by the API: everything the frontend needs to
/// place a marker and render its popup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlayground {
    /// Property code.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text location description.
    pub location: String,
    /// Borough display name, when the property code prefix is recognized.
    pub borough: Option<String>,
    /// Latitude; absent for records that cannot be mapped.
    pub latitude: Option<f64>,
    /// Longitude; absent for records that cannot be mapped.
    pub longitude: Option<f64>,
    /// Popup feature badges.
    pub features: Vec<ApiFeatureTag>,
    /// Miles from the search origin; present only for proximity results.
    pub distance_miles: Option<f64>,
    /// Curated review content, when present.
    pub review: Option<PlaygroundReview>,
}

impl ApiPlayground {
    /// Builds the API shape from one pipeline match.
    #[must_use]
    pub fn from_match(m: &FilterMatch<'_>) -> Self {
        let record = m.playground;
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            location: record.location.clone(),
            borough: record.borough().map(|b| b.to_string()),
            latitude: record.coordinates.map(|c| c.latitude),
            longitude: record.coordinates.map(|c| c.longitude),
            features: feature_tags(record),
            distance_miles: m.distance_from_search,
            review: record.review.clone(),
        }
    }
}

/// Derives the popup feature badges for a record, in display order.
#[must_use]
pub fn feature_tags(record: &PlaygroundRecord) -> Vec<ApiFeatureTag> {
    let mut tags = Vec::new();

    if record.accessible == Accessibility::Yes {
        tags.push(ApiFeatureTag::new("accessible", "Accessible"));
    }

    if record.has_spray_showers {
        let label = match record.spray_shower_count {
            Some(1) => "1 Spray Shower".to_string(),
            Some(count) => format!("{count} Spray Showers"),
            None => "Spray Showers".to_string(),
        };
        tags.push(ApiFeatureTag::new("spray", label));
    }

    if record.sensory_friendly {
        tags.push(ApiFeatureTag::new("sensory", "Sensory-Friendly"));
    }

    match record.comfort_station {
        ComfortStation::Accessible => {
            tags.push(ApiFeatureTag::new("bathroom", "Accessible Bathrooms"));
        }
        ComfortStation::NotAccessible => {
            tags.push(ApiFeatureTag::new("bathroom", "Bathrooms"));
        }
        ComfortStation::None | ComfortStation::Unknown => {}
    }

    if record.has_drinking_fountains {
        tags.push(ApiFeatureTag::new("fountain", "Drinking Fountains"));
    }

    tags
}

/// Query parameters shared by the playgrounds and nearby endpoints.
///
/// Parsing is lenient: an unrecognized value deactivates that predicate
/// rather than failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundQueryParams {
    /// Borough code (`B`/`Q`/`M`/`X`/`R`) or display name.
    pub borough: Option<String>,
    /// Accessibility state (`Yes`/`No`/`Unknown`).
    pub accessible: Option<String>,
    /// Bathroom requirement (`any`/`accessible`/`none`).
    pub bathroom: Option<String>,
    /// Require spray showers.
    pub spray_showers: Option<bool>,
    /// Require the sensory-friendly designation.
    pub sensory_friendly: Option<bool>,
    /// Require drinking fountains.
    pub drinking_fountains: Option<bool>,
    /// Require curated review content.
    pub curated_review: Option<bool>,
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// Free-text address (nearby endpoint only).
    pub address: Option<String>,
    /// Search radius in miles (nearby endpoint only).
    pub radius: Option<f64>,
}

impl PlaygroundQueryParams {
    /// Builds the pipeline criteria from the non-proximity parameters.
    /// The proximity constraint is added by the nearby handler after
    /// geocoding succeeds.
    #[must_use]
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            borough: self.borough.as_deref().and_then(parse_borough),
            accessibility: self
                .accessible
                .as_deref()
                .and_then(|s| s.trim().parse::<Accessibility>().ok()),
            bathroom: self
                .bathroom
                .as_deref()
                .and_then(|s| s.trim().parse::<BathroomRequirement>().ok()),
            spray_showers: self.spray_showers.unwrap_or(false),
            sensory_friendly: self.sensory_friendly.unwrap_or(false),
            drinking_fountains: self.drinking_fountains.unwrap_or(false),
            curated_review: self.curated_review.unwrap_or(false),
            name_search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            proximity: None,
        }
    }
}

/// Parses a borough from a single code character or a display name.
fn parse_borough(raw: &str) -> Option<Borough> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Borough::from_code(code.to_ascii_uppercase()),
        _ => trimmed.parse::<Borough>().ok(),
    }
}

/// Response for the playgrounds endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFilterResults {
    /// Total matches, including records without coordinates.
    pub total: usize,
    /// How many matches have spray showers.
    pub spray_shower_count: usize,
    /// Viewport to fit the map to, when the result set is small enough.
    pub bounds: Option<BoundingBox>,
    /// Matches in result order.
    pub playgrounds: Vec<ApiPlayground>,
}

/// Response for the nearby-search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNearbyResults {
    /// Human-readable place the address resolved to.
    pub resolved_place: String,
    /// Latitude of the search origin.
    pub origin_latitude: f64,
    /// Longitude of the search origin.
    pub origin_longitude: f64,
    /// Search radius in miles.
    pub radius_miles: f64,
    /// Human-readable radius label (walking time for the UI presets).
    pub radius_label: String,
    /// Total matches within the radius.
    pub total: usize,
    /// How many matches have spray showers.
    pub spray_shower_count: usize,
    /// Viewport to fit the map to, when the result set is small enough.
    pub bounds: Option<BoundingBox>,
    /// Matches, nearest first.
    pub playgrounds: Vec<ApiPlayground>,
}

/// Dataset totals for the welcome panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStats {
    /// Records in the dataset.
    pub total_playgrounds: usize,
    /// Records that can be placed on the map.
    pub with_coordinates: usize,
    /// Records with spray showers.
    pub with_spray_showers: usize,
    /// Records designated sensory-friendly.
    pub sensory_friendly: usize,
    /// Records marked accessible.
    pub accessible: usize,
}

impl ApiStats {
    /// Computes the dataset totals.
    #[must_use]
    pub fn from_dataset(dataset: &[PlaygroundRecord]) -> Self {
        Self {
            total_playgrounds: dataset.len(),
            with_coordinates: dataset.iter().filter(|r| r.coordinates.is_some()).count(),
            with_spray_showers: dataset.iter().filter(|r| r.has_spray_showers).count(),
            sensory_friendly: dataset.iter().filter(|r| r.sensory_friendly).count(),
            accessible: dataset
                .iter()
                .filter(|r| r.accessible == Accessibility::Yes)
                .count(),
        }
    }
}
