#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Playground domain types shared across the playground map system.
//!
//! Defines the borough/accessibility/comfort-station vocabularies and the
//! canonical [`PlaygroundRecord`] parsed from the NYC Parks playground
//! dataset. The raw dataset is permissively typed — coordinates arrive as
//! strings or numbers, optional fields carry the literal string `"Unknown"`,
//! and whole sections may be absent — so parsing happens through
//! [`RawPlayground`], which tolerates all of that and degrades bad fields to
//! absent rather than failing the record.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One of the five NYC boroughs, encoded as the first character of a
/// playground's property ID.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "title_case")]
pub enum Borough {
    /// Property IDs starting with `B`.
    Brooklyn,
    /// Property IDs starting with `Q`.
    Queens,
    /// Property IDs starting with `M`.
    Manhattan,
    /// Property IDs starting with `X`.
    Bronx,
    /// Property IDs starting with `R`.
    StatenIsland,
}

impl Borough {
    /// Returns the single-character property-ID prefix for this borough.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Brooklyn => 'B',
            Self::Queens => 'Q',
            Self::Manhattan => 'M',
            Self::Bronx => 'X',
            Self::StatenIsland => 'R',
        }
    }

    /// Decodes a borough from a property-ID prefix character.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'B' => Some(Self::Brooklyn),
            'Q' => Some(Self::Queens),
            'M' => Some(Self::Manhattan),
            'X' => Some(Self::Bronx),
            'R' => Some(Self::StatenIsland),
            _ => None,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Brooklyn,
            Self::Queens,
            Self::Manhattan,
            Self::Bronx,
            Self::StatenIsland,
        ]
    }
}

/// Tri-state accessibility flag from the dataset's `Accessible` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "title_case")]
pub enum Accessibility {
    /// The playground is accessible.
    Yes,
    /// The playground is not accessible.
    No,
    /// The dataset does not say.
    Unknown,
}

impl Accessibility {
    /// Parses the raw dataset value. Anything other than a literal
    /// `"Yes"`/`"No"` is [`Self::Unknown`].
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("Yes") => Self::Yes,
            Some("No") => Self::No,
            _ => Self::Unknown,
        }
    }
}

/// Comfort station (public restroom) status from the dataset's
/// `ADA_Accessible_Comfort_Station` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "title_case")]
pub enum ComfortStation {
    /// An ADA-accessible comfort station is present.
    Accessible,
    /// A comfort station is present but not accessible.
    NotAccessible,
    /// No comfort station.
    None,
    /// The dataset does not say.
    Unknown,
}

impl ComfortStation {
    /// Parses the raw dataset value. The source encodes "not accessible"
    /// both with and without the space, and uses `"No"` for "no station".
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("Accessible") => Self::Accessible,
            Some("Not Accessible" | "NotAccessible") => Self::NotAccessible,
            Some("No") => Self::None,
            _ => Self::Unknown,
        }
    }

    /// `true` when a comfort station exists at all, accessible or not.
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Accessible | Self::NotAccessible)
    }
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Curated review content attached to some playground records.
///
/// Every field is optional; the raw dataset uses the literal string
/// `"Unknown"` as an absent marker, which parsing strips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundReview {
    /// Suggested age range, e.g. `"2-5"`.
    pub best_age_range: Option<String>,
    /// Ordered descriptive theme tags.
    pub theme_tags: Vec<String>,
    /// Ordered novelty/standout tags.
    pub novelty_tags: Vec<String>,
    /// Single emoji summarizing the playground.
    pub emoji: Option<String>,
    /// Free-text reviewer notes.
    pub notes: Option<String>,
}

impl PlaygroundReview {
    /// `true` when no field carries content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best_age_range.is_none()
            && self.theme_tags.is_empty()
            && self.novelty_tags.is_empty()
            && self.emoji.is_none()
            && self.notes.is_none()
    }
}

/// A playground as used throughout the system. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundRecord {
    /// Borough-prefixed property code, unique within the dataset.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text address / location description.
    pub location: String,
    /// Coordinates, absent when the raw fields were missing or non-numeric.
    /// Records without coordinates stay in the dataset but are excluded
    /// from geometry-dependent features.
    pub coordinates: Option<Coordinates>,
    /// Accessibility tri-state.
    pub accessible: Accessibility,
    /// Designated sensory-friendly (raw `"Y"` flag).
    pub sensory_friendly: bool,
    /// Comfort station status.
    pub comfort_station: ComfortStation,
    /// Number of spray showers, absent when invalid in the source.
    pub spray_shower_count: Option<u32>,
    /// Whether the playground has spray showers.
    pub has_spray_showers: bool,
    /// Number of drinking fountains, absent when invalid in the source.
    pub drinking_fountain_count: Option<u32>,
    /// Whether the playground has drinking fountains.
    pub has_drinking_fountains: bool,
    /// Curated review content, when present and non-empty.
    pub review: Option<PlaygroundReview>,
}

impl PlaygroundRecord {
    /// Decodes the borough from the first character of the property ID.
    #[must_use]
    pub fn borough(&self) -> Option<Borough> {
        self.id.chars().next().and_then(Borough::from_code)
    }

    /// `true` when the record carries curated review content with a real
    /// emoji tag (non-empty and not the `"Unknown"` sentinel, which parsing
    /// already strips).
    #[must_use]
    pub fn has_curated_review(&self) -> bool {
        self.review.as_ref().is_some_and(|r| r.emoji.is_some())
    }

    /// Builds a record from the raw dataset shape.
    ///
    /// Returns `None` when the record has no usable identity (missing or
    /// empty property ID or name) — such entries cannot be displayed or
    /// filtered and are dropped by the loader, which counts them.
    #[must_use]
    pub fn from_raw(raw: RawPlayground) -> Option<Self> {
        let id = raw.prop_id.map(|s| s.trim().to_string())?;
        let name = raw.name.map(|s| s.trim().to_string())?;
        if id.is_empty() || name.is_empty() {
            return None;
        }

        let latitude = raw.lat.as_ref().and_then(parse_coordinate);
        let longitude = raw.lon.as_ref().and_then(parse_coordinate);
        let coordinates = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };

        let spray_shower_count = raw.spray_shower_count.as_ref().and_then(parse_count);
        let has_spray_showers = spray_shower_count
            .map_or_else(|| raw.has_spray_showers.unwrap_or(false), |c| c > 0);

        let drinking_fountain_count = raw.drinking_fountain_count.as_ref().and_then(parse_count);
        let has_drinking_fountains = drinking_fountain_count
            .map_or_else(|| raw.has_drinking_fountains.unwrap_or(false), |c| c > 0);

        let review = raw.review.map(RawReview::into_review).filter(|r| !r.is_empty());

        Some(Self {
            id,
            name,
            location: raw.location.unwrap_or_default().trim().to_string(),
            coordinates,
            accessible: Accessibility::from_raw(raw.accessible.as_deref()),
            sensory_friendly: raw
                .sensory_friendly
                .as_deref()
                .is_some_and(|s| s.trim() == "Y"),
            comfort_station: ComfortStation::from_raw(raw.comfort_station.as_deref()),
            spray_shower_count,
            has_spray_showers,
            drinking_fountain_count,
            has_drinking_fountains,
            review,
        })
    }
}

/// The raw dataset shape of a single playground entry.
///
/// Field names and typing follow the source JSON exactly. Everything is
/// optional; conversion to [`PlaygroundRecord`] decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayground {
    /// Borough-prefixed property code.
    #[serde(rename = "Prop_ID", alias = "prop_id", default)]
    pub prop_id: Option<String>,
    /// Display name.
    #[serde(rename = "Name", alias = "name", default)]
    pub name: Option<String>,
    /// Free-text location description.
    #[serde(rename = "Location", alias = "location", default)]
    pub location: Option<String>,
    /// Latitude as a string or number.
    #[serde(default)]
    pub lat: Option<serde_json::Value>,
    /// Longitude as a string or number.
    #[serde(default)]
    pub lon: Option<serde_json::Value>,
    /// `"Yes"` / `"No"` accessibility flag.
    #[serde(rename = "Accessible", default)]
    pub accessible: Option<String>,
    /// `"Y"` when designated sensory-friendly.
    #[serde(rename = "Sensory-Friendly", default)]
    pub sensory_friendly: Option<String>,
    /// Comfort station status string.
    #[serde(rename = "ADA_Accessible_Comfort_Station", default)]
    pub comfort_station: Option<String>,
    /// Spray shower count as a string or number.
    #[serde(default)]
    pub spray_shower_count: Option<serde_json::Value>,
    /// Pre-derived spray shower flag, honored when the count is absent.
    #[serde(default)]
    pub has_spray_showers: Option<bool>,
    /// Drinking fountain count as a string or number.
    #[serde(default)]
    pub drinking_fountain_count: Option<serde_json::Value>,
    /// Pre-derived drinking fountain flag, honored when the count is absent.
    #[serde(default)]
    pub has_drinking_fountains: Option<bool>,
    /// Curated review block.
    #[serde(default)]
    pub review: Option<RawReview>,
}

/// The raw shape of the curated review block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReview {
    /// Suggested age range, possibly the `"Unknown"` sentinel.
    #[serde(default)]
    pub best_age_range: Option<String>,
    /// Theme tags, possibly containing sentinels.
    #[serde(default)]
    pub theme_tags: Vec<String>,
    /// Novelty tags, possibly containing sentinels.
    #[serde(default)]
    pub novelty_tags: Vec<String>,
    /// Emoji tag, possibly the `"Unknown"` sentinel.
    #[serde(default)]
    pub emoji: Option<String>,
    /// Reviewer notes, possibly the `"Unknown"` sentinel.
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawReview {
    fn into_review(self) -> PlaygroundReview {
        PlaygroundReview {
            best_age_range: strip_sentinel(self.best_age_range),
            theme_tags: strip_sentinels(self.theme_tags),
            novelty_tags: strip_sentinels(self.novelty_tags),
            emoji: strip_sentinel(self.emoji),
            notes: strip_sentinel(self.notes),
        }
    }
}

/// `true` for the dataset's "absent" markers: empty strings and any casing
/// of the literal `"Unknown"`.
fn is_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown")
}

fn strip_sentinel(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !is_sentinel(s))
}

fn strip_sentinels(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !is_sentinel(s))
        .collect()
}

/// Parses a coordinate that may be a JSON number or a numeric string.
/// Non-finite and non-numeric values are absent.
fn parse_coordinate(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Parses a non-negative count that may be a JSON number or a numeric
/// string. Negative and non-numeric values are absent.
fn parse_count(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from(value: serde_json::Value) -> RawPlayground {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn borough_code_roundtrip() {
        for borough in Borough::all() {
            assert_eq!(Borough::from_code(borough.code()), Some(*borough));
        }
        assert_eq!(Borough::from_code('Z'), None);
    }

    #[test]
    fn borough_display_names() {
        assert_eq!(Borough::StatenIsland.to_string(), "Staten Island");
        assert_eq!(Borough::Bronx.to_string(), "Bronx");
    }

    #[test]
    fn parses_full_record() {
        let record = PlaygroundRecord::from_raw(raw_from(json!({
            "Prop_ID": "Q001",
            "Name": "Sunset Park Playground",
            "Location": "44th St & 5th Ave",
            "lat": "40.65",
            "lon": -73.99,
            "Accessible": "Yes",
            "Sensory-Friendly": "Y",
            "ADA_Accessible_Comfort_Station": "Not Accessible",
            "spray_shower_count": 2,
            "drinking_fountain_count": "3",
        })))
        .unwrap();

        assert_eq!(record.borough(), Some(Borough::Queens));
        assert_eq!(record.accessible, Accessibility::Yes);
        assert!(record.sensory_friendly);
        assert_eq!(record.comfort_station, ComfortStation::NotAccessible);
        assert_eq!(record.spray_shower_count, Some(2));
        assert!(record.has_spray_showers);
        assert_eq!(record.drinking_fountain_count, Some(3));
        assert!(record.has_drinking_fountains);

        let coords = record.coordinates.unwrap();
        assert!((coords.latitude - 40.65).abs() < 1e-9);
        assert!((coords.longitude - -73.99).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_coordinates_are_absent() {
        let record = PlaygroundRecord::from_raw(raw_from(json!({
            "Prop_ID": "B101",
            "Name": "Prospect Playground",
            "lat": "n/a",
            "lon": "-73.97",
        })))
        .unwrap();
        assert!(record.coordinates.is_none());
    }

    #[test]
    fn negative_count_is_absent() {
        let record = PlaygroundRecord::from_raw(raw_from(json!({
            "Prop_ID": "M050",
            "Name": "Chelsea Park",
            "spray_shower_count": -1,
        })))
        .unwrap();
        assert_eq!(record.spray_shower_count, None);
        assert!(!record.has_spray_showers);
    }

    #[test]
    fn derived_flag_falls_back_to_raw_flag() {
        let record = PlaygroundRecord::from_raw(raw_from(json!({
            "Prop_ID": "M051",
            "Name": "Hudson Playground",
            "has_spray_showers": true,
        })))
        .unwrap();
        assert!(record.has_spray_showers);
        assert_eq!(record.spray_shower_count, None);
    }

    #[test]
    fn record_without_identity_is_dropped() {
        assert!(PlaygroundRecord::from_raw(raw_from(json!({ "Name": "Nameless" }))).is_none());
        assert!(PlaygroundRecord::from_raw(raw_from(json!({ "Prop_ID": "  " }))).is_none());
    }

    #[test]
    fn review_sentinels_are_stripped() {
        let record = PlaygroundRecord::from_raw(raw_from(json!({
            "Prop_ID": "X200",
            "Name": "Crotona Playground",
            "review": {
                "best_age_range": "Unknown",
                "theme_tags": ["water", "Unknown", "climbing"],
                "emoji": "🛝",
                "notes": ""
            }
        })))
        .unwrap();

        let review = record.review.unwrap();
        assert_eq!(review.best_age_range, None);
        assert_eq!(review.theme_tags, vec!["water", "climbing"]);
        assert_eq!(review.emoji.as_deref(), Some("🛝"));
        assert_eq!(review.notes, None);
    }

    #[test]
    fn all_sentinel_review_is_dropped() {
        let record = PlaygroundRecord::from_raw(raw_from(json!({
            "Prop_ID": "R300",
            "Name": "Clove Lakes Playground",
            "review": { "best_age_range": "unknown", "emoji": "Unknown" }
        })))
        .unwrap();
        assert!(record.review.is_none());
        assert!(!record.has_curated_review());
    }

    #[test]
    fn curated_review_requires_emoji() {
        let record = PlaygroundRecord::from_raw(raw_from(json!({
            "Prop_ID": "R301",
            "Name": "Silver Lake Playground",
            "review": { "notes": "shady, quiet" }
        })))
        .unwrap();
        assert!(record.review.is_some());
        assert!(!record.has_curated_review());
    }

    #[test]
    fn comfort_station_raw_variants() {
        assert_eq!(
            ComfortStation::from_raw(Some("NotAccessible")),
            ComfortStation::NotAccessible
        );
        assert_eq!(ComfortStation::from_raw(Some("No")), ComfortStation::None);
        assert_eq!(ComfortStation::from_raw(None), ComfortStation::Unknown);
        assert!(!ComfortStation::Unknown.is_present());
        assert!(ComfortStation::NotAccessible.is_present());
    }
}
