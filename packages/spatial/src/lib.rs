#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Point geometry for the playground map.
//!
//! Provides the haversine great-circle distance used by proximity search,
//! the NYC map-center constant, the walking-time labels shown for the
//! discrete search radii, and [`BoundingBox`] for framing the map around a
//! result set. Everything here is pure and deterministic.

use playground_map_playground_models::Coordinates;
use serde::{Deserialize, Serialize};

/// Spherical-Earth radius used by [`haversine_miles`].
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Midtown Manhattan — the map's initial center and the geocoding bias
/// point.
pub const NYC_CENTER: Coordinates = Coordinates {
    latitude: 40.7484,
    longitude: -73.9857,
};

/// Great-circle distance between two coordinate pairs in miles.
///
/// Haversine on a spherical-Earth approximation. Total over all finite
/// inputs, zero for coincident points, symmetric in its arguments. No
/// special handling for antipodal points or poles — irrelevant at city
/// scale.
#[must_use]
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().atan2((1.0 - h).sqrt())
}

/// The four discrete search radii offered by the UI, with their
/// walking-time labels.
const WALK_LABELS: &[(f64, &str)] = &[
    (0.25, "5 minute walk"),
    (0.5, "10 minute walk"),
    (0.75, "15 minute walk"),
    (1.0, "20 minute walk"),
];

/// Human-readable label for a search radius.
///
/// The four discrete UI radii map to walking times; any other radius falls
/// back to a mile label with singular/plural handling.
#[must_use]
pub fn radius_label(miles: f64) -> String {
    for (radius, label) in WALK_LABELS {
        if (miles - radius).abs() < 1e-9 {
            return (*label).to_string();
        }
    }
    if (miles - 1.0).abs() < 1e-9 {
        "1 mile".to_string()
    } else {
        format!("{miles} miles")
    }
}

/// An axis-aligned geographic bounding box.
///
/// Serialized for the API so the frontend can fit the map viewport to a
/// result set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Westernmost longitude.
    pub west: f64,
    /// Southernmost latitude.
    pub south: f64,
    /// Easternmost longitude.
    pub east: f64,
    /// Northernmost latitude.
    pub north: f64,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty set.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut bounds: Option<Self> = None;
        for point in points {
            bounds = Some(match bounds {
                None => Self {
                    west: point.longitude,
                    south: point.latitude,
                    east: point.longitude,
                    north: point.latitude,
                },
                Some(b) => Self {
                    west: b.west.min(point.longitude),
                    south: b.south.min(point.latitude),
                    east: b.east.max(point.longitude),
                    north: b.north.max(point.latitude),
                },
            });
        }
        bounds
    }
}
