//! Nominatim / OpenStreetMap geocoder client.
//!
//! Nominatim has strict rate limits: **1 request per second** maximum on
//! the public instance, which is fine for an interactive search box with
//! one request in flight per submission.
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/>

use std::time::Duration;

use crate::{GeocodeError, GeocodingProvider, ResolvedPlace};
use playground_map_playground_models::Coordinates;

/// NYC bounding box passed as the Nominatim `viewbox` bias
/// (`lon1,lat1,lon2,lat2`). Unbounded — results outside still rank, just
/// lower — so a spelled-out non-NYC address is not silently relocated.
const NYC_VIEWBOX: &str = "-74.259,40.917,-73.700,40.477";

/// Geocodes a free-form query against Nominatim, biased to NYC and
/// constrained to the US. Returns the top-ranked match, or `None` when
/// Nominatim has no match.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request or response parsing fails.
pub async fn geocode(
    client: &reqwest::Client,
    base_url: &str,
    timeout: Duration,
    query: &str,
) -> Result<Option<ResolvedPlace>, GeocodeError> {
    let resp = client
        .get(base_url)
        .timeout(timeout)
        .query(&[
            ("q", query),
            ("countrycodes", "us"),
            ("viewbox", NYC_VIEWBOX),
            ("format", "jsonv2"),
            ("limit", "1"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body, query)
}

/// Parses a Nominatim JSON response into the top match.
fn parse_response(
    body: &serde_json::Value,
    query: &str,
) -> Result<Option<ResolvedPlace>, GeocodeError> {
    let results = body.as_array().ok_or_else(|| GeocodeError::Parse {
        message: "Nominatim response is not an array".to_string(),
    })?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let latitude = first["lat"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lat in Nominatim response".to_string(),
        })?;

    let longitude = first["lon"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lon in Nominatim response".to_string(),
        })?;

    let display_name = first["display_name"]
        .as_str()
        .map_or_else(|| query.to_string(), String::from);

    Ok(Some(ResolvedPlace {
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        display_name,
        provider: GeocodingProvider::Nominatim,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_top_match() {
        let body = serde_json::json!([{
            "lat": "40.6521",
            "lon": "-73.8057",
            "display_name": "123, Main Street, Queens, New York, USA"
        }]);
        let place = parse_response(&body, "123 Main St").unwrap().unwrap();
        assert!((place.coordinates.latitude - 40.6521).abs() < 1e-4);
        assert!((place.coordinates.longitude - -73.8057).abs() < 1e-4);
        assert_eq!(place.provider, GeocodingProvider::Nominatim);
        assert!(place.display_name.contains("Queens"));
    }

    #[test]
    fn empty_array_is_no_match() {
        let body = serde_json::json!([]);
        assert!(parse_response(&body, "nowhere").unwrap().is_none());
    }

    #[test]
    fn non_array_body_is_a_parse_error() {
        let body = serde_json::json!({ "error": "rate limited" });
        let err = parse_response(&body, "anything").unwrap_err();
        assert!(matches!(err, GeocodeError::Parse { .. }));
    }

    #[test]
    fn missing_coordinates_is_a_parse_error() {
        let body = serde_json::json!([{ "display_name": "no coords" }]);
        let err = parse_response(&body, "anything").unwrap_err();
        assert!(matches!(err, GeocodeError::Parse { .. }));
    }

    #[test]
    fn missing_display_name_falls_back_to_query() {
        let body = serde_json::json!([{ "lat": "40.65", "lon": "-73.80" }]);
        let place = parse_response(&body, "123 Main St, Queens").unwrap().unwrap();
        assert_eq!(place.display_name, "123 Main St, Queens");
    }
}
