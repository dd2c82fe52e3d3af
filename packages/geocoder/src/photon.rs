//! Photon / Komoot geocoder client.
//!
//! Photon is the fallback provider: no API key, generous limits, and a
//! native `lat`/`lon` bias parameter that does what Nominatim's viewbox
//! approximates. Responses are GeoJSON `FeatureCollection`s.
//!
//! See <https://photon.komoot.io/>

use std::time::Duration;

use crate::{GeocodeError, GeocodingProvider, ResolvedPlace};
use playground_map_playground_models::Coordinates;
use playground_map_spatial::NYC_CENTER;

/// Geocodes a free-form query against Photon, biased toward the NYC
/// center. Returns the top-ranked US match, or `None` when Photon has no
/// usable match.
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
    let lat = NYC_CENTER.latitude.to_string();
    let lon = NYC_CENTER.longitude.to_string();

    let resp = client
        .get(base_url)
        .timeout(timeout)
        .query(&[
            ("q", query),
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("limit", "1"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses a Photon GeoJSON response into the top match.
///
/// Photon has no country filter parameter, so the constraint is applied
/// here: a top match outside the US counts as no match.
fn parse_response(body: &serde_json::Value) -> Result<Option<ResolvedPlace>, GeocodeError> {
    let features = body["features"]
        .as_array()
        .ok_or_else(|| GeocodeError::Parse {
            message: "Photon response has no features array".to_string(),
        })?;

    let Some(first) = features.first() else {
        return Ok(None);
    };

    let properties = &first["properties"];
    if let Some(countrycode) = properties["countrycode"].as_str() {
        if !countrycode.eq_ignore_ascii_case("us") {
            return Ok(None);
        }
    }

    let coords = first["geometry"]["coordinates"]
        .as_array()
        .filter(|c| c.len() >= 2)
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing coordinates in Photon response".to_string(),
        })?;

    let longitude = coords[0].as_f64().ok_or_else(|| GeocodeError::Parse {
        message: "Non-numeric longitude in Photon response".to_string(),
    })?;
    let latitude = coords[1].as_f64().ok_or_else(|| GeocodeError::Parse {
        message: "Non-numeric latitude in Photon response".to_string(),
    })?;

    let mut display_name = [
        properties["name"].as_str(),
        properties["city"].as_str(),
        properties["state"].as_str(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");
    if display_name.is_empty() {
        display_name = format!("{latitude:.4}, {longitude:.4}");
    }

    Ok(Some(ResolvedPlace {
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        display_name,
        provider: GeocodingProvider::Photon,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_top_feature() {
        let body = serde_json::json!({
            "features": [{
                "geometry": { "coordinates": [-73.8057, 40.6521] },
                "properties": {
                    "name": "123 Main Street",
                    "city": "Queens",
                    "state": "New York",
                    "countrycode": "US"
                }
            }]
        });
        let place = parse_response(&body).unwrap().unwrap();
        assert!((place.coordinates.latitude - 40.6521).abs() < 1e-4);
        assert!((place.coordinates.longitude - -73.8057).abs() < 1e-4);
        assert_eq!(place.provider, GeocodingProvider::Photon);
        assert_eq!(place.display_name, "123 Main Street, Queens, New York");
    }

    #[test]
    fn empty_features_is_no_match() {
        let body = serde_json::json!({ "features": [] });
        assert!(parse_response(&body).unwrap().is_none());
    }

    #[test]
    fn non_us_top_match_is_no_match() {
        let body = serde_json::json!({
            "features": [{
                "geometry": { "coordinates": [-0.1276, 51.5072] },
                "properties": { "name": "Main Street", "countrycode": "GB" }
            }]
        });
        assert!(parse_response(&body).unwrap().is_none());
    }

    #[test]
    fn missing_features_is_a_parse_error() {
        let body = serde_json::json!({ "message": "oops" });
        assert!(matches!(
            parse_response(&body).unwrap_err(),
            GeocodeError::Parse { .. }
        ));
    }
}
