#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Forward geocoding for the playground map's nearby-search box.
//!
//! Resolves a free-text address to coordinates using providers configured
//! via TOML files in `services/`:
//!
//! 1. **Nominatim / OpenStreetMap** (priority 1) — free, 1 req/sec rate
//!    limit, biased with a NYC viewbox and constrained to the US.
//! 2. **Photon / Komoot** (priority 2) — free, biased with `lat`/`lon`
//!    parameters toward the NYC center.
//!
//! Providers are loaded from the [`service_registry`] and tried in priority
//! order. A provider that answers with zero matches ends the search as
//! [`GeocodeError::NotFound`] — an empty result is an answer, not an
//! outage — while transport failures fall through to the next provider.
//!
//! Also provides input normalization for the search box (whitespace
//! cleanup, garbage rejection, appending the city when the query names no
//! NYC locality).

pub mod address;
pub mod nominatim;
pub mod photon;
pub mod service_registry;

use playground_map_playground_models::Coordinates;
use service_registry::{GeocodingService, ProviderConfig};
use thiserror::Error;

/// A geocoding result: the top-ranked match for a submitted address.
#[derive(Debug, Clone)]
pub struct ResolvedPlace {
    /// Coordinates of the match (WGS84).
    pub coordinates: Coordinates,
    /// Human-readable resolved place name.
    pub display_name: String,
    /// Which provider resolved the address.
    pub provider: GeocodingProvider,
}

/// Which geocoding provider resolved an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodingProvider {
    /// Nominatim / OpenStreetMap.
    Nominatim,
    /// Photon / Komoot.
    Photon,
}

/// Errors from geocoding operations.
///
/// [`Self::NotFound`] is the recoverable "no such address" case; every
/// other variant is a service failure and callers should present it
/// distinctly. Neither alters the caller's current filtered view.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// No provider produced a match for the address.
    #[error("No match found for the address")]
    NotFound,

    /// HTTP request failed (includes timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Every configured provider was unreachable.
    #[error("No geocoding provider available")]
    Unavailable,
}

impl GeocodeError {
    /// `true` for the recoverable zero-matches case, `false` for service
    /// failures.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Forward geocoder over the configured provider chain.
pub struct Geocoder {
    client: reqwest::Client,
    services: Vec<GeocodingService>,
}

impl Geocoder {
    /// Creates a geocoder over the enabled providers from the embedded
    /// service registry.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_services(service_registry::enabled_services())
    }

    /// Creates a geocoder over an explicit provider list (tried in order).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn with_services(services: Vec<GeocodingService>) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("playground-map/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, services })
    }

    /// Resolves a free-text address to coordinates and a display name.
    ///
    /// The input is normalized first (see [`address`]); garbage input short-
    /// circuits to [`GeocodeError::NotFound`] without a network call. One
    /// request is in flight at a time; superseding a pending submission is
    /// the caller's concern (the search session keeps a generation counter
    /// for that).
    ///
    /// # Errors
    ///
    /// [`GeocodeError::NotFound`] when a provider answers with zero
    /// matches; a transport/parse error when every provider fails.
    pub async fn geocode(&self, raw_address: &str) -> Result<ResolvedPlace, GeocodeError> {
        let Some(query) = address::normalize_search_input(raw_address) else {
            return Err(GeocodeError::NotFound);
        };

        let mut last_failure: Option<GeocodeError> = None;

        for service in &self.services {
            let result = match &service.provider {
                ProviderConfig::Nominatim { base_url, .. } => {
                    nominatim::geocode(&self.client, base_url, service.request_timeout(), &query)
                        .await
                }
                ProviderConfig::Photon { base_url, .. } => {
                    photon::geocode(&self.client, base_url, service.request_timeout(), &query)
                        .await
                }
            };

            match result {
                Ok(Some(place)) => {
                    log::debug!(
                        "Resolved {query:?} to {:?} via {}",
                        place.display_name,
                        service.id
                    );
                    return Ok(place);
                }
                Ok(None) => return Err(GeocodeError::NotFound),
                Err(e) => {
                    log::warn!("Geocoding provider {} failed: {e}", service.id);
                    last_failure = Some(e);
                }
            }
        }

        Err(last_failure.unwrap_or(GeocodeError::Unavailable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinct_from_service_failure() {
        assert!(GeocodeError::NotFound.is_not_found());
        assert!(
            !GeocodeError::Parse {
                message: "bad".to_string()
            }
            .is_not_found()
        );
        assert!(!GeocodeError::Unavailable.is_not_found());
    }

    #[tokio::test]
    async fn empty_registry_geocoder_reports_unavailable() {
        let geocoder = Geocoder::with_services(Vec::new()).unwrap();
        let err = geocoder.geocode("123 Main St, Queens").await.unwrap_err();
        assert!(matches!(err, GeocodeError::Unavailable));
    }

    #[tokio::test]
    async fn garbage_input_is_not_found_without_a_provider() {
        let geocoder = Geocoder::with_services(Vec::new()).unwrap();
        let err = geocoder.geocode("   ").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
