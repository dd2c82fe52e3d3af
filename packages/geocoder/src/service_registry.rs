//! Compile-time registry of geocoding service configurations.
//!
//! Each provider is defined in a TOML file under `services/`. The registry
//! embeds these at compile time and exposes them via [`all_services`] and
//! [`enabled_services`].

use std::time::Duration;

use serde::Deserialize;

/// A geocoding service configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingService {
    /// Unique identifier (e.g., `"nominatim"`, `"photon"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this service participates in the provider chain.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Execution order — lower values are tried first.
    pub priority: u32,
    /// Provider-specific configuration.
    pub provider: ProviderConfig,
}

/// Provider-specific configuration, tagged by `type` in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Nominatim / `OpenStreetMap` geocoder.
    Nominatim {
        /// API base URL (e.g., `"https://nominatim.openstreetmap.org/search"`).
        base_url: String,
        /// Per-request timeout in milliseconds.
        #[serde(default = "default_timeout_ms")]
        request_timeout_ms: u64,
    },
    /// Photon / Komoot geocoder.
    Photon {
        /// API base URL (e.g., `"https://photon.komoot.io/api"`).
        base_url: String,
        /// Per-request timeout in milliseconds.
        #[serde(default = "default_timeout_ms")]
        request_timeout_ms: u64,
    },
}

const fn default_true() -> bool {
    true
}

const fn default_timeout_ms() -> u64 {
    5000
}

impl GeocodingService {
    /// Returns the provider's base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match &self.provider {
            ProviderConfig::Nominatim { base_url, .. }
            | ProviderConfig::Photon { base_url, .. } => base_url,
        }
    }

    /// Returns the per-request timeout for this provider. Expiry surfaces
    /// as a service failure, never as "no match".
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        let ms = match &self.provider {
            ProviderConfig::Nominatim {
                request_timeout_ms, ..
            }
            | ProviderConfig::Photon {
                request_timeout_ms, ..
            } => *request_timeout_ms,
        };
        Duration::from_millis(ms)
    }
}

// ── Compile-time embedded TOML files ────────────────────────────────

const SERVICE_TOMLS: &[(&str, &str)] = &[
    ("nominatim", include_str!("../services/nominatim.toml")),
    ("photon", include_str!("../services/photon.toml")),
];

#[cfg(test)]
const EXPECTED_SERVICE_COUNT: usize = 2;

/// Returns all geocoding service configurations (enabled and disabled).
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time
/// guarantee since the configs are embedded).
#[must_use]
pub fn all_services() -> Vec<GeocodingService> {
    SERVICE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse geocoding service '{name}': {e}"))
        })
        .collect()
}

/// Returns only enabled services, sorted by priority (ascending).
#[must_use]
pub fn enabled_services() -> Vec<GeocodingService> {
    let mut services: Vec<GeocodingService> =
        all_services().into_iter().filter(|s| s.enabled).collect();
    services.sort_by_key(|s| s.priority);
    services
}
