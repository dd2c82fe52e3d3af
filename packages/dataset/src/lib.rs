#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Loads the static playground dataset into memory.
//!
//! The dataset is a JSON document with a `playgrounds` array (the combined
//! NYC Parks export). Loading happens once at startup from either a local
//! file or an http(s) URL; the result is treated as immutable for the rest
//! of the session.
//!
//! The container shape is required — a payload without a parseable
//! `playgrounds` array is a [`LoadError`] — but individual records degrade
//! instead of failing: missing or non-numeric coordinates load as absent,
//! and entries with no usable identity are dropped and counted.

use playground_map_playground_models::{PlaygroundRecord, RawPlayground};
use thiserror::Error;

/// Errors from loading the playground dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP fetch of a remote dataset failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a local dataset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but does not have the expected container shape.
    #[error("Unexpected dataset shape: {message}")]
    Shape {
        /// Description of what was missing or wrong.
        message: String,
    },
}

/// Loads the dataset from `source`, which is an http(s) URL or a local
/// file path (chosen by prefix).
///
/// # Errors
///
/// Returns [`LoadError`] if the source is unreachable, the payload is not
/// JSON, or the `playgrounds` array is missing.
pub async fn load(source: &str) -> Result<Vec<PlaygroundRecord>, LoadError> {
    let payload = if source.starts_with("http://") || source.starts_with("https://") {
        log::info!("Fetching playground dataset from {source}");
        reqwest::get(source)
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?
    } else {
        log::info!("Reading playground dataset from {source}");
        serde_json::from_str(&std::fs::read_to_string(source)?)?
    };

    parse_dataset(&payload)
}

/// Parses a dataset document into playground records.
///
/// # Errors
///
/// Returns [`LoadError::Shape`] if `payload` has no `playgrounds` array.
pub fn parse_dataset(payload: &serde_json::Value) -> Result<Vec<PlaygroundRecord>, LoadError> {
    let entries = payload
        .get("playgrounds")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| LoadError::Shape {
            message: "missing `playgrounds` array".to_string(),
        })?;

    let mut records = Vec::with_capacity(entries.len());
    let mut dropped = 0usize;

    for entry in entries {
        let raw: RawPlayground = match serde_json::from_value(entry.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Skipping malformed playground entry: {e}");
                dropped += 1;
                continue;
            }
        };
        match PlaygroundRecord::from_raw(raw) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    let unmappable = records.iter().filter(|r| r.coordinates.is_none()).count();
    log::info!(
        "Loaded {} playgrounds ({unmappable} without usable coordinates, {dropped} dropped)",
        records.len()
    );

    Ok(records)
}
