//! Interactive nearby-playground search.

use dialoguer::{Input, Select};
use playground_map_geocoder::Geocoder;
use playground_map_query::{FilterCriteria, Proximity, apply};
use playground_map_spatial::radius_label;

/// The discrete search radii offered by the UI, in miles.
const RADII: &[f64] = &[0.25, 0.5, 0.75, 1.0];

/// Prompts for an address and radius, geocodes, and prints the
/// playgrounds within the radius, nearest first.
///
/// # Errors
///
/// Returns an error if the dataset fails to load or a prompt is
/// interrupted. Geocoding failures are reported to the user, not
/// returned.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = crate::load_dataset().await?;

    let address: String = Input::new().with_prompt("Address").interact_text()?;

    let radius_labels: Vec<String> = RADII
        .iter()
        .map(|&r| format!("{} ({r} mi)", radius_label(r)))
        .collect();
    let radius_idx = Select::new()
        .with_prompt("Search radius")
        .items(&radius_labels)
        .default(1)
        .interact()?;
    let radius_miles = RADII[radius_idx];

    let geocoder = Geocoder::new()?;
    let place = match geocoder.geocode(&address).await {
        Ok(place) => place,
        Err(e) if e.is_not_found() => {
            println!("No matching address found.");
            return Ok(());
        }
        Err(e) => {
            log::error!("Geocoding failed: {e}");
            println!("Geocoding service unavailable — try again later.");
            return Ok(());
        }
    };

    println!("Resolved to: {}", place.display_name);

    let criteria = FilterCriteria {
        proximity: Some(Proximity {
            origin: place.coordinates,
            radius_miles,
        }),
        ..FilterCriteria::default()
    };

    let outcome = apply(&dataset, &criteria);
    println!();
    println!(
        "Found {} playground{} within a {}",
        outcome.len(),
        if outcome.len() == 1 { "" } else { "s" },
        radius_label(radius_miles)
    );

    for m in &outcome.matches {
        let record = m.playground;
        let distance = m.distance_from_search.unwrap_or_default();
        let borough_name = record
            .borough()
            .map_or_else(|| "Unknown".to_string(), |b| b.to_string());
        println!("  {distance:>5.2} mi  {} ({borough_name})", record.name);
    }

    Ok(())
}
