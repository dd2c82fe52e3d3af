//! Interactive dataset browsing with the map frontend's filters.

use dialoguer::{Confirm, Input, Select};
use playground_map_playground_models::Borough;
use playground_map_query::{BathroomRequirement, FilterCriteria, apply};

/// How many result rows to print before summarizing the rest.
const MAX_ROWS: usize = 25;

/// Prompts for filter criteria, runs the pipeline, and prints the results.
///
/// # Errors
///
/// Returns an error if the dataset fails to load or a prompt is
/// interrupted.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = crate::load_dataset().await?;
    println!("{} playgrounds loaded", dataset.len());
    println!();

    let mut borough_labels = vec!["All boroughs".to_string()];
    borough_labels.extend(Borough::all().iter().map(ToString::to_string));
    let borough_idx = Select::new()
        .with_prompt("Borough")
        .items(&borough_labels)
        .default(0)
        .interact()?;
    let borough = borough_idx.checked_sub(1).map(|i| Borough::all()[i]);

    let search: String = Input::new()
        .with_prompt("Name contains (empty for all)")
        .allow_empty(true)
        .interact_text()?;

    let bathroom_labels = [
        "No preference",
        "Any bathroom",
        "Accessible bathrooms only",
        "No bathrooms",
    ];
    let bathroom_idx = Select::new()
        .with_prompt("Bathrooms")
        .items(&bathroom_labels)
        .default(0)
        .interact()?;
    let bathroom = match bathroom_idx {
        1 => Some(BathroomRequirement::AnyBathroom),
        2 => Some(BathroomRequirement::AccessibleOnly),
        3 => Some(BathroomRequirement::NoBathroom),
        _ => None,
    };

    let spray_showers = Confirm::new()
        .with_prompt("Require spray showers?")
        .default(false)
        .interact()?;

    let sensory_friendly = Confirm::new()
        .with_prompt("Require sensory-friendly designation?")
        .default(false)
        .interact()?;

    let criteria = FilterCriteria {
        borough,
        bathroom,
        spray_showers,
        sensory_friendly,
        name_search: Some(search).filter(|s| !s.trim().is_empty()),
        ..FilterCriteria::default()
    };

    let outcome = apply(&dataset, &criteria);
    println!();
    println!(
        "Found {} playground{} ({} with spray showers)",
        outcome.len(),
        if outcome.len() == 1 { "" } else { "s" },
        outcome.spray_shower_count
    );

    for m in outcome.matches.iter().take(MAX_ROWS) {
        let record = m.playground;
        let borough_name = record
            .borough()
            .map_or_else(|| "Unknown".to_string(), |b| b.to_string());
        println!("  {:<6} {} — {borough_name} — {}", record.id, record.name, record.location);
    }
    if outcome.len() > MAX_ROWS {
        println!("  … and {} more", outcome.len() - MAX_ROWS);
    }

    Ok(())
}
