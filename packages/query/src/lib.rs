#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! The filter pipeline: one configurable pass over the playground dataset.
//!
//! [`apply`] evaluates a [`FilterCriteria`] against the full dataset and
//! produces an ordered result set. All predicates are conjunctive over the
//! full dataset — a record must pass every active predicate to remain, and
//! a name search narrows the same candidate set as every other filter.
//!
//! Stage order: name substring → borough → accessibility → bathroom →
//! amenity toggles → proximity. Proximity is the only geometric stage:
//! records without coordinates are excluded there but participate in every
//! other stage. When proximity is active the result is sorted ascending by
//! distance; otherwise dataset order is preserved.
//!
//! The pipeline is stateless and reentrant: records are never mutated, and
//! the transient search distance lives on the [`FilterMatch`] wrapper.

use playground_map_playground_models::{
    Accessibility, Borough, ComfortStation, Coordinates, PlaygroundRecord,
};
use playground_map_spatial::haversine_miles;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Bathroom requirement for the comfort-station filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
pub enum BathroomRequirement {
    /// A comfort station must be present, accessible or not.
    #[strum(serialize = "any")]
    AnyBathroom,
    /// An ADA-accessible comfort station must be present.
    #[strum(serialize = "accessible")]
    AccessibleOnly,
    /// No comfort station (status "No" or unknown in the source).
    #[strum(serialize = "none")]
    NoBathroom,
}

/// A proximity constraint: a geocoded origin plus a search radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    /// Origin of the search, usually a geocoded address.
    pub origin: Coordinates,
    /// Search radius in miles.
    pub radius_miles: f64,
}

/// Independent predicates combined into a single dataset pass.
///
/// Rebuilt from UI state on every filter-triggering event; the default
/// value is the identity filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Keep only records in this borough (property-ID prefix match).
    pub borough: Option<Borough>,
    /// Keep only records with this exact accessibility state.
    pub accessibility: Option<Accessibility>,
    /// Comfort-station requirement.
    pub bathroom: Option<BathroomRequirement>,
    /// Require spray showers.
    pub spray_showers: bool,
    /// Require the sensory-friendly designation.
    pub sensory_friendly: bool,
    /// Require drinking fountains.
    pub drinking_fountains: bool,
    /// Require curated review content (a real emoji tag).
    pub curated_review: bool,
    /// Case-insensitive name substring.
    pub name_search: Option<String>,
    /// Keep only records within the radius of the origin.
    pub proximity: Option<Proximity>,
}

impl FilterCriteria {
    /// `true` when no predicate is active — [`apply`] returns the dataset
    /// unchanged in content and order.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.borough.is_none()
            && self.accessibility.is_none()
            && self.bathroom.is_none()
            && !self.spray_showers
            && !self.sensory_friendly
            && !self.drinking_fountains
            && !self.curated_review
            && self.name_search.as_deref().is_none_or(|s| s.trim().is_empty())
            && self.proximity.is_none()
    }
}

/// One record that passed every active predicate.
#[derive(Debug, Clone)]
pub struct FilterMatch<'a> {
    /// The matched record, borrowed from the dataset.
    pub playground: &'a PlaygroundRecord,
    /// Distance in miles from the proximity origin; set only when the
    /// criteria had a proximity constraint.
    pub distance_from_search: Option<f64>,
}

/// The ordered result of one pipeline pass.
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    /// Matches in result order: ascending by distance for proximity
    /// queries, dataset order otherwise.
    pub matches: Vec<FilterMatch<'a>>,
    /// How many matches have spray showers (the sidebar statistic).
    pub spray_shower_count: usize,
}

impl FilterOutcome<'_> {
    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// `true` when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Runs the filter pipeline over `dataset`.
///
/// Stateless and side-effect-free; safe to call repeatedly with different
/// criteria over the same dataset.
#[must_use]
pub fn apply<'a>(dataset: &'a [PlaygroundRecord], criteria: &FilterCriteria) -> FilterOutcome<'a> {
    let name_term = criteria
        .name_search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut matches: Vec<FilterMatch<'a>> = Vec::new();

    for record in dataset {
        if !passes_static_stages(record, criteria, name_term.as_deref()) {
            continue;
        }

        if let Some(proximity) = &criteria.proximity {
            // Geometry-dependent stage: records without coordinates are out.
            let Some(coordinates) = record.coordinates else {
                continue;
            };
            let distance = haversine_miles(proximity.origin, coordinates);
            if distance <= proximity.radius_miles {
                matches.push(FilterMatch {
                    playground: record,
                    distance_from_search: Some(distance),
                });
            }
        } else {
            matches.push(FilterMatch {
                playground: record,
                distance_from_search: None,
            });
        }
    }

    if criteria.proximity.is_some() {
        matches.sort_by(|a, b| {
            let da = a.distance_from_search.unwrap_or(f64::INFINITY);
            let db = b.distance_from_search.unwrap_or(f64::INFINITY);
            da.total_cmp(&db)
        });
    }

    let spray_shower_count = matches
        .iter()
        .filter(|m| m.playground.has_spray_showers)
        .count();

    FilterOutcome {
        matches,
        spray_shower_count,
    }
}

/// Every non-geometric predicate, in stage order.
fn passes_static_stages(
    record: &PlaygroundRecord,
    criteria: &FilterCriteria,
    name_term: Option<&str>,
) -> bool {
    if let Some(term) = name_term {
        if !record.name.to_lowercase().contains(term) {
            return false;
        }
    }

    if let Some(borough) = criteria.borough {
        if record.borough() != Some(borough) {
            return false;
        }
    }

    if let Some(accessibility) = criteria.accessibility {
        if record.accessible != accessibility {
            return false;
        }
    }

    if let Some(bathroom) = criteria.bathroom {
        let ok = match bathroom {
            BathroomRequirement::AnyBathroom => record.comfort_station.is_present(),
            BathroomRequirement::AccessibleOnly => {
                record.comfort_station == ComfortStation::Accessible
            }
            BathroomRequirement::NoBathroom => !record.comfort_station.is_present(),
        };
        if !ok {
            return false;
        }
    }

    if criteria.spray_showers && !record.has_spray_showers {
        return false;
    }
    if criteria.sensory_friendly && !record.sensory_friendly {
        return false;
    }
    if criteria.drinking_fountains && !record.has_drinking_fountains {
        return false;
    }
    if criteria.curated_review && !record.has_curated_review() {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, coordinates: Option<(f64, f64)>) -> PlaygroundRecord {
        PlaygroundRecord {
            id: id.to_string(),
            name: name.to_string(),
            location: String::new(),
            coordinates: coordinates.map(|(lat, lon)| Coordinates {
                latitude: lat,
                longitude: lon,
            }),
            accessible: Accessibility::Unknown,
            sensory_friendly: false,
            comfort_station: ComfortStation::Unknown,
            spray_shower_count: None,
            has_spray_showers: false,
            drinking_fountain_count: None,
            has_drinking_fountains: false,
            review: None,
        }
    }

    /// The two-record dataset from the design scenarios.
    fn scenario_dataset() -> Vec<PlaygroundRecord> {
        let mut sunset = record("Q001", "Sunset Park Playground", Some((40.65, -73.99)));
        sunset.spray_shower_count = Some(2);
        sunset.has_spray_showers = true;

        let prospect = record("B002", "Prospect Playground", Some((40.66, -73.97)));

        vec![sunset, prospect]
    }

    fn ids<'a>(outcome: &FilterOutcome<'a>) -> Vec<&'a str> {
        outcome
            .matches
            .iter()
            .map(|m| m.playground.id.as_str())
            .collect()
    }

    #[test]
    fn empty_criteria_is_the_identity_filter() {
        let dataset = scenario_dataset();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());

        let outcome = apply(&dataset, &criteria);
        assert_eq!(ids(&outcome), vec!["Q001", "B002"]);
        assert!(outcome.matches.iter().all(|m| m.distance_from_search.is_none()));
    }

    #[test]
    fn borough_filter_matches_id_prefix() {
        let dataset = scenario_dataset();
        let outcome = apply(
            &dataset,
            &FilterCriteria {
                borough: Some(Borough::Queens),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["Q001"]);
    }

    #[test]
    fn spray_shower_toggle() {
        let dataset = scenario_dataset();
        let outcome = apply(
            &dataset,
            &FilterCriteria {
                spray_showers: true,
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["Q001"]);
        assert_eq!(outcome.spray_shower_count, 1);
    }

    #[test]
    fn toggles_combine_conjunctively() {
        let mut dataset = scenario_dataset();
        dataset[0].comfort_station = ComfortStation::NotAccessible;
        dataset[1].comfort_station = ComfortStation::Accessible;
        dataset[1].has_spray_showers = true;

        // Spray showers AND an accessible bathroom: only B002 has both.
        let outcome = apply(
            &dataset,
            &FilterCriteria {
                spray_showers: true,
                bathroom: Some(BathroomRequirement::AccessibleOnly),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["B002"]);
    }

    #[test]
    fn any_bathroom_excludes_none_and_unknown() {
        let mut dataset = scenario_dataset();
        dataset[0].comfort_station = ComfortStation::None;
        dataset[1].comfort_station = ComfortStation::NotAccessible;

        let outcome = apply(
            &dataset,
            &FilterCriteria {
                bathroom: Some(BathroomRequirement::AnyBathroom),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["B002"]);
    }

    #[test]
    fn no_bathroom_keeps_none_and_unknown() {
        let mut dataset = scenario_dataset();
        dataset[0].comfort_station = ComfortStation::None;
        dataset[1].comfort_station = ComfortStation::Accessible;

        let outcome = apply(
            &dataset,
            &FilterCriteria {
                bathroom: Some(BathroomRequirement::NoBathroom),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["Q001"]);
    }

    #[test]
    fn accessibility_is_an_exact_match() {
        let mut dataset = scenario_dataset();
        dataset[0].accessible = Accessibility::Yes;

        let outcome = apply(
            &dataset,
            &FilterCriteria {
                accessibility: Some(Accessibility::Yes),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["Q001"]);

        let unknowns = apply(
            &dataset,
            &FilterCriteria {
                accessibility: Some(Accessibility::Unknown),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&unknowns), vec!["B002"]);
    }

    #[test]
    fn name_search_is_case_insensitive() {
        let dataset = scenario_dataset();
        let outcome = apply(
            &dataset,
            &FilterCriteria {
                name_search: Some("sunset".to_string()),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["Q001"]);
    }

    #[test]
    fn blank_name_search_is_inactive() {
        let dataset = scenario_dataset();
        let criteria = FilterCriteria {
            name_search: Some("   ".to_string()),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(apply(&dataset, &criteria).len(), 2);
    }

    #[test]
    fn name_search_composes_with_borough_over_the_full_dataset() {
        let dataset = scenario_dataset();
        let outcome = apply(
            &dataset,
            &FilterCriteria {
                name_search: Some("playground".to_string()),
                borough: Some(Borough::Brooklyn),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["B002"]);
    }

    #[test]
    fn proximity_bounds_and_sorts_ascending() {
        let dataset = scenario_dataset();
        let origin = Coordinates {
            latitude: 40.66,
            longitude: -73.97,
        };

        let outcome = apply(
            &dataset,
            &FilterCriteria {
                proximity: Some(Proximity {
                    origin,
                    radius_miles: 2.0,
                }),
                ..FilterCriteria::default()
            },
        );

        // B002 sits on the origin; Q001 is ~1.3 miles away.
        assert_eq!(ids(&outcome), vec!["B002", "Q001"]);
        for m in &outcome.matches {
            let d = m.distance_from_search.unwrap();
            assert!(d <= 2.0);
        }
        assert!(outcome.matches[0].distance_from_search.unwrap() < 1e-9);
    }

    #[test]
    fn proximity_excludes_records_outside_the_radius() {
        let dataset = scenario_dataset();
        let outcome = apply(
            &dataset,
            &FilterCriteria {
                proximity: Some(Proximity {
                    origin: Coordinates {
                        latitude: 40.66,
                        longitude: -73.97,
                    },
                    radius_miles: 0.5,
                }),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["B002"]);
    }

    #[test]
    fn coordinate_less_record_skips_proximity_but_not_name_search() {
        let mut dataset = scenario_dataset();
        dataset.push(record("M003", "Mystery Playground", None));

        let by_name = apply(
            &dataset,
            &FilterCriteria {
                name_search: Some("mystery".to_string()),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&by_name), vec!["M003"]);

        let nearby = apply(
            &dataset,
            &FilterCriteria {
                proximity: Some(Proximity {
                    origin: Coordinates {
                        latitude: 40.66,
                        longitude: -73.97,
                    },
                    radius_miles: 100.0,
                }),
                ..FilterCriteria::default()
            },
        );
        assert!(!ids(&nearby).contains(&"M003"));
    }

    #[test]
    fn curated_review_requires_a_real_emoji() {
        use playground_map_playground_models::PlaygroundReview;

        let mut dataset = scenario_dataset();
        dataset[0].review = Some(PlaygroundReview {
            emoji: Some("🛝".to_string()),
            ..PlaygroundReview::default()
        });
        dataset[1].review = Some(PlaygroundReview {
            notes: Some("no emoji".to_string()),
            ..PlaygroundReview::default()
        });

        let outcome = apply(
            &dataset,
            &FilterCriteria {
                curated_review: true,
                ..FilterCriteria::default()
            },
        );
        assert_eq!(ids(&outcome), vec!["Q001"]);
    }

    #[test]
    fn bathroom_requirement_parses_from_query_values() {
        assert_eq!(
            "any".parse::<BathroomRequirement>().unwrap(),
            BathroomRequirement::AnyBathroom
        );
        assert_eq!(
            "accessible".parse::<BathroomRequirement>().unwrap(),
            BathroomRequirement::AccessibleOnly
        );
        assert_eq!(
            "none".parse::<BathroomRequirement>().unwrap(),
            BathroomRequirement::NoBathroom
        );
        assert!("bogus".parse::<BathroomRequirement>().is_err());
    }
}
