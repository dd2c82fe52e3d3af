//! HTTP handler functions for the playground map API.

use actix_web::{HttpResponse, web};
use playground_map_playground_models::Borough;
use playground_map_query::{FilterOutcome, Proximity, apply};
use playground_map_server_models::{
    ApiBorough, ApiFilterResults, ApiHealth, ApiNearbyResults, ApiPlayground, ApiStats,
    PlaygroundQueryParams,
};
use playground_map_spatial::{BoundingBox, radius_label};

use crate::session::SearchCompletion;
use crate::{AppState, FIT_BOUNDS_MAX_RESULTS};

/// Radius used when the nearby endpoint is called without one —
/// the "10 minute walk" preset.
const DEFAULT_SEARCH_RADIUS_MILES: f64 = 0.5;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/boroughs`
///
/// Returns the borough code/name taxonomy for the filter dropdown.
pub async fn boroughs() -> HttpResponse {
    let boroughs: Vec<ApiBorough> = Borough::all()
        .iter()
        .map(|b| ApiBorough::from(*b))
        .collect();
    HttpResponse::Ok().json(boroughs)
}

/// `GET /api/playgrounds`
///
/// Applies the filter parameters over the full dataset and returns the
/// matching markers. Records without coordinates are counted but emit no
/// marker coordinates.
pub async fn playgrounds(
    state: web::Data<AppState>,
    params: web::Query<PlaygroundQueryParams>,
) -> HttpResponse {
    let criteria = params.to_criteria();

    state
        .session
        .write()
        .expect("session lock poisoned")
        .set_criteria(criteria.clone());

    let outcome = apply(&state.dataset, &criteria);
    let bounds = fit_bounds(&outcome);

    HttpResponse::Ok().json(ApiFilterResults {
        total: outcome.len(),
        spray_shower_count: outcome.spray_shower_count,
        bounds,
        playgrounds: outcome.matches.iter().map(ApiPlayground::from_match).collect(),
    })
}

/// `GET /api/playgrounds/nearby`
///
/// Geocodes `address`, then applies the filter parameters plus a
/// proximity constraint of `radius` miles around the resolved point.
/// Results are sorted nearest first.
///
/// A zero-match geocode is `404` and a provider failure is `502`; both
/// leave the session's current view unchanged. A response superseded by a
/// newer submission is `409`.
pub async fn nearby(
    state: web::Data<AppState>,
    params: web::Query<PlaygroundQueryParams>,
) -> HttpResponse {
    let Some(address) = params.address.as_deref().map(str::trim).filter(|a| !a.is_empty())
    else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing `address` parameter"
        }));
    };

    let radius_miles = params.radius.unwrap_or(DEFAULT_SEARCH_RADIUS_MILES);
    if !radius_miles.is_finite() || radius_miles <= 0.0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "`radius` must be a positive number of miles"
        }));
    }

    let ticket = state
        .session
        .write()
        .expect("session lock poisoned")
        .begin_search();

    let place = match state.geocoder.geocode(address).await {
        Ok(place) => place,
        Err(e) if e.is_not_found() => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "No matching address found"
            }));
        }
        Err(e) => {
            log::error!("Geocoding failed for {address:?}: {e}");
            return HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Geocoding service unavailable"
            }));
        }
    };

    let mut criteria = params.to_criteria();
    criteria.proximity = Some(Proximity {
        origin: place.coordinates,
        radius_miles,
    });

    let completion = state
        .session
        .write()
        .expect("session lock poisoned")
        .complete_search(ticket, criteria.clone());
    if completion == SearchCompletion::Stale {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": "Superseded by a newer search"
        }));
    }

    let outcome = apply(&state.dataset, &criteria);
    let bounds = fit_bounds(&outcome);

    HttpResponse::Ok().json(ApiNearbyResults {
        resolved_place: place.display_name,
        origin_latitude: place.coordinates.latitude,
        origin_longitude: place.coordinates.longitude,
        radius_miles,
        radius_label: radius_label(radius_miles),
        total: outcome.len(),
        spray_shower_count: outcome.spray_shower_count,
        bounds,
        playgrounds: outcome.matches.iter().map(ApiPlayground::from_match).collect(),
    })
}

/// `GET /api/stats`
///
/// Dataset totals for the welcome panel.
pub async fn stats(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiStats::from_dataset(&state.dataset))
}

/// Viewport to fit the map to: only for small non-empty result sets,
/// and only over the matches that have coordinates.
fn fit_bounds(outcome: &FilterOutcome<'_>) -> Option<BoundingBox> {
    if outcome.is_empty() || outcome.len() >= FIT_BOUNDS_MAX_RESULTS {
        return None;
    }
    BoundingBox::from_points(
        outcome
            .matches
            .iter()
            .filter_map(|m| m.playground.coordinates),
    )
}
