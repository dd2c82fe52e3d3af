#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the playground map application.
//!
//! Loads the playground dataset once at startup, then serves the REST API
//! the map frontend renders from: filtered marker sets, nearby-address
//! search, borough taxonomy, and dataset statistics. The static frontend
//! bundle is served alongside the API.
//!
//! The server is a single-user explorer: the current
//! [`session::SearchSession`] owns the active filter criteria and the
//! geocode submission counter that makes a newer address search supersede
//! an older one still in flight.

mod handlers;
pub mod interactive;
pub mod session;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use playground_map_geocoder::Geocoder;
use playground_map_playground_models::PlaygroundRecord;
use std::sync::{Arc, RwLock};

/// Result sets smaller than this get a fitted viewport in the response
/// so the frontend can zoom the map to them.
pub const FIT_BOUNDS_MAX_RESULTS: usize = 50;

/// Shared application state.
pub struct AppState {
    /// The dataset, immutable after load.
    pub dataset: Arc<Vec<PlaygroundRecord>>,
    /// The single-user search session.
    pub session: RwLock<session::SearchSession>,
    /// Forward geocoder for the nearby-search endpoint.
    pub geocoder: Geocoder,
}

/// Starts the playground map API server.
///
/// Loads the dataset from `PLAYGROUND_DATA` (default
/// `data/playgrounds.json`), builds the geocoder from the embedded service
/// registry, and starts the Actix-Web HTTP server on `BIND_ADDR`/`PORT`.
/// The frontend bundle is served from `STATIC_DIR` (default `app/dist`).
/// This is a regular async function — the caller provides the async
/// runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the dataset fails to load (fatal to initialization by
/// design — there is nothing to serve without it) or the geocoder HTTP
/// client cannot be built.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    let _ = pretty_env_logger::try_init_custom_env("RUST_LOG");

    let source =
        std::env::var("PLAYGROUND_DATA").unwrap_or_else(|_| "data/playgrounds.json".to_string());
    let dataset = playground_map_dataset::load(&source)
        .await
        .expect("Failed to load playground dataset");

    let geocoder = Geocoder::new().expect("Failed to build geocoder");

    let state = web::Data::new(AppState {
        dataset: Arc::new(dataset),
        session: RwLock::new(session::SearchSession::default()),
        geocoder,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "app/dist".to_string());

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/boroughs", web::get().to(handlers::boroughs))
                    .route("/playgrounds", web::get().to(handlers::playgrounds))
                    .route("/playgrounds/nearby", web::get().to(handlers::nearby))
                    .route("/stats", web::get().to(handlers::stats)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
