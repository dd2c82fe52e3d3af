#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive terminal client for the playground map.
//!
//! Provides a unified entry point that lets users pick a tool: browse the
//! dataset with the same filters the map frontend offers, search for
//! playgrounds near an address, or start the API server.

mod browse;
mod nearby;

use dialoguer::Select;
use playground_map_playground_models::PlaygroundRecord;

/// Top-level tool selection.
enum Tool {
    Browse,
    Nearby,
    Server,
}

impl Tool {
    const ALL: &[Self] = &[Self::Browse, Self::Nearby, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Browse => "Browse & filter playgrounds",
            Self::Nearby => "Find playgrounds near an address",
            Self::Server => "Start server",
        }
    }
}

/// Loads the dataset from `PLAYGROUND_DATA` (default
/// `data/playgrounds.json`).
pub(crate) async fn load_dataset()
-> Result<Vec<PlaygroundRecord>, playground_map_dataset::LoadError> {
    let source =
        std::env::var("PLAYGROUND_DATA").unwrap_or_else(|_| "data/playgrounds.json".to_string());
    playground_map_dataset::load(&source).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = pretty_env_logger::try_init_custom_env("RUST_LOG");

    println!("Playground Map Explorer");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Browse => browse::run().await?,
        Tool::Nearby => nearby::run().await?,
        Tool::Server => {
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new()
                    .block_on(playground_map_server::interactive::run())
            })
            .await??;
        }
    }

    Ok(())
}
