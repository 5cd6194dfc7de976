use std::net::SocketAddr;
use std::sync::Arc;

use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};

mod catalog;
mod config;
mod dataset;
mod domain;
mod errors;
mod geos;
mod map;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    // Dataset-load failure is the one fatal condition.
    let dataset = Dataset::load(&settings.data.listings_path).unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });
    info!(
        rows = dataset.len(),
        max_price = dataset.max_price(),
        path = %settings.data.listings_path,
        "dataset loaded"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .unwrap_or_else(|e| {
            error!("Bad server address: {e}");
            std::process::exit(1);
        });
    let workers = settings.server.workers;

    let state = Arc::new(AppState { settings, dataset });

    info!("starting server at http://{addr}");
    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }
}
