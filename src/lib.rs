use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use config::Config;
use routes::{
    catalog::get_catalog,
    health::health_check,
    interactions::{get_interactions, record_selection},
    session::{login, register},
};
use services::aggregate::Aggregator;
use services::counter::InteractionCounter;
use services::normalize::{Normalizer, RandomStatus};
use services::source::{CatalogSource, OpenLibrarySource};

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub counter: Arc<InteractionCounter>,
}

impl AppState {
    pub fn new(aggregator: Aggregator, counter: Arc<InteractionCounter>) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            counter,
        }
    }

    /// Wires the Open Library client and the randomized availability
    /// strategy from `config`.
    pub fn from_config(config: &Config) -> Self {
        let source: Arc<dyn CatalogSource> =
            Arc::new(OpenLibrarySource::new(&config.catalog_base_url));
        let normalizer = Normalizer::new(
            &config.covers_base_url,
            Arc::new(RandomStatus::new(config.availability_ratio)),
        );
        let aggregator = Aggregator::new(
            source,
            normalizer,
            config.subjects.clone(),
            config.subject_limit,
        );
        Self::new(aggregator, Arc::new(InteractionCounter::new()))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/catalog", get(get_catalog))
        .route("/interactions", get(get_interactions).post(record_selection))
        .route("/session/login", post(login))
        .route("/session/register", post(register))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
