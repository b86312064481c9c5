use crate::models::responses::{CatalogErrorResponse, CatalogResponse, RenderedBook};
use crate::services::aggregate::AggregationResult;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::error;

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load books. Please try again later.";

pub async fn get_catalog(
    State(state): State<AppState>,
) -> Result<Json<CatalogResponse>, (StatusCode, Json<CatalogErrorResponse>)> {
    match state.aggregator.aggregate().await {
        AggregationResult::Success(snapshot) => {
            let books: Vec<RenderedBook> = snapshot
                .records
                .into_iter()
                .enumerate()
                .map(|(position, record)| RenderedBook {
                    render_key: record.render_key(position),
                    record,
                })
                .collect();

            Ok(Json(CatalogResponse {
                run_id: snapshot.run_id,
                fetched_at: snapshot.fetched_at,
                count: books.len(),
                skipped_entries: snapshot.skipped_entries,
                books,
                diagnostics: snapshot.diagnostics,
            }))
        }
        AggregationResult::Failure(failure) => {
            error!("Catalog unavailable for run {}: {}", failure.run_id, failure.reason);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(CatalogErrorResponse {
                    error: LOAD_FAILURE_MESSAGE.to_string(),
                    diagnostics: failure.diagnostics,
                }),
            ))
        }
    }
}
