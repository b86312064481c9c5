use crate::models::responses::InteractionResponse;
use crate::AppState;
use axum::{extract::State, response::Json};
use tracing::debug;

pub async fn record_selection(State(state): State<AppState>) -> Json<InteractionResponse> {
    state.counter.increment();
    let count = state.counter.read();
    debug!("Book selected, {} explored so far", count);
    Json(InteractionResponse { count })
}

pub async fn get_interactions(State(state): State<AppState>) -> Json<InteractionResponse> {
    Json(InteractionResponse {
        count: state.counter.read(),
    })
}
