use crate::models::errors::SessionError;
use crate::models::responses::{ErrorResponse, LoginRequest, RegistrationRequest, SessionResponse};
use crate::services::session::{self, Session};
use axum::{http::StatusCode, response::Json};
use tracing::{info, warn};

type SessionResult = Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)>;

fn respond(result: Result<Session, SessionError>) -> SessionResult {
    match result {
        Ok(session) => {
            info!("Session opened for {}", session.username);
            Ok(Json(SessionResponse {
                greeting: session.greeting(),
                username: session.username,
            }))
        }
        Err(e) => {
            warn!("Rejected session form: {}", e);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

pub async fn login(Json(request): Json<LoginRequest>) -> SessionResult {
    respond(session::login(&request.username, &request.password))
}

pub async fn register(Json(request): Json<RegistrationRequest>) -> SessionResult {
    respond(session::register(
        &request.username,
        &request.email,
        &request.password,
    ))
}
