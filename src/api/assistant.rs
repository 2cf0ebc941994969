//! Handlers del asistente
//!
//! Este módulo expone el endpoint de chat. El dashboard envía el mensaje
//! junto con el snapshot pre-cargado de las cinco colecciones; aquí se
//! valida, se trunca el snapshot y se invoca al motor.

use axum::{routing::post, Json, Router};
use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::assistant::engine;
use crate::dto::assistant_dto::{AssistantResponse, ChatRequest};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_assistant_router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

/// Procesar un mensaje del chat y devolver respuesta, acciones y reportes
async fn chat(Json(request): Json<ChatRequest>) -> AppResult<Json<AssistantResponse>> {
    request.validate().map_err(AppError::Validation)?;

    info!("💬 Mensaje recibido ({} caracteres)", request.message.len());

    let snapshot = request.snapshot.truncated();
    let today = Utc::now().date_naive();

    let response = engine::generate(&request.message, &snapshot, today)?;

    info!(
        "📤 Respuesta generada: {} acciones, {} reportes",
        response.actions.len(),
        response.reports.len()
    );

    Ok(Json(response))
}
