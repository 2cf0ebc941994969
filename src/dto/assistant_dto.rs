use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::snapshot::DomainSnapshot;

// Request del chat: mensaje libre + snapshot pre-cargado por el dashboard
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 500))]
    pub message: String,

    #[serde(default)]
    pub snapshot: DomainSnapshot,
}

// Acción sugerida para la UI. `data` es un payload opaco que el
// dashboard nos devuelve al despachar la acción.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,
    pub label: String,
    pub data: serde_json::Value,
}

impl Action {
    pub fn new(action_type: &str, label: &str, data: serde_json::Value) -> Self {
        Self {
            action_type: action_type.to_string(),
            label: label.to_string(),
            data,
        }
    }
}

// Reporte PDF generado, con el contenido en base64
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    #[serde(rename = "type")]
    pub report_type: String,
    pub format: String,
    pub data: String,
    pub filename: String,
}

// Response del asistente: texto formateado, acciones y reportes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantResponse {
    pub response: String,
    pub actions: Vec<Action>,
    pub reports: Vec<Report>,
}
