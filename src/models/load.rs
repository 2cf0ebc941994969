//! Modelo de Load
//!
//! Cargas / mercancías en tránsito o pendientes de despacho.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado de la carga
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl LoadStatus {
    /// Nombre legible para respuestas y reportes
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadStatus::Pending => "Pendiente",
            LoadStatus::InTransit => "En transito",
            LoadStatus::Delivered => "Entregada",
            LoadStatus::Cancelled => "Cancelada",
        }
    }
}

/// Carga - snapshot de solo lectura
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    pub id: Uuid,
    pub code: String,
    pub status: LoadStatus,
    pub origin: String,
    pub destination: String,
    pub trip_id: Option<Uuid>,
    pub estimated_delivery: Option<NaiveDate>,
}
