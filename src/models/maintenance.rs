//! Modelo de Maintenance
//!
//! Mantenimientos programados o en curso sobre vehículos de la flota.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::VehicleRef;

/// Estado del mantenimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    /// Nombre legible para respuestas y reportes
    pub fn display_name(&self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "Programado",
            MaintenanceStatus::InProgress => "En curso",
            MaintenanceStatus::Completed => "Completado",
            MaintenanceStatus::Cancelled => "Cancelado",
        }
    }
}

/// Mantenimiento - snapshot de solo lectura
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maintenance {
    pub id: Uuid,
    pub status: MaintenanceStatus,
    pub maintenance_type: String,
    pub description: String,
    pub scheduled_date: NaiveDate,
    pub vehicle: Option<VehicleRef>,
}
