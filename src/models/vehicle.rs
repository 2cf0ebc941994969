//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como lo entrega la capa de
//! datos del dashboard. El asistente solo lee estos registros.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    EnRoute,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    /// Nombre legible para respuestas y reportes
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Disponible",
            VehicleStatus::EnRoute => "En ruta",
            VehicleStatus::Maintenance => "En mantenimiento",
            VehicleStatus::Inactive => "Inactivo",
        }
    }
}

/// Vehículo de la flota - snapshot de solo lectura
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub status: VehicleStatus,
    pub last_maintenance: Option<NaiveDate>,
}

/// Referencia débil a un vehículo embebida en otros registros
/// (viajes, mantenimientos). Se resuelve a la placa para mostrar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRef {
    pub id: Uuid,
    pub license_plate: String,
}
