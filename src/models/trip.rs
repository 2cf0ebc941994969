//! Modelo de Trip
//!
//! Viajes programados o en curso. Las referencias a vehículo y ruta son
//! opcionales: un viaje recién creado puede no tener asignación todavía,
//! y en ese caso se muestra "N/A".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::VehicleRef;

/// Estado del viaje
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    /// Nombre legible para respuestas y reportes
    pub fn display_name(&self) -> &'static str {
        match self {
            TripStatus::Scheduled => "Programado",
            TripStatus::InProgress => "En curso",
            TripStatus::Completed => "Completado",
            TripStatus::Cancelled => "Cancelado",
        }
    }
}

/// Referencia débil a una ruta, resuelta a su nombre para mostrar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRef {
    pub id: Uuid,
    pub name: String,
}

/// Viaje - snapshot de solo lectura
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub status: TripStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub vehicle: Option<VehicleRef>,
    pub route: Option<RouteRef>,
}
