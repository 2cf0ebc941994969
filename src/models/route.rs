//! Modelo de Route
//!
//! Rutas registradas entre un origen y un destino, con distancia en km.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ruta - snapshot de solo lectura
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}
