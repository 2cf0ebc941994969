//! Snapshot de dominio
//!
//! Las cinco colecciones que el dashboard pre-carga antes de invocar al
//! asistente. El asistente nunca muta estos datos; solo agrega conteos y
//! renderiza subconjuntos.

use serde::{Deserialize, Serialize};

use crate::models::load::Load;
use crate::models::maintenance::Maintenance;
use crate::models::route::Route;
use crate::models::trip::Trip;
use crate::models::vehicle::Vehicle;

/// Tope de registros por colección que se pasa al motor.
/// El boundary HTTP trunca cada lista a este valor antes de invocar.
pub const SNAPSHOT_LIMIT: usize = 10;

/// Snapshot de solo lectura de las cinco colecciones de dominio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainSnapshot {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub maintenances: Vec<Maintenance>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub loads: Vec<Load>,
}

impl DomainSnapshot {
    /// Trunca cada colección a `SNAPSHOT_LIMIT` registros
    pub fn truncated(mut self) -> Self {
        self.vehicles.truncate(SNAPSHOT_LIMIT);
        self.trips.truncate(SNAPSHOT_LIMIT);
        self.maintenances.truncate(SNAPSHOT_LIMIT);
        self.routes.truncate(SNAPSHOT_LIMIT);
        self.loads.truncate(SNAPSHOT_LIMIT);
        self
    }
}
