//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El asistente no guarda estado de
//! conversación: aquí solo vive la configuración.

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }
}
