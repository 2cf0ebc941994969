//! Fleet Assistant - asistente conversacional de flota
//!
//! Núcleo: clasificador de intenciones por regex, motor de respuestas con
//! plantillas y reportes PDF por dominio. El boundary HTTP recibe el
//! mensaje del chat junto con un snapshot de solo lectura de las cinco
//! colecciones de dominio (vehículos, viajes, mantenimientos, rutas,
//! cargas) pre-cargado por el dashboard.

pub mod api;
pub mod assistant;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod state;
pub mod utils;
