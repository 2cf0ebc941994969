//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio que el asistente consume
//! como snapshot de solo lectura. La persistencia vive en el backend del
//! dashboard; aquí no hay CRUD.

pub mod load;
pub mod maintenance;
pub mod route;
pub mod snapshot;
pub mod trip;
pub mod vehicle;
