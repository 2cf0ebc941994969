//! Asistente conversacional de la flota
//!
//! Este módulo contiene el núcleo del asistente: clasificación de
//! intenciones por regex, generación de respuestas con plantillas y
//! síntesis de reportes PDF. No tiene estado entre invocaciones.

pub mod engine;
pub mod intent;
pub mod pdf;
pub mod reports;
