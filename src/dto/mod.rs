//! DTOs de la API
//!
//! Requests y responses serializables del boundary HTTP.

pub mod assistant_dto;
