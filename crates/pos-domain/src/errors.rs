// errors.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error del dominio del punto de venta. Todas las variantes son
/// recuperables por el llamador (corregir la entrada y reintentar).
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    #[error("validación: {0}")]
    Validation(String),

    #[error("no encontrado: {0}")]
    NotFound(String),

    #[error("sin stock: {0}")]
    OutOfStock(String),

    #[error("stock insuficiente para '{item}' (disponible: {available})")]
    InsufficientStock { item: String, available: u32 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}
