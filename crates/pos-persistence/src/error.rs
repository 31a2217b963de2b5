//! Errores del backend de archivos, mapeados al `StorageError` del core
//! en la frontera del trait.

use pos_core::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("documento JSON inválido: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("clave inválida: {0}")]
    InvalidKey(String),
}

impl From<PersistenceError> for StorageError {
    fn from(e: PersistenceError) -> Self {
        match e {
            PersistenceError::Io(inner) => StorageError::Io(inner.to_string()),
            PersistenceError::InvalidJson(inner) => StorageError::Serde(inner.to_string()),
            other => StorageError::Backend(other.to_string()),
        }
    }
}
