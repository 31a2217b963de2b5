//! Adaptador de persistencia: blobs JSON con nombre, sin lógica.
//!
//! El core sólo conoce este trait; el backend concreto (archivos, memoria)
//! vive en `pos-persistence`. Las claves replican las del almacenamiento
//! original para que los documentos guardados sigan siendo legibles.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Claves bajo las que se guarda el estado completo del negocio.
pub mod keys {
    pub const MENU: &str = "menu";
    pub const ORDERS: &str = "orders";
    pub const CUSTOMERS: &str = "customers";
    pub const REVENUE: &str = "revenue";
    pub const NEXT_CUSTOMER_ID: &str = "next_customer_id";
    pub const NEXT_ORDER_ID: &str = "next_order_id";
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io: {0}")]
    Io(String),
    #[error("serialización: {0}")]
    Serde(String),
    #[error("backend: {0}")]
    Backend(String),
}

/// Almacenamiento clave → documento JSON.
pub trait StateStore {
    /// Lee el blob guardado bajo `key`; `None` si nunca se guardó.
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError>;
    /// Sobrescribe el blob bajo `key`.
    fn save(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;
}

pub struct InMemoryStateStore {
    pub inner: HashMap<String, Value>,
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self { inner: HashMap::new() }
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.inner.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.inner.insert(key.to_string(), value.clone());
        Ok(())
    }
}
