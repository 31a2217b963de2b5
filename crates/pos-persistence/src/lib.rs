//! pos-persistence
//!
//! Backend de archivos para el `StateStore` del core: un documento JSON por
//! clave dentro de un directorio de datos (el análogo del almacenamiento
//! clave→valor original). Escrituras vía archivo temporal + rename para no
//! dejar documentos a medio escribir.
//!
//! Módulos:
//! - `fs`: implementación sobre el sistema de archivos.
//! - `config`: carga de configuración desde .env / variables de entorno.
//! - `error`: errores propios del backend.

pub mod config;
pub mod error;
pub mod fs;

pub use config::{init_dotenv, StorageConfig};
pub use error::PersistenceError;
pub use fs::FileStateStore;
