//! `StateStore` sobre el sistema de archivos: `<dir>/<clave>.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use pos_core::{StateStore, StorageError};
use serde_json::Value;

use crate::config::StorageConfig;
use crate::error::PersistenceError;

pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStateStore { dir })
    }

    pub fn from_env() -> Result<Self, PersistenceError> {
        Self::new(StorageConfig::from_env().dir)
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    // Las claves vienen del core, pero nunca dejamos que una clave arme rutas.
    fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn read(&self, key: &str) -> Result<Option<Value>, PersistenceError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    // Escritura en dos pasos: temporal + rename, para que un corte a mitad de
    // escritura no deje el documento truncado.
    fn write(&self, key: &str, value: &Value) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        self.read(key).map_err(Into::into)
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.write(key, value).map_err(StorageError::from)?;
        log::debug!("guardado {key}.json");
        Ok(())
    }
}
