use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::{KeyValueStore, KvResult};

/// Every key lives in one JSON object on disk. Writes go to a sibling temp file that
/// is renamed over the previous file.
pub struct JsonFileStore {
    path: PathBuf,
    io: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io: Mutex::new(()),
        }
    }

    async fn read_document(&self) -> KvResult<Map<String, Value>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Map::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_document(&self, document: &Map<String, Value>) -> KvResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        let _io = self.io.lock().await;
        let document = self.read_document().await?;
        Ok(document.get(key).map(Value::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        let parsed: Value = serde_json::from_str(value)?;
        let _io = self.io.lock().await;
        let mut document = self.read_document().await?;
        document.insert(key.to_string(), parsed);
        self.write_document(&document).await
    }

    async fn remove(&self, key: &str) -> KvResult<()> {
        let _io = self.io.lock().await;
        let mut document = self.read_document().await?;
        if document.remove(key).is_some() {
            self.write_document(&document).await?;
        }
        Ok(())
    }
}
