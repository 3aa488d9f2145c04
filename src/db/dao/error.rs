use std::fmt;

use crate::db::kv::KvError;

#[derive(Debug)]
pub enum DaoLayerError {
    Storage(KvError),
    Decode {
        key: &'static str,
        source: serde_json::Error,
    },
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl fmt::Display for DaoLayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaoLayerError::Storage(err) => write!(f, "Storage error: {err}"),
            DaoLayerError::Decode { key, source } => {
                write!(f, "Stored '{key}' could not be read: {source}")
            }
            DaoLayerError::Encode { key, source } => {
                write!(f, "'{key}' could not be serialized: {source}")
            }
        }
    }
}

impl std::error::Error for DaoLayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DaoLayerError::Storage(err) => Some(err),
            DaoLayerError::Decode { source, .. } | DaoLayerError::Encode { source, .. } => {
                Some(source)
            }
        }
    }
}

impl From<KvError> for DaoLayerError {
    fn from(err: KvError) -> Self {
        DaoLayerError::Storage(err)
    }
}
