pub mod configs;
pub mod defaults;
pub mod validate;

pub use configs::{
    AppConfig, AssistantConfig, GeneralConfig, LoggingConfig, ScannerConfig, SessionConfig,
    StorageConfig,
};
