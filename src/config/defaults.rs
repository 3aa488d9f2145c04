pub const ENV_PREFIX: &str = "APP";
pub const ENV_SEPARATOR: &str = "__";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_STORAGE_URL: &str = "sqlite://shopping_list.db?mode=rwc";
pub const DEFAULT_STORAGE_MAX_CONNECTIONS: u32 = 5;

pub const DEFAULT_USER_ID: &str = "u1";
pub const DEFAULT_USER_EMAIL: &str = "usuario@gmail.com";
pub const DEFAULT_USER_NAME: &str = "Usuário Demo";
pub const DEFAULT_USER_AVATAR: &str = "https://picsum.photos/100/100";

pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ASSISTANT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_SCAN_DELAY_MS: u64 = 1_000;
pub const MAX_SCAN_DELAY_MS: u64 = 10_000;
