// Constants shared across the brandhub crates

/// The default configuration file name for the application.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "brandhub.toml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV_VAR: &str = "BH_CONFIG";

pub const DATA_DIR: &str = "./data";
pub const MEDIA_DIR: &str = "./media";
pub const LOG_DIR: &str = "./logs";

/// Cache holding login sessions keyed by token.
pub const SESSION_CACHE_NAME: &str = "Session";
