//! Application constants
//!
//! Centralized location for magic strings and status thresholds.

/// Status treated as an explicit client error
pub const BAD_REQUEST: u16 = 400;

/// The only status the default policy accepts as success (historically named "created")
pub const CREATED: u16 = 200;

/// Content type sent with every request. Casing is kept as-is; existing mocks match on it.
pub const CONTENT_TYPE_JSON: &str = "Application/json";

/// Key of the shared response banner slot
pub const RESPONSE_STATE_KEY: &str = "response-state";

/// Directory (under $HOME) holding the config file
pub const CONFIG_DIR: &str = ".banner-fetch";

/// Config file name
pub const CONFIG_FILE: &str = "config.yaml";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
