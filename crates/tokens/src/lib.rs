pub mod config;
pub mod error;
pub mod loader;

// Re-export main API
pub use config::{OutputSettings, Settings, DEFAULT_OUTPUT_PATH};
pub use error::LoadError;
pub use loader::{
    load_and_merge, load_config, load_tokens, read_json_object, ConfigLoad, ConfigSource,
    LoadedTokens, TokenLoad, TokenSource, DEFAULT_CONFIG_FILE, DEFAULT_TOKENS_FILE,
};
