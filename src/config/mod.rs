//! Configuration module for pickmenu
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PICKMENU_*)
//! 3. Explicit config file (--config)
//! 4. User config (<config dir>/pickmenu/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, user_config_path, with_env_overrides, ConfigWarning};
pub use types::{ColorMode, Config, MarksConfig, MenuConfig, OutputConfig};
