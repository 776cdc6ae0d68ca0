pub use pricing_config::{AccessibilitySettings, ColorScheme, Config, ConfigError, ConfigManager};

/// Manager rooted at `$GYM_PRICING_HOME` or `~/.gym_pricing`.
pub fn default_manager() -> ConfigManager {
    ConfigManager::with_base_dir(ConfigManager::default_base_dir())
}
