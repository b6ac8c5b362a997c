//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML source. Missing keys take their defaults.
    pub fn parse(source: &str) -> LoadResult<GameConfig> {
        toml::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Theme;

    #[test]
    fn test_partial_config() {
        let config = ConfigLoader::parse(
            r#"
            default_theme = "dark"

            [main_character]
            health = 8.0
            "#,
        )
        .unwrap();

        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.main_character.health, 8.0);
        assert_eq!(config.main_character.max_health, 10.0);
        assert_eq!(config.main_character.id, "player");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }
}
