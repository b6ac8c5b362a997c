//! Default content compiled into the binary.

use game_core::{ConfigRegistry, GameConfig};

use crate::loaders::{ConfigLoader, ContentSources, LoadResult, RegistryLoader};

/// RON sources of the bundled `data/` directory.
pub const DEFAULT_SOURCES: ContentSources<'static> = ContentSources {
    resources: include_str!("../data/resources.ron"),
    actions: include_str!("../data/actions.ron"),
    encounters: include_str!("../data/encounters.ron"),
    enemies: include_str!("../data/enemies.ron"),
    items: include_str!("../data/items.ron"),
    skills: include_str!("../data/skills.ron"),
};

const DEFAULT_CONFIG: &str = include_str!("../data/config.toml");

/// Registry built from the bundled content.
pub fn default_registry() -> LoadResult<ConfigRegistry> {
    RegistryLoader::parse(DEFAULT_SOURCES)
}

/// Session defaults from the bundled `config.toml`.
pub fn default_config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(DEFAULT_CONFIG)
}
