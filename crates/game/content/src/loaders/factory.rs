//! Content factory for building the registry from data files.

use std::path::{Path, PathBuf};

use game_core::{ConfigRegistry, GameConfig};

use crate::loaders::{ConfigLoader, ContentSources, LoadResult, RegistryLoader, read_file};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── resources.ron
/// ├── actions.ron
/// ├── encounters.ron
/// ├── enemies.ron
/// ├── items.ron
/// └── skills.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load session defaults from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load and validate every content table.
    pub fn load_registry(&self) -> LoadResult<ConfigRegistry> {
        let read = |table: &str| read_file(&self.data_dir.join(format!("{table}.ron")));

        let resources = read("resources")?;
        let actions = read("actions")?;
        let encounters = read("encounters")?;
        let enemies = read("enemies")?;
        let items = read("items")?;
        let skills = read("skills")?;

        RegistryLoader::parse(ContentSources {
            resources: &resources,
            actions: &actions,
            encounters: &encounters,
            enemies: &enemies,
            items: &items,
            skills: &skills,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
