//! Content loaders for reading game data from files.
//!
//! Content tables are RON lists of the `game-core` config types; session
//! defaults are a TOML [`game_core::GameConfig`].

pub mod catalog;
pub mod config;
pub mod factory;
pub mod registry;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use registry::{ContentSources, RegistryLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
