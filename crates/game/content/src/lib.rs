//! Data-driven content definitions and loaders.
//!
//! Resources, actions, encounters, enemies, items and skills are authored as
//! RON tables under `data/` and assembled into a validated
//! [`game_core::ConfigRegistry`]. The same tables are also compiled in, so a
//! session can start without touching the filesystem.
//!
//! Content is consumed by the engine and never appears in game state.

#[cfg(feature = "loaders")]
pub mod embedded;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use embedded::{DEFAULT_SOURCES, default_config, default_registry};
#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ConfigLoader, ContentFactory, ContentSources, LoadResult, RegistryLoader,
};
