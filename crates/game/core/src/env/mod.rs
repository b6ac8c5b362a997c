//! Read-only content the engine consults.
//!
//! Static definitions of resources, actions, encounters, enemies, items and
//! skills are bundled into a [`ConfigRegistry`]. It is supplied once at startup
//! and never appears in, or changes with, the game state.
mod actions;
mod encounters;
mod enemies;
mod error;
mod items;
mod registry;
mod resources;
pub mod rng;
mod skills;

pub use actions::ActionConfig;
pub use encounters::{EncounterConfig, EncounterKind, EnemyOrder};
pub use enemies::EnemyConfig;
pub use error::{ConfigKind, RegistryError};
pub use items::ItemConfig;
pub use registry::{ConfigRegistry, Keyed, RegistryBuilder, Table};
pub use resources::{ResourceConfig, ResourceKind};
pub use skills::{SkillConfig, SkillCost, SkillKind};
