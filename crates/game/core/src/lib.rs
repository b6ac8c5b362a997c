//! Deterministic simulation core of the incremental game.
//!
//! `game-core` owns the rules: resources and actions gated by prerequisites,
//! effects on the world and on units, and the real-time encounter scheduler.
//! Static content lives in an immutable [`ConfigRegistry`]; all mutation of
//! [`GameState`] flows through [`GameEngine`], which takes the random source
//! as a parameter so seeded sessions replay exactly.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    ActionOutcome, ActionPrerequisite, Combatant, GlobalEffect, Prerequisite, ResourcePrerequisite,
    ResourceRelation, TargetSymbol, UnitEffect, UnitEffectConfig, UnitEffectKind, UnitPrerequisite,
    UnitTargets, ValueBounds, ValueTarget,
};
pub use config::{GameConfig, MainCharacterConfig};
pub use engine::{GameEngine, TickOutcome};
pub use env::{
    ActionConfig, ConfigKind, ConfigRegistry, EncounterConfig, EncounterKind, EnemyConfig,
    EnemyOrder, ItemConfig, RegistryBuilder, RegistryError, ResourceConfig, ResourceKind,
    SkillConfig, SkillCost, SkillKind,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActionId, ActionState, EncounterId, EncounterState, EnemyId, GameLog, GameState, ItemId,
    Meter, PartyUnitId, PartyUnitState, ResourceId, ResourceState, SkillId, Theme, UnitStat,
};
