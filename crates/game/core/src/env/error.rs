//! Config registry errors.
//!
//! Raised while assembling or validating the static content tables. The engine
//! itself never fails at runtime; these errors surface authoring mistakes early.

use crate::error::{ErrorSeverity, GameError};

/// Table a configuration entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigKind {
    Resource,
    Action,
    Encounter,
    Enemy,
    Item,
    Skill,
    PartyUnit,
}

/// Errors that occur when building or validating a [`ConfigRegistry`](super::ConfigRegistry).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Two entries of the same table share an id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: ConfigKind, id: String },

    /// An entry references an id missing from its table.
    #[error("{owner_kind} '{owner}' references unknown {kind} '{id}'")]
    UnknownReference {
        owner_kind: ConfigKind,
        owner: String,
        kind: ConfigKind,
        id: String,
    },

    /// Encounter has no enemies to draw from.
    #[error("encounter '{encounter}' has an empty enemy pool")]
    EmptyEnemyPool { encounter: String },

    /// Encounter would never spawn an enemy and therefore never resolve.
    #[error("encounter '{encounter}' requires zero enemies")]
    NoEnemiesToDefeat { encounter: String },

    /// Sequential encounter runs past the end of its pool.
    #[error("sequential encounter '{encounter}' needs {required} enemies but its pool has {pool}")]
    SequentialPoolTooShort {
        encounter: String,
        pool: usize,
        required: u32,
    },

    /// Combatant has no skill to pick from.
    #[error("{kind} '{id}' knows no skills")]
    EmptySkillList { kind: ConfigKind, id: String },

    /// Skill delay must be non-negative.
    #[error("skill '{skill}' has negative delay {delay}")]
    NegativeDelay { skill: String, delay: f64 },
}

impl RegistryError {
    pub(crate) fn unknown(
        owner_kind: ConfigKind,
        owner: impl ToString,
        kind: ConfigKind,
        id: impl ToString,
    ) -> Self {
        Self::UnknownReference {
            owner_kind,
            owner: owner.to_string(),
            kind,
            id: id.to_string(),
        }
    }
}

impl GameError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateId { .. } | Self::UnknownReference { .. } => ErrorSeverity::Fatal,
            Self::EmptyEnemyPool { .. }
            | Self::NoEnemiesToDefeat { .. }
            | Self::SequentialPoolTooShort { .. }
            | Self::EmptySkillList { .. }
            | Self::NegativeDelay { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateId { .. } => "REGISTRY_DUPLICATE_ID",
            Self::UnknownReference { .. } => "REGISTRY_UNKNOWN_REFERENCE",
            Self::EmptyEnemyPool { .. } => "REGISTRY_EMPTY_ENEMY_POOL",
            Self::NoEnemiesToDefeat { .. } => "REGISTRY_NO_ENEMIES",
            Self::SequentialPoolTooShort { .. } => "REGISTRY_SEQUENTIAL_POOL_TOO_SHORT",
            Self::EmptySkillList { .. } => "REGISTRY_EMPTY_SKILL_LIST",
            Self::NegativeDelay { .. } => "REGISTRY_NEGATIVE_DELAY",
        }
    }
}
