//! Targeting for unit effects.
//!
//! Content names targets symbolically ([`TargetSymbol`]). Before a unit effect
//! is applied, the symbol is resolved into concrete [`UnitTargets`] relative to
//! whoever is acting ([`Combatant`]).

use rand::Rng;

use crate::env::rng::pick;
use crate::state::{EncounterState, EnemySlot, PartyUnitId};

/// Symbolic target of a unit effect, as written in content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TargetSymbol {
    MainCharacter,
    Ally,
    Allies,
    Enemy,
    Enemies,
    All,
}

/// Unit that triggered a unit effect inside an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Combatant {
    Ally(PartyUnitId),
    Enemy(EnemySlot),
}

/// Concrete targets a unit effect lands on.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum UnitTargets {
    /// Nothing resolved; only the symbol itself decides (main character effects).
    #[default]
    Implicit,
    Allies(Vec<PartyUnitId>),
    Enemies(Vec<EnemySlot>),
    Everyone {
        allies: Vec<PartyUnitId>,
        enemies: Vec<EnemySlot>,
    },
}

impl UnitTargets {
    pub fn allies(&self) -> &[PartyUnitId] {
        match self {
            Self::Allies(allies) | Self::Everyone { allies, .. } => allies,
            Self::Implicit | Self::Enemies(_) => &[],
        }
    }

    pub fn enemies(&self) -> &[EnemySlot] {
        match self {
            Self::Enemies(enemies) | Self::Everyone { enemies, .. } => enemies,
            Self::Implicit | Self::Allies(_) => &[],
        }
    }

    /// Resolves `symbol` for `actor` against the current encounter roster.
    ///
    /// Enemies read the symbols from the party's point of view: for an acting
    /// enemy `enemy`/`enemies` land on allies and `ally`/`allies` on enemies.
    /// Random picks that find an empty side resolve to no targets.
    pub fn resolve<R: Rng>(
        symbol: TargetSymbol,
        actor: &Combatant,
        encounter: &EncounterState,
        rng: &mut R,
    ) -> Self {
        let allies = encounter.ally_ids();
        let enemies = encounter.enemy_slots();

        let (own_side_single, own_side_all, other_side_single, other_side_all) = match actor {
            Combatant::Ally(_) => (
                TargetSymbol::Ally,
                TargetSymbol::Allies,
                TargetSymbol::Enemy,
                TargetSymbol::Enemies,
            ),
            Combatant::Enemy(_) => (
                TargetSymbol::Enemy,
                TargetSymbol::Enemies,
                TargetSymbol::Ally,
                TargetSymbol::Allies,
            ),
        };

        match symbol {
            TargetSymbol::MainCharacter => Self::Implicit,
            TargetSymbol::All => Self::Everyone { allies, enemies },
            s if s == own_side_single => {
                Self::Allies(pick(rng, &allies).cloned().into_iter().collect())
            }
            s if s == own_side_all => Self::Allies(allies),
            s if s == other_side_single => {
                Self::Enemies(pick(rng, &enemies).copied().into_iter().collect())
            }
            s if s == other_side_all => Self::Enemies(enemies),
            _ => Self::Implicit,
        }
    }
}
