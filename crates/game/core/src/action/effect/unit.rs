use rand::Rng;
use tracing::trace;

use super::EffectContext;
use crate::action::targeting::{Combatant, TargetSymbol, UnitTargets};
use crate::state::UnitStat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitEffectKind {
    IncreaseValue,
    IncreaseMax,
    Damage,
}

/// Static description of an effect on a unit's stat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitEffectConfig {
    pub kind: UnitEffectKind,
    pub target: TargetSymbol,
    pub stat: UnitStat,
    pub amount: f64,
}

impl UnitEffectConfig {
    pub fn new(kind: UnitEffectKind, target: TargetSymbol, stat: UnitStat, amount: f64) -> Self {
        Self {
            kind,
            target,
            stat,
            amount,
        }
    }

    pub fn damage(target: TargetSymbol, amount: f64) -> Self {
        Self::new(UnitEffectKind::Damage, target, UnitStat::Health, amount)
    }
}

/// A unit effect bound to the combatant that triggered it and its resolved targets.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitEffect {
    pub config: UnitEffectConfig,
    pub source: Option<Combatant>,
    pub targets: UnitTargets,
}

impl UnitEffect {
    /// Effect outside combat: no source, no resolved targets.
    pub fn implicit(config: UnitEffectConfig) -> Self {
        Self {
            config,
            source: None,
            targets: UnitTargets::Implicit,
        }
    }

    pub fn resolved(config: UnitEffectConfig, source: Combatant, targets: UnitTargets) -> Self {
        Self {
            config,
            source: Some(source),
            targets,
        }
    }

    /// Applies the effect. Targets that no longer exist are skipped.
    ///
    /// `increase_value` and `increase_max` only affect the main character.
    /// `damage` hits the main character when targeted symbolically, then every
    /// resolved ally and enemy slot.
    pub fn apply<R: Rng>(&self, ctx: &mut EffectContext<'_, R>) {
        let UnitEffectConfig {
            kind,
            target,
            stat,
            amount,
        } = self.config;
        trace!(
            %kind,
            symbol = %target,
            %stat,
            amount,
            source = ?self.source,
            "applying unit effect"
        );

        let on_main_character = target == TargetSymbol::MainCharacter;
        match kind {
            UnitEffectKind::IncreaseValue | UnitEffectKind::IncreaseMax if on_main_character => {
                if let Some(unit) = ctx.state.main_character_mut() {
                    let meter = unit.stat_mut(stat);
                    if kind == UnitEffectKind::IncreaseValue {
                        meter.add_value(amount);
                    } else {
                        meter.add_max(amount);
                    }
                }
            }
            UnitEffectKind::IncreaseValue | UnitEffectKind::IncreaseMax => {}
            UnitEffectKind::Damage => {
                if on_main_character && let Some(unit) = ctx.state.main_character_mut() {
                    unit.stat_mut(stat).add_value(-amount);
                }
                for id in self.targets.allies() {
                    if let Some(unit) = ctx.state.party.get_mut(id) {
                        unit.stat_mut(stat).add_value(-amount);
                    }
                }
                if let Some(encounter) = ctx.state.encounter.as_mut() {
                    for &slot in self.targets.enemies() {
                        if let Some(enemy) = encounter.enemies.get_mut(slot) {
                            enemy.stat_mut(stat).add_value(-amount);
                        }
                    }
                }
            }
        }
    }
}
