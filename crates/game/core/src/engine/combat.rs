//! Real-time encounter scheduling.
//!
//! Every combatant accumulates delay each tick and fires its queued skill once
//! the delay reaches the skill's delay. Allies resolve before enemies, and an
//! enemy defeated by an ally does not act in the same tick.

use rand::Rng;
use tracing::{debug, info, warn};

use super::GameEngine;
use crate::action::{Combatant, UnitEffect, UnitTargets};
use crate::env::rng::pick;
use crate::env::{EnemyOrder, SkillConfig};
use crate::state::{EncounterId, EnemyCombatState};

/// What a single encounter tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TickOutcome {
    /// No encounter is active.
    Idle,
    /// No enemy could be put on the field; nothing advanced.
    Stalled,
    /// Combat advanced and the encounter continues.
    Ongoing,
    Completed { encounter: EncounterId },
    Failed { encounter: EncounterId },
}

impl TickOutcome {
    /// True when this tick ended the encounter.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Failed { .. })
    }
}

impl<'a, R: Rng> GameEngine<'a, R> {
    /// Advances the active encounter by `delta` seconds.
    pub fn run_encounter(&mut self, delta: f64) -> TickOutcome {
        if self.state.encounter.is_none() {
            return TickOutcome::Idle;
        }

        self.spawn_enemy();
        if self
            .state
            .encounter
            .as_ref()
            .is_none_or(|encounter| encounter.enemies.is_empty())
        {
            return TickOutcome::Stalled;
        }

        self.queue_skills();
        self.advance_delays(delta);
        self.resolve_allies();
        self.resolve_enemies();
        self.check_outcome()
    }

    fn spawn_enemy(&mut self) {
        let registry = self.registry;
        let Some(encounter) = self.state.encounter.as_ref() else {
            return;
        };
        if !encounter.enemies.is_empty() {
            return;
        }
        let Some(config) = registry.encounter(encounter.encounter.as_str()) else {
            warn!(encounter = %encounter.encounter, "active encounter has no config");
            return;
        };
        if encounter.current_enemy_index >= config.number_of_enemies {
            return;
        }

        let enemy_id = match config.order {
            EnemyOrder::Random => pick(&mut *self.rng, &config.enemies),
            EnemyOrder::Sequential => config.enemies.get(encounter.current_enemy_index as usize),
        };
        let Some(enemy) = enemy_id.and_then(|id| registry.enemy(id.as_str())) else {
            warn!(encounter = %config.id, ?enemy_id, "no enemy config to spawn");
            return;
        };

        if let Some(encounter) = self.state.encounter.as_mut()
            && encounter
                .enemies
                .try_push(EnemyCombatState::spawn(
                    enemy.id.clone(),
                    enemy.health,
                    enemy.mana,
                ))
                .is_ok()
        {
            debug!(enemy = %enemy.id, "enemy spawned");
            if config.order == EnemyOrder::Random {
                self.state.log.push(format!("Enemy spawned: {}", enemy.name));
            }
        }
    }

    /// Gives every idle combatant a uniformly random skill from its loadout.
    fn queue_skills(&mut self) {
        let registry = self.registry;
        let rng = &mut *self.rng;
        let state = &mut *self.state;
        let Some(encounter) = state.encounter.as_mut() else {
            return;
        };

        for (id, ally) in encounter.allies.iter_mut() {
            if ally.skill.is_none()
                && let Some(unit) = state.party.get(id)
            {
                ally.skill = pick(&mut *rng, &unit.skills).cloned();
            }
        }
        for enemy in encounter.enemies.iter_mut() {
            if enemy.skill.is_none()
                && let Some(config) = registry.enemy(enemy.enemy.as_str())
            {
                enemy.skill = pick(&mut *rng, &config.skills).cloned();
            }
        }
    }

    fn advance_delays(&mut self, delta: f64) {
        let Some(encounter) = self.state.encounter.as_mut() else {
            return;
        };
        for ally in encounter.allies.values_mut() {
            ally.delay += delta;
        }
        for enemy in encounter.enemies.iter_mut() {
            enemy.delay += delta;
        }
    }

    fn resolve_allies(&mut self) {
        let Some(ids) = self.state.encounter.as_ref().map(|e| e.ally_ids()) else {
            return;
        };
        for id in ids {
            let queued = self
                .state
                .encounter
                .as_ref()
                .and_then(|encounter| encounter.allies.get(&id))
                .and_then(|ally| ally.skill.as_ref().map(|skill| (skill.clone(), ally.delay)));
            let Some((skill_id, delay)) = queued else {
                continue;
            };
            let Some(skill) = self.ready_skill(skill_id.as_str(), delay) else {
                continue;
            };

            self.fire_skill(skill, Combatant::Ally(id.clone()));
            if let Some(ally) = self
                .state
                .encounter
                .as_mut()
                .and_then(|encounter| encounter.allies.get_mut(&id))
            {
                ally.delay -= skill.delay;
                ally.skill = None;
            }
            self.despawn_defeated();
        }
    }

    fn resolve_enemies(&mut self) {
        let Some(slots) = self.state.encounter.as_ref().map(|e| e.enemy_slots()) else {
            return;
        };
        for slot in slots {
            let queued = self
                .state
                .encounter
                .as_ref()
                .and_then(|encounter| encounter.enemies.get(slot))
                .and_then(|enemy| enemy.skill.as_ref().map(|skill| (skill.clone(), enemy.delay)));
            let Some((skill_id, delay)) = queued else {
                continue;
            };
            let Some(skill) = self.ready_skill(skill_id.as_str(), delay) else {
                continue;
            };

            self.fire_skill(skill, Combatant::Enemy(slot));
            if let Some(enemy) = self
                .state
                .encounter
                .as_mut()
                .and_then(|encounter| encounter.enemies.get_mut(slot))
            {
                enemy.delay -= skill.delay;
                enemy.skill = None;
            }
        }
    }

    /// The skill config if the accumulated `delay` is enough to fire it.
    fn ready_skill(&self, skill: &str, delay: f64) -> Option<&'a SkillConfig> {
        let registry = self.registry;
        let Some(config) = registry.skill(skill) else {
            warn!(skill, "queued skill has no config");
            return None;
        };
        (delay >= config.delay).then_some(config)
    }

    /// Resolves targets for each unit effect of `skill` and applies it.
    ///
    /// Skill costs and global effects are not applied in combat.
    fn fire_skill(&mut self, skill: &SkillConfig, actor: Combatant) {
        debug!(skill = %skill.id, ?actor, "skill fired");
        for config in &skill.unit_effects {
            let Some(encounter) = self.state.encounter.as_ref() else {
                return;
            };
            let targets = UnitTargets::resolve(config.target, &actor, encounter, &mut *self.rng);
            let effect = UnitEffect::resolved(config.clone(), actor.clone(), targets);
            self.context().apply_unit_effects([&effect]);
        }
    }

    /// Removes defeated enemies, advances the defeated count and applies
    /// each defeated enemy's completion effects.
    fn despawn_defeated(&mut self) {
        let registry = self.registry;
        let Some(encounter) = self.state.encounter.as_mut() else {
            return;
        };
        let defeated: Vec<_> = encounter
            .enemies
            .iter()
            .filter(|enemy| enemy.is_defeated())
            .map(|enemy| enemy.enemy.clone())
            .collect();
        if defeated.is_empty() {
            return;
        }
        encounter.enemies.retain(|enemy| !enemy.is_defeated());
        encounter.current_enemy_index += defeated.len() as u32;

        for enemy in defeated {
            debug!(%enemy, "enemy defeated");
            if let Some(config) = registry.enemy(enemy.as_str()) {
                self.context().apply_global_effects(&config.completion_effects);
            }
        }
    }

    fn check_outcome(&mut self) -> TickOutcome {
        let registry = self.registry;
        let Some(encounter) = self.state.encounter.as_ref() else {
            return TickOutcome::Idle;
        };
        let Some(config) = registry.encounter(encounter.encounter.as_str()) else {
            return TickOutcome::Ongoing;
        };

        if encounter.current_enemy_index >= config.number_of_enemies {
            // Taken out first so a chained start installs the next encounter.
            self.state.encounter = None;
            let mut ctx = self.context();
            ctx.apply_global_effects(&config.global_completion_effects);
            ctx.apply_unit_configs(&config.unit_completion_effects);
            self.state
                .log
                .push(outcome_message("Encounter completed", &config.completion_message));
            info!(
                encounter = %config.id,
                chains = config.chains_encounter(),
                "encounter completed"
            );
            return TickOutcome::Completed {
                encounter: config.id.clone(),
            };
        }

        if self.state.party_defeated() {
            let mut ctx = self.context();
            ctx.apply_global_effects(&config.global_failure_effects);
            ctx.apply_unit_configs(&config.unit_failure_effects);
            self.state.encounter = None;
            self.state
                .log
                .push(outcome_message("Encounter failed", &config.failure_message));
            info!(encounter = %config.id, "encounter failed");
            return TickOutcome::Failed {
                encounter: config.id.clone(),
            };
        }

        TickOutcome::Ongoing
    }
}

fn outcome_message(prefix: &str, message: &str) -> String {
    if message.is_empty() {
        prefix.to_owned()
    } else {
        format!("{prefix}: {message}")
    }
}
