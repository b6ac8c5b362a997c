//! Boolean gates over resources, action history and unit stats.

use bitflags::bitflags;

use super::targeting::TargetSymbol;
use crate::state::{ActionId, GameState, Meter, ResourceId, UnitStat};

bitflags! {
    /// Relational checks between a resource's value and its max.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ResourceRelation: u8 {
        const VALUE_LESS_THAN_MAX     = 1 << 0;
        const VALUE_GREATER_THAN_ZERO = 1 << 1;
        const VALUE_EQUAL_TO_MAX      = 1 << 2;
    }
}

impl ResourceRelation {
    pub fn admits(self, meter: &Meter) -> bool {
        let full = meter.is_full();
        !(self.contains(Self::VALUE_LESS_THAN_MAX) && full
            || self.contains(Self::VALUE_GREATER_THAN_ZERO) && meter.is_empty()
            || self.contains(Self::VALUE_EQUAL_TO_MAX) && !full)
    }
}

/// Inclusive bounds on a meter's value and max. Unset bounds always pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValueBounds {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub min_max: Option<f64>,
    pub max_max: Option<f64>,
}

impl ValueBounds {
    pub fn admits(&self, meter: &Meter) -> bool {
        let above = |bound: Option<f64>, x: f64| bound.is_none_or(|bound| x >= bound);
        let below = |bound: Option<f64>, x: f64| bound.is_none_or(|bound| x <= bound);

        above(self.min_value, meter.value())
            && below(self.max_value, meter.value())
            && above(self.min_max, meter.max())
            && below(self.max_max, meter.max())
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePrerequisite {
    pub resource: ResourceId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds: ValueBounds,
    #[cfg_attr(feature = "serde", serde(default))]
    pub relations: ResourceRelation,
}

impl ResourcePrerequisite {
    pub fn new(resource: impl Into<ResourceId>, relations: ResourceRelation) -> Self {
        Self {
            resource: resource.into(),
            bounds: ValueBounds::default(),
            relations,
        }
    }

    pub fn with_bounds(mut self, bounds: ValueBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// A resource without state never satisfies the check.
    pub fn is_satisfied(&self, state: &GameState) -> bool {
        state.resource(self.resource.as_str()).is_some_and(|resource| {
            self.bounds.admits(&resource.meter) && self.relations.admits(&resource.meter)
        })
    }
}

/// Bounds on how often another action has executed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionPrerequisite {
    pub action: ActionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_executions: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_executions: Option<u32>,
}

impl ActionPrerequisite {
    pub fn is_satisfied(&self, state: &GameState) -> bool {
        state.action(self.action.as_str()).is_some_and(|action| {
            self.min_executions.is_none_or(|min| action.executions >= min)
                && self.max_executions.is_none_or(|max| action.executions <= max)
        })
    }
}

/// Bounds on a party unit's stat.
///
/// Only [`TargetSymbol::MainCharacter`] is evaluated. Every other subject is
/// accepted and passes unconditionally.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPrerequisite {
    pub unit: TargetSymbol,
    pub stat: UnitStat,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds: ValueBounds,
}

impl UnitPrerequisite {
    pub fn main_character(stat: UnitStat, bounds: ValueBounds) -> Self {
        Self {
            unit: TargetSymbol::MainCharacter,
            stat,
            bounds,
        }
    }

    pub fn is_satisfied(&self, state: &GameState) -> bool {
        if self.unit != TargetSymbol::MainCharacter {
            return true;
        }
        state
            .main_character()
            .is_some_and(|unit| self.bounds.admits(unit.stat(self.stat)))
    }
}

/// One entry of an action's prerequisite list.
///
/// Each populated subject must hold; an entry with no subject passes.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Prerequisite {
    pub resource: Option<ResourcePrerequisite>,
    pub action: Option<ActionPrerequisite>,
    pub unit: Option<UnitPrerequisite>,
}

impl Prerequisite {
    pub fn resource(resource: ResourcePrerequisite) -> Self {
        Self {
            resource: Some(resource),
            ..Self::default()
        }
    }

    pub fn action(action: ActionPrerequisite) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    pub fn unit(unit: UnitPrerequisite) -> Self {
        Self {
            unit: Some(unit),
            ..Self::default()
        }
    }

    pub fn is_satisfied(&self, state: &GameState) -> bool {
        self.resource.as_ref().is_none_or(|p| p.is_satisfied(state))
            && self.action.as_ref().is_none_or(|p| p.is_satisfied(state))
            && self.unit.as_ref().is_none_or(|p| p.is_satisfied(state))
    }
}
