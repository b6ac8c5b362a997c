//! Player actions and the rules they run on.
//!
//! - `prerequisite`: gates over resources, action history and unit stats
//! - `available`: enabled/visible queries built on prerequisites
//! - `effect`: global and unit effects and the context they apply through
//! - `targeting`: symbolic targets and their resolution inside encounters
//! - `execute`: the player action executor

pub mod available;
pub mod effect;
pub mod execute;
pub mod prerequisite;
pub mod targeting;

pub use available::{is_enabled, is_visible};
pub use effect::{
    EffectContext, GlobalEffect, UnitEffect, UnitEffectConfig, UnitEffectKind, ValueTarget,
};
pub use execute::{ActionOutcome, execute_action};
pub use prerequisite::{
    ActionPrerequisite, Prerequisite, ResourcePrerequisite, ResourceRelation, UnitPrerequisite,
    ValueBounds,
};
pub use targeting::{Combatant, TargetSymbol, UnitTargets};
