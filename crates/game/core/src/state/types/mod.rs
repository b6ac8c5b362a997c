pub mod common;
pub mod encounter;
pub mod log;
pub mod party;
pub mod records;
pub mod theme;

pub use common::{
    ActionId, CategoryId, EncounterId, EnemyId, EnemySlot, ItemId, Meter, PartyUnitId, ResourceId,
    SkillId,
};
pub use encounter::{AllyCombatState, EncounterState, EnemyCombatState, EnemyRoster};
pub use log::GameLog;
pub use party::{PartyUnitState, UnitStat};
pub use records::{ActionState, ItemState, ResourceState};
pub use theme::Theme;
