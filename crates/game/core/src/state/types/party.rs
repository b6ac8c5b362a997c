use super::common::{Meter, PartyUnitId, SkillId};

/// Stat targeted by unit prerequisites and unit effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitStat {
    Health,
    Mana,
}

/// A member of the player's party.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyUnitState {
    pub id: PartyUnitId,
    pub name: String,
    pub health: Meter,
    pub mana: Meter,
    pub skills: Vec<SkillId>,
}

impl PartyUnitState {
    pub fn stat(&self, stat: UnitStat) -> &Meter {
        match stat {
            UnitStat::Health => &self.health,
            UnitStat::Mana => &self.mana,
        }
    }

    pub fn stat_mut(&mut self, stat: UnitStat) -> &mut Meter {
        match stat {
            UnitStat::Health => &mut self.health,
            UnitStat::Mana => &mut self.mana,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_empty()
    }
}
