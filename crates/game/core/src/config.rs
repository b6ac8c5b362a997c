use crate::state::{PartyUnitId, SkillId, Theme};

/// Starting profile of the main character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MainCharacterConfig {
    pub id: PartyUnitId,
    pub name: String,
    pub health: f64,
    pub max_health: f64,
    pub mana: f64,
    pub max_mana: f64,
    pub skills: Vec<SkillId>,
}

impl Default for MainCharacterConfig {
    fn default() -> Self {
        Self {
            id: PartyUnitId::new(GameConfig::MAIN_CHARACTER_ID),
            name: "Player".to_owned(),
            health: 5.0,
            max_health: 10.0,
            mana: 0.0,
            max_mana: 0.0,
            skills: vec![SkillId::new("basic_attack")],
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub main_character: MainCharacterConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_theme: Theme,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Enemies fighting at the same time within one encounter.
    pub const MAX_ACTIVE_ENEMIES: usize = 1;

    // ===== runtime-tunable defaults =====
    pub const MAIN_CHARACTER_ID: &'static str = "player";

    pub fn new() -> Self {
        Self {
            main_character: MainCharacterConfig::default(),
            default_theme: Theme::System,
        }
    }

    pub fn with_main_character(main_character: MainCharacterConfig) -> Self {
        Self {
            main_character,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
