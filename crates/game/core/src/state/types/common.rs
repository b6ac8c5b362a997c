use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a resource definition (e.g. `days`).
    ResourceId
);
string_id!(
    /// Identifier of a player action definition.
    ActionId
);
string_id!(
    /// Identifier of an encounter definition.
    EncounterId
);
string_id!(
    /// Identifier of an enemy template.
    EnemyId
);
string_id!(
    /// Identifier of an item definition.
    ItemId
);
string_id!(
    /// Identifier of a combat skill.
    SkillId
);
string_id!(
    /// Identifier of a party member.
    PartyUnitId
);
string_id!(CategoryId);

/// Index of an enemy in the active encounter roster.
pub type EnemySlot = usize;

/// Clamped value/max pair backing resources and unit stats.
///
/// Every mutation keeps `0 <= value <= max`; `max` itself never drops below zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter {
    value: f64,
    max: f64,
}

impl Meter {
    pub fn new(value: f64, max: f64) -> Self {
        let max = max.max(0.0);
        Self {
            value: clamp(value, max),
            max,
        }
    }

    /// A meter filled to its maximum.
    pub fn full(max: f64) -> Self {
        Self::new(max, max)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Adds `amount` (possibly negative) to the value, clamped into `[0, max]`.
    pub fn add_value(&mut self, amount: f64) {
        self.value = clamp(self.value + amount, self.max);
    }

    /// Adds `amount` to the maximum and re-clamps the value into the new range.
    pub fn add_max(&mut self, amount: f64) {
        self.max = (self.max + amount).max(0.0);
        self.value = clamp(self.value, self.max);
    }

    pub fn is_empty(&self) -> bool {
        self.value <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}/{:.2}", self.value, self.max)
    }
}

// `f64::clamp` panics on NaN bounds; min/max chaining degrades instead.
fn clamp(value: f64, max: f64) -> f64 {
    value.max(0.0).min(max)
}
