use super::common::Meter;

/// Runtime state of a resource: a clamped meter plus its sticky visibility flag.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceState {
    pub visible: bool,
    pub meter: Meter,
}

impl ResourceState {
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            visible: false,
            meter: Meter::new(value, max),
        }
    }

    pub fn value(&self) -> f64 {
        self.meter.value()
    }

    pub fn max(&self) -> f64 {
        self.meter.max()
    }
}

/// Runtime state of a player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionState {
    pub visible: bool,
    /// Successful executions so far. Only ever incremented.
    pub executions: u32,
}

/// Accumulated amount of an inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub amount: i64,
}
