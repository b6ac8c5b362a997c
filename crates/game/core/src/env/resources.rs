use crate::state::{CategoryId, ResourceId};

/// Column a resource is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResourceKind {
    #[default]
    Basic,
    Stat,
}

/// Static definition of a global resource.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceConfig {
    pub id: ResourceId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ResourceKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<CategoryId>,
    pub base_value: f64,
    pub base_max: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl ResourceConfig {
    pub fn new(id: impl Into<ResourceId>, base_value: f64, base_max: f64) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            kind: ResourceKind::Basic,
            category: None,
            base_value,
            base_max,
            description: String::new(),
        }
    }
}
