//! Assembles the config registry from the six content tables.

use game_core::{
    ActionConfig, ConfigRegistry, EncounterConfig, EnemyConfig, GameError, ItemConfig,
    ResourceConfig, SkillConfig,
};

use crate::loaders::{CatalogLoader, LoadResult};

/// RON source text of every content table.
#[derive(Clone, Copy, Debug)]
pub struct ContentSources<'a> {
    pub resources: &'a str,
    pub actions: &'a str,
    pub encounters: &'a str,
    pub enemies: &'a str,
    pub items: &'a str,
    pub skills: &'a str,
}

/// Parses, indexes and validates content tables.
pub struct RegistryLoader;

impl RegistryLoader {
    /// Builds a registry from RON sources.
    ///
    /// Fails on the first unparsable table, on duplicate ids, and when
    /// validation finds dangling references; the error lists every problem.
    pub fn parse(sources: ContentSources<'_>) -> LoadResult<ConfigRegistry> {
        let registry = ConfigRegistry::builder()
            .resources(CatalogLoader::parse::<ResourceConfig>(sources.resources, "resources")?)
            .actions(CatalogLoader::parse::<ActionConfig>(sources.actions, "actions")?)
            .encounters(CatalogLoader::parse::<EncounterConfig>(
                sources.encounters,
                "encounters",
            )?)
            .enemies(CatalogLoader::parse::<EnemyConfig>(sources.enemies, "enemies")?)
            .items(CatalogLoader::parse::<ItemConfig>(sources.items, "items")?)
            .skills(CatalogLoader::parse::<SkillConfig>(sources.skills, "skills")?)
            .build()?;

        Self::validate(registry)
    }

    /// Runs registry validation, turning any problems into one error.
    pub fn validate(registry: ConfigRegistry) -> LoadResult<ConfigRegistry> {
        let errors = registry.validate();
        if errors.is_empty() {
            return Ok(registry);
        }
        let report = errors
            .iter()
            .map(|error| {
                format!(
                    "[{}] {}: {}",
                    error.severity().as_str(),
                    error.error_code(),
                    error
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        Err(anyhow::anyhow!(
            "Content failed validation ({} problems): {}",
            errors.len(),
            report
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: ContentSources<'static> = ContentSources {
        resources: "[]",
        actions: "[]",
        encounters: "[]",
        enemies: "[]",
        items: "[]",
        skills: "[]",
    };

    #[test]
    fn test_empty_content_is_valid() {
        let registry = RegistryLoader::parse(EMPTY).unwrap();
        assert!(registry.actions().is_empty());
    }

    #[test]
    fn test_dangling_reference_fails() {
        let sources = ContentSources {
            actions: r#"[(
                id: "battle",
                name: "Battle",
                category: "loop",
                global_effects: [start_encounter(encounter: "missing")],
            )]"#,
            ..EMPTY
        };
        let error = RegistryLoader::parse(sources).unwrap_err().to_string();
        assert!(error.contains("missing"), "{error}");
        assert!(error.contains("[fatal] REGISTRY_UNKNOWN_REFERENCE"), "{error}");
    }

    #[test]
    fn test_duplicate_ids_fail() {
        let sources = ContentSources {
            items: r#"[(id: "a", name: "A"), (id: "a", name: "B")]"#,
            ..EMPTY
        };
        assert!(RegistryLoader::parse(sources).is_err());
    }
}
