use alloc::collections::BTreeMap;

use crate::types::{SkillDefId, SkillDefinition, INNATE_SKILL_ID};

/// Read-only registry of skill definitions keyed by catalog id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    definitions: BTreeMap<SkillDefId, SkillDefinition>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one with the same id
    pub fn insert(&mut self, definition: SkillDefinition) {
        self.definitions.insert(definition.id.clone(), definition);
    }

    pub fn get(&self, id: &SkillDefId) -> Option<&SkillDefinition> {
        self.definitions.get(id)
    }

    /// The innate move skill, when the catalog carries it
    pub fn innate(&self) -> Option<&SkillDefinition> {
        self.definitions.get(&SkillDefId::new(INNATE_SKILL_ID))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl FromIterator<SkillDefinition> for SkillCatalog {
    fn from_iter<I: IntoIterator<Item = SkillDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}
