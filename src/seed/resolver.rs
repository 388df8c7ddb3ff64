use crate::seed::error::LoadError;
use crate::storage::entity::{
    assessment, category, company, department, dimension, sector, user, EntityKind,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Natural key -> persisted record, for one entity kind.
#[derive(Debug, Clone)]
pub struct Resolver<T> {
    kind: EntityKind,
    entries: HashMap<String, T>,
}

impl<T> Resolver<T> {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Fails before anything is written if `key` is already taken.
    pub fn ensure_vacant(&self, key: &str) -> Result<(), LoadError> {
        if self.entries.contains_key(key) {
            return Err(LoadError::DuplicateKey {
                kind: self.kind,
                key: key.to_string(),
            });
        }
        Ok(())
    }

    pub fn register(&mut self, key: impl Into<String>, record: T) -> Result<&T, LoadError> {
        match self.entries.entry(key.into()) {
            Entry::Occupied(e) => Err(LoadError::DuplicateKey {
                kind: self.kind,
                key: e.key().clone(),
            }),
            Entry::Vacant(e) => Ok(e.insert(record)),
        }
    }

    pub fn resolve(&self, key: &str) -> Result<&T, LoadError> {
        self.entries
            .get(key)
            .ok_or_else(|| LoadError::UnknownReference {
                kind: self.kind,
                key: key.to_string(),
            })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything one seed run has created so far, scoped to that run.
#[derive(Debug, Clone)]
pub struct SeedContext {
    pub categories: Resolver<category::Model>,
    pub sectors: Resolver<sector::Model>,
    pub companies: Resolver<company::Model>,
    pub departments: Resolver<department::Model>,
    pub users: Resolver<user::Model>,
    pub dimensions: Resolver<dimension::Model>,
    pub assessments: Resolver<assessment::Model>,
}

impl SeedContext {
    pub fn new() -> Self {
        Self {
            categories: Resolver::new(EntityKind::Category),
            sectors: Resolver::new(EntityKind::Sector),
            companies: Resolver::new(EntityKind::Company),
            departments: Resolver::new(EntityKind::Department),
            users: Resolver::new(EntityKind::User),
            dimensions: Resolver::new(EntityKind::Dimension),
            assessments: Resolver::new(EntityKind::Assessment),
        }
    }

    // 部门名只在公司内唯一
    pub fn department_key(company: &str, department: &str) -> String {
        format!("{}/{}", company, department)
    }
}

impl Default for SeedContext {
    fn default() -> Self {
        Self::new()
    }
}
