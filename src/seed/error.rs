use crate::seed::phase::Phase;
use crate::storage::entity::EntityKind;
use sea_orm::DbErr;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("duplicate {kind} key: {key}")]
    DuplicateKey { kind: EntityKind, key: String },
    #[error("unknown {kind} reference: {key}")]
    UnknownReference { kind: EntityKind, key: String },
    #[error("store write failed ({context}): {source}")]
    Store {
        context: String,
        #[source]
        source: DbErr,
    },
    #[error("{kind} #{id} not found")]
    NotFound { kind: EntityKind, id: i32 },
    #[error("maturity ladder {dimension}/{sector} has {levels} levels, expected 1..={max}")]
    InvalidLadder {
        dimension: String,
        sector: String,
        levels: usize,
        max: usize,
    },
    #[error("score {key} has level {level}, expected 1..={max}")]
    InvalidLevel { key: String, level: i32, max: usize },
    #[error("maturity ladder {dimension}/{sector} was already loaded")]
    DuplicateDescriptorGroup { dimension: String, sector: String },
    #[error("seed run timed out after {0:?}")]
    Timeout(Duration),
}

impl LoadError {
    pub fn store(context: impl Into<String>) -> impl FnOnce(DbErr) -> LoadError {
        let context = context.into();
        move |source| LoadError::Store { context, source }
    }

    /// Whether the record that raised this error can be skipped while `phase` keeps going.
    pub fn is_skippable_in(&self, phase: Phase) -> bool {
        match self {
            LoadError::UnknownReference { .. } => phase != Phase::SoftDeletes,
            LoadError::Store { .. }
            | LoadError::InvalidLadder { .. }
            | LoadError::InvalidLevel { .. }
            | LoadError::DuplicateDescriptorGroup { .. } => phase.is_bulk(),
            LoadError::DuplicateKey { .. }
            | LoadError::NotFound { .. }
            | LoadError::Timeout(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_only_skip_in_bulk_phases() {
        let err = LoadError::store("x")(DbErr::Custom("boom".to_string()));
        assert!(!err.is_skippable_in(Phase::Companies));
        assert!(!err.is_skippable_in(Phase::Dimensions));
        assert!(err.is_skippable_in(Phase::MaturityDescriptors));
        assert!(err.is_skippable_in(Phase::Scores));
    }

    #[test]
    fn unknown_reference_is_fatal_only_when_soft_deleting() {
        let err = LoadError::UnknownReference {
            kind: EntityKind::Sector,
            key: "Nowhere".to_string(),
        };
        assert!(err.is_skippable_in(Phase::Companies));
        assert!(err.is_skippable_in(Phase::MaturityDescriptors));
        assert!(!err.is_skippable_in(Phase::SoftDeletes));
    }

    #[test]
    fn duplicate_keys_always_abort() {
        let err = LoadError::DuplicateKey {
            kind: EntityKind::Category,
            key: "Leadership".to_string(),
        };
        assert!(Phase::ALL.iter().all(|p| !err.is_skippable_in(*p)));
        assert_eq!(err.to_string(), "duplicate Category key: Leadership");
    }
}
