use crate::seed::phase::Phase;
use crate::storage::entity::EntityKind;
use log::{info, warn};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub phase: Phase,
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub created: BTreeMap<EntityKind, usize>,
    pub soft_deleted: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl SeedReport {
    pub fn record_created(&mut self, kind: EntityKind, n: usize) {
        *self.created.entry(kind).or_insert(0) += n;
    }

    #[cfg(test)]
    pub fn created(&self, kind: EntityKind) -> usize {
        self.created.get(&kind).copied().unwrap_or(0)
    }

    #[cfg(test)]
    pub fn skipped_in(&self, phase: Phase) -> impl Iterator<Item = &SkippedRecord> {
        self.skipped.iter().filter(move |s| s.phase == phase)
    }

    pub fn log_summary(&self) {
        for (kind, n) in &self.created {
            info!("{}: {} created", kind, n);
        }
        info!("soft-deleted records: {}", self.soft_deleted);
        if self.skipped.is_empty() {
            info!("no records skipped");
            return;
        }
        warn!("{} records skipped:", self.skipped.len());
        for s in &self.skipped {
            warn!("  [{}] {}: {}", s.phase, s.key, s.reason);
        }
    }
}
