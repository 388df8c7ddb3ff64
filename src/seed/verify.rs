//! Read-only checks run after a load: what is active, what is soft-deleted,
//! and whether every maturity ladder is complete.

use crate::catalog::{SoftDeleteKind, SoftDeleteTarget};
use crate::seed::resolver::SeedContext;
use crate::storage::entity::{
    Assessment, Category, Company, Department, Dimension, EntityKind, Evidence,
    MaturityDescriptor, Score, Sector, SoftDeletable, User,
};
use crate::storage::repository::{DescriptorRepository, SoftDeleteRepository};
use log::{info, warn};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSummary {
    pub kind: EntityKind,
    pub total: u64,
    pub active: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderGap {
    pub dimension_id: i32,
    pub sector_id: i32,
    pub levels: Vec<i32>,
}

pub async fn summarize<C: ConnectionTrait>(db: &C) -> Result<Vec<ActiveSummary>, DbErr> {
    let mut out = Vec::with_capacity(EntityKind::ALL.len());
    for kind in EntityKind::ALL {
        let (total, active) = match kind {
            EntityKind::Category => same(Category::find().count(db).await?),
            EntityKind::Sector => same(Sector::find().count(db).await?),
            EntityKind::Company => (
                Company::find().count(db).await?,
                SoftDeleteRepository::count_active::<Company, C>(db).await?,
            ),
            EntityKind::Department => same(Department::find().count(db).await?),
            EntityKind::User => (
                User::find().count(db).await?,
                SoftDeleteRepository::count_active::<User, C>(db).await?,
            ),
            EntityKind::Dimension => (
                Dimension::find().count(db).await?,
                SoftDeleteRepository::count_active::<Dimension, C>(db).await?,
            ),
            EntityKind::MaturityDescriptor => same(MaturityDescriptor::find().count(db).await?),
            EntityKind::Assessment => same(Assessment::find().count(db).await?),
            EntityKind::Score => same(Score::find().count(db).await?),
            EntityKind::Evidence => same(Evidence::find().count(db).await?),
        };
        out.push(ActiveSummary {
            kind,
            total,
            active,
        });
    }
    Ok(out)
}

fn same(n: u64) -> (u64, u64) {
    (n, n)
}

/// Pairs whose levels are not exactly `1..=n` with `n <= max_levels`.
pub async fn ladder_gaps<C: ConnectionTrait>(
    db: &C,
    max_levels: usize,
) -> Result<Vec<LadderGap>, DbErr> {
    let rows = DescriptorRepository::all(db).await?;
    let mut ladders: BTreeMap<(i32, i32), Vec<i32>> = BTreeMap::new();
    for row in rows {
        ladders
            .entry((row.dimension_id, row.sector_id))
            .or_default()
            .push(row.level);
    }

    Ok(ladders
        .into_iter()
        .filter_map(|((dimension_id, sector_id), mut levels)| {
            levels.sort_unstable();
            let complete = levels.len() <= max_levels
                && levels.iter().enumerate().all(|(i, l)| *l == i as i32 + 1);
            if complete {
                None
            } else {
                Some(LadderGap {
                    dimension_id,
                    sector_id,
                    levels,
                })
            }
        })
        .collect())
}

/// Every target must still be addressable by id, carry `deleted_at`, and be
/// absent from the active listing. Returns a description of each violation.
pub async fn soft_deletes_hold<C: ConnectionTrait>(
    db: &C,
    ctx: &SeedContext,
    targets: &[SoftDeleteTarget],
) -> Result<Vec<String>, DbErr> {
    let mut violations = Vec::new();
    for target in targets {
        let id = match target.kind {
            SoftDeleteKind::Company => ctx.companies.resolve(&target.key).map(|m| m.id),
            SoftDeleteKind::User => ctx.users.resolve(&target.key).map(|m| m.id),
            SoftDeleteKind::Dimension => ctx.dimensions.resolve(&target.key).map(|m| m.id),
        };
        let Ok(id) = id else {
            violations.push(format!("{:?} {} was never created", target.kind, target.key));
            continue;
        };
        let problem = match target.kind {
            SoftDeleteKind::Company => check_hidden::<Company, C>(db, id).await?,
            SoftDeleteKind::User => check_hidden::<User, C>(db, id).await?,
            SoftDeleteKind::Dimension => check_hidden::<Dimension, C>(db, id).await?,
        };
        if let Some(p) = problem {
            violations.push(format!("{:?} {}: {}", target.kind, target.key, p));
        }
    }
    Ok(violations)
}

async fn check_hidden<E, C>(db: &C, id: i32) -> Result<Option<&'static str>, DbErr>
where
    E: SoftDeletable,
    E::Model: Sync,
    C: ConnectionTrait,
{
    if SoftDeleteRepository::find_by_id::<E, C>(db, id)
        .await?
        .is_none()
    {
        return Ok(Some("row is gone"));
    }
    let still_active = SoftDeleteRepository::list_active::<E, C>(db)
        .await?
        .iter()
        .any(|m| E::id_of(m) == id);
    if still_active {
        return Ok(Some("still listed as active"));
    }
    Ok(None)
}

/// Logs the verification results. Gaps are warnings, not failures.
pub async fn report<C: ConnectionTrait>(db: &C, max_levels: usize) -> Result<(), DbErr> {
    for s in summarize(db).await? {
        if s.kind.is_soft_deletable() {
            info!(
                "{}: {} active, {} soft-deleted",
                s.kind,
                s.active,
                s.total - s.active
            );
        } else {
            info!("{}: {}", s.kind, s.total);
        }
    }

    let companies = SoftDeleteRepository::list_active::<Company, C>(db).await?;
    info!(
        "active companies: {}",
        companies
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let users = SoftDeleteRepository::list_active::<User, C>(db).await?;
    info!(
        "active users: {}",
        users
            .iter()
            .map(|u| format!("{} ({})", u.email, u.role))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let gaps = ladder_gaps(db, max_levels).await?;
    if gaps.is_empty() {
        info!("all maturity ladders are complete");
    }
    for gap in gaps {
        warn!(
            "incomplete maturity ladder dimension #{} sector #{}: levels {:?}",
            gap.dimension_id, gap.sector_id, gap.levels
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::seed::{LoadOptions, Loader};
    use crate::storage::repository::DescriptorRepository;
    use crate::test_support::memory_db;

    #[tokio::test]
    async fn summary_separates_soft_deleted_rows() {
        let db = memory_db().await;
        let catalog = catalog::builtin();
        Loader::new(&db, LoadOptions::default())
            .load(&catalog)
            .await
            .unwrap();

        let summary = summarize(&db).await.unwrap();
        let get = |kind| summary.iter().find(|s| s.kind == kind).unwrap().clone();

        let companies = get(EntityKind::Company);
        assert_eq!(companies.total, catalog.companies.len() as u64);
        assert_eq!(companies.active, companies.total - 1);
        let users = get(EntityKind::User);
        assert_eq!(users.active, users.total - 1);
        let dims = get(EntityKind::Dimension);
        assert_eq!(dims.active, dims.total - 1);

        let categories = get(EntityKind::Category);
        assert_eq!(categories.total, categories.active);
        assert_eq!(categories.total, catalog.categories.len() as u64);
    }

    #[tokio::test]
    async fn soft_deleted_targets_are_hidden_but_kept() {
        let db = memory_db().await;
        let catalog = catalog::builtin();
        let run = Loader::new(&db, LoadOptions::default())
            .load(&catalog)
            .await
            .unwrap();

        let violations = soft_deletes_hold(&db, &run.context, &catalog.soft_deletes)
            .await
            .unwrap();
        assert!(violations.is_empty(), "{:?}", violations);

        let id = run.context.users.resolve("viewer@leanassess.test").unwrap().id;
        let not_deleted = SoftDeleteTarget {
            kind: SoftDeleteKind::User,
            key: "viewer@leanassess.test".to_string(),
        };
        let violations = soft_deletes_hold(&db, &run.context, &[not_deleted])
            .await
            .unwrap();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("still listed as active"));
        assert!(SoftDeleteRepository::find_by_id::<User, _>(&db, id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn overlong_ladder_is_reported_as_gap() {
        let db = memory_db().await;
        let mut catalog = catalog::builtin();
        catalog.descriptors.clear();
        let run = Loader::new(&db, LoadOptions::default())
            .load(&catalog)
            .await
            .unwrap();
        assert!(ladder_gaps(&db, 5).await.unwrap().is_empty());

        let dim = run.context.dimensions.resolve("Kaizen Events").unwrap().id;
        let sector = run.context.sectors.resolve("Healthcare").unwrap().id;
        let levels: Vec<String> = (1..=6).map(|l| format!("level {}", l)).collect();
        DescriptorRepository::insert_ladder(&db, dim, sector, &levels)
            .await
            .unwrap();

        let gaps = ladder_gaps(&db, 5).await.unwrap();
        assert_eq!(
            gaps,
            vec![LadderGap {
                dimension_id: dim,
                sector_id: sector,
                levels: vec![1, 2, 3, 4, 5, 6],
            }]
        );
        assert!(ladder_gaps(&db, 6).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_store_reports_cleanly() {
        let db = memory_db().await;
        assert!(summarize(&db).await.unwrap().iter().all(|s| s.total == 0));
        report(&db, 5).await.unwrap();
    }
}
