use crate::catalog::{SoftDeleteKind, SoftDeleteTarget};
use crate::seed::error::LoadError;
use crate::seed::resolver::SeedContext;
use crate::storage::entity::{Company, Dimension, SoftDeletable, User};
use crate::storage::repository::SoftDeleteRepository;
use log::info;
use sea_orm::ConnectionTrait;

/// Stamps `deleted_at` on an existing row. A missing id is an error, not a no-op.
pub async fn mark_deleted<E, C>(db: &C, id: i32, timestamp: i64) -> Result<(), LoadError>
where
    E: SoftDeletable,
    C: ConnectionTrait,
{
    let touched = SoftDeleteRepository::mark_deleted::<E, C>(db, id, timestamp)
        .await
        .map_err(LoadError::store(format!("soft delete {} #{}", E::KIND, id)))?;
    if touched == 0 {
        return Err(LoadError::NotFound { kind: E::KIND, id });
    }
    Ok(())
}

pub async fn apply_target<C: ConnectionTrait>(
    db: &C,
    ctx: &SeedContext,
    target: &SoftDeleteTarget,
    timestamp: i64,
) -> Result<(), LoadError> {
    match target.kind {
        SoftDeleteKind::Company => {
            let id = ctx.companies.resolve(&target.key)?.id;
            mark_deleted::<Company, C>(db, id, timestamp).await?;
        }
        SoftDeleteKind::User => {
            let id = ctx.users.resolve(&target.key)?.id;
            mark_deleted::<User, C>(db, id, timestamp).await?;
        }
        SoftDeleteKind::Dimension => {
            let id = ctx.dimensions.resolve(&target.key)?.id;
            mark_deleted::<Dimension, C>(db, id, timestamp).await?;
        }
    }
    info!("soft-deleted {:?} {}", target.kind, target.key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::entity::EntityKind;
    use crate::test_support::memory_db;

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let db = memory_db().await;
        let err = mark_deleted::<Company, _>(&db, 4242, 1).await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::NotFound {
                kind: EntityKind::Company,
                id: 4242
            }
        ));
    }

    #[tokio::test]
    async fn unresolved_target_is_reported() {
        let db = memory_db().await;
        let ctx = SeedContext::new();
        let target = SoftDeleteTarget {
            kind: SoftDeleteKind::User,
            key: "ghost@leanassess.test".to_string(),
        };
        let err = apply_target(&db, &ctx, &target, 1).await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnknownReference {
                kind: EntityKind::User,
                ..
            }
        ));
    }
}
