use crate::storage::entity::SoftDeletable;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, PaginatorTrait, QueryFilter};

pub struct SoftDeleteRepository;

impl SoftDeleteRepository {
    /// Sets `deleted_at` on one row. Returns the number of rows touched (0 or 1).
    pub async fn mark_deleted<E, C>(db: &C, id: i32, timestamp: i64) -> Result<u64, sea_orm::DbErr>
    where
        E: SoftDeletable,
        C: ConnectionTrait,
    {
        let res = E::update_many()
            .col_expr(E::deleted_at_column(), Expr::value(timestamp))
            .filter(E::id_column().eq(id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Looks a row up by id regardless of its deletion state.
    pub async fn find_by_id<E, C>(db: &C, id: i32) -> Result<Option<E::Model>, sea_orm::DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync,
        C: ConnectionTrait,
    {
        E::find().filter(E::id_column().eq(id)).one(db).await
    }

    pub async fn list_active<E, C>(db: &C) -> Result<Vec<E::Model>, sea_orm::DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync,
        C: ConnectionTrait,
    {
        E::find()
            .filter(E::deleted_at_column().is_null())
            .all(db)
            .await
    }

    pub async fn count_active<E, C>(db: &C) -> Result<u64, sea_orm::DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync + 'static,
        C: ConnectionTrait,
    {
        E::find()
            .filter(E::deleted_at_column().is_null())
            .count(db)
            .await
    }
}
