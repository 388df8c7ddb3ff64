use crate::storage::entity::maturity_descriptor::{
    ActiveModel as DescriptorActiveModel, Column as DescriptorColumn, Model as DescriptorModel,
};
use crate::storage::entity::MaturityDescriptor;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

pub struct DescriptorRepository;

impl DescriptorRepository {
    /// Inserts one ladder; `levels[i]` becomes level `i + 1`. All rows or none.
    pub async fn insert_ladder(
        db: &DatabaseConnection,
        dimension_id: i32,
        sector_id: i32,
        levels: &[String],
    ) -> Result<usize, sea_orm::DbErr> {
        if levels.is_empty() {
            return Ok(0);
        }

        let rows: Vec<DescriptorActiveModel> = levels
            .iter()
            .enumerate()
            .map(|(idx, text)| DescriptorActiveModel {
                id: NotSet,
                dimension_id: Set(dimension_id),
                sector_id: Set(sector_id),
                level: Set(idx as i32 + 1),
                description: Set(text.clone()),
            })
            .collect();

        let txn = db.begin().await?;
        MaturityDescriptor::insert_many(rows).exec(&txn).await?;
        txn.commit().await?;

        Ok(levels.len())
    }

    #[cfg(test)]
    pub async fn ladder<C: ConnectionTrait>(
        db: &C,
        dimension_id: i32,
        sector_id: i32,
    ) -> Result<Vec<DescriptorModel>, sea_orm::DbErr> {
        MaturityDescriptor::find()
            .filter(DescriptorColumn::DimensionId.eq(dimension_id))
            .filter(DescriptorColumn::SectorId.eq(sector_id))
            .order_by_asc(DescriptorColumn::Level)
            .all(db)
            .await
    }

    pub async fn all<C: ConnectionTrait>(db: &C) -> Result<Vec<DescriptorModel>, sea_orm::DbErr> {
        MaturityDescriptor::find()
            .order_by_asc(DescriptorColumn::DimensionId)
            .order_by_asc(DescriptorColumn::SectorId)
            .order_by_asc(DescriptorColumn::Level)
            .all(db)
            .await
    }
}
