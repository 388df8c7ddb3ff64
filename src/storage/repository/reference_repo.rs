use crate::catalog::{CategoryDef, DimensionDef, SectorDef};
use crate::storage::entity::category::{ActiveModel as CategoryActiveModel, Model as CategoryModel};
use crate::storage::entity::dimension::{
    ActiveModel as DimensionActiveModel, Model as DimensionModel,
};
use crate::storage::entity::sector::{ActiveModel as SectorActiveModel, Model as SectorModel};
use sea_orm::{ActiveModelTrait, ConnectionTrait, NotSet, Set};

/// Categories, sectors and dimensions: created once, never updated.
pub struct ReferenceRepository;

impl ReferenceRepository {
    pub async fn create_category<C: ConnectionTrait>(
        db: &C,
        def: &CategoryDef,
        now: i64,
    ) -> Result<CategoryModel, sea_orm::DbErr> {
        CategoryActiveModel {
            id: NotSet,
            name: Set(def.name.clone()),
            description: Set(def.description.clone()),
            created_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub async fn create_sector<C: ConnectionTrait>(
        db: &C,
        def: &SectorDef,
        now: i64,
    ) -> Result<SectorModel, sea_orm::DbErr> {
        SectorActiveModel {
            id: NotSet,
            name: Set(def.name.clone()),
            created_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub async fn create_dimension<C: ConnectionTrait>(
        db: &C,
        def: &DimensionDef,
        category_id: i32,
        now: i64,
    ) -> Result<DimensionModel, sea_orm::DbErr> {
        DimensionActiveModel {
            id: NotSet,
            name: Set(def.name.clone()),
            description: Set(def.description.clone()),
            category_id: Set(category_id),
            created_at: Set(now),
            deleted_at: Set(None),
        }
        .insert(db)
        .await
    }
}
