pub mod assessment;
pub mod category;
pub mod company;
pub mod department;
pub mod dimension;
pub mod evidence;
pub mod maturity_descriptor;
pub mod score;
pub mod sector;
pub mod user;

pub use assessment::{AssessmentStatus, Entity as Assessment};
pub use category::Entity as Category;
pub use company::Entity as Company;
pub use department::Entity as Department;
pub use dimension::Entity as Dimension;
pub use evidence::Entity as Evidence;
pub use maturity_descriptor::Entity as MaturityDescriptor;
pub use score::Entity as Score;
pub use sector::Entity as Sector;
pub use user::{Entity as User, UserRole};

use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Category,
    Sector,
    Company,
    Department,
    User,
    Dimension,
    MaturityDescriptor,
    Assessment,
    Score,
    Evidence,
}

impl EntityKind {
    pub const ALL: [EntityKind; 10] = [
        EntityKind::Category,
        EntityKind::Sector,
        EntityKind::Company,
        EntityKind::Department,
        EntityKind::User,
        EntityKind::Dimension,
        EntityKind::MaturityDescriptor,
        EntityKind::Assessment,
        EntityKind::Score,
        EntityKind::Evidence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "Category",
            EntityKind::Sector => "Sector",
            EntityKind::Company => "Company",
            EntityKind::Department => "Department",
            EntityKind::User => "User",
            EntityKind::Dimension => "Dimension",
            EntityKind::MaturityDescriptor => "MaturityDescriptor",
            EntityKind::Assessment => "Assessment",
            EntityKind::Score => "Score",
            EntityKind::Evidence => "Evidence",
        }
    }

    pub fn is_soft_deletable(&self) -> bool {
        matches!(
            self,
            EntityKind::Company | EntityKind::User | EntityKind::Dimension
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities carrying a nullable `deleted_at` column.
pub trait SoftDeletable: EntityTrait {
    const KIND: EntityKind;

    fn id_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
    fn id_of(model: &Self::Model) -> i32;
}

impl SoftDeletable for Company {
    const KIND: EntityKind = EntityKind::Company;

    fn id_column() -> Self::Column {
        company::Column::Id
    }

    fn deleted_at_column() -> Self::Column {
        company::Column::DeletedAt
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }
}

impl SoftDeletable for User {
    const KIND: EntityKind = EntityKind::User;

    fn id_column() -> Self::Column {
        user::Column::Id
    }

    fn deleted_at_column() -> Self::Column {
        user::Column::DeletedAt
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }
}

impl SoftDeletable for Dimension {
    const KIND: EntityKind = EntityKind::Dimension;

    fn id_column() -> Self::Column {
        dimension::Column::Id
    }

    fn deleted_at_column() -> Self::Column {
        dimension::Column::DeletedAt
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }
}
