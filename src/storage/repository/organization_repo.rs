use crate::catalog::UserFixture;
use crate::storage::entity::company::{ActiveModel as CompanyActiveModel, Model as CompanyModel};
use crate::storage::entity::department::{
    ActiveModel as DepartmentActiveModel, Model as DepartmentModel,
};
use crate::storage::entity::user::{ActiveModel as UserActiveModel, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, NotSet, Set, TransactionTrait,
};

pub struct OrganizationRepository;

impl OrganizationRepository {
    /// Company and its departments go in together or not at all.
    pub async fn create_company_with_departments(
        db: &DatabaseConnection,
        name: &str,
        sector_id: i32,
        departments: &[String],
        now: i64,
    ) -> Result<(CompanyModel, Vec<DepartmentModel>), sea_orm::DbErr> {
        let txn = db.begin().await?;

        let company = CompanyActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            sector_id: Set(sector_id),
            created_at: Set(now),
            deleted_at: Set(None),
        }
        .insert(&txn)
        .await?;

        let mut created = Vec::with_capacity(departments.len());
        for dept in departments {
            let model = DepartmentActiveModel {
                id: NotSet,
                name: Set(dept.clone()),
                company_id: Set(company.id),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
            created.push(model);
        }

        txn.commit().await?;
        Ok((company, created))
    }

    pub async fn create_user<C: ConnectionTrait>(
        db: &C,
        fixture: &UserFixture,
        company_id: i32,
        now: i64,
    ) -> Result<UserModel, sea_orm::DbErr> {
        UserActiveModel {
            id: NotSet,
            email: Set(fixture.email.clone()),
            name: Set(fixture.name.clone()),
            password: Set(fixture.password.clone()),
            role: Set(fixture.role.as_str().to_string()),
            company_id: Set(company_id),
            created_at: Set(now),
            deleted_at: Set(None),
        }
        .insert(db)
        .await
    }
}
