//! Id-free structural view of the active data set, for comparing two loads.

use crate::storage::entity::{
    Assessment, AssessmentStatus, Category, Company, Department, Dimension, Evidence, Score,
    Sector, User, UserRole,
};
use crate::storage::repository::{DescriptorRepository, SoftDeleteRepository};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyShape {
    pub sector: String,
    pub departments: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserShape {
    pub role: Option<UserRole>,
    pub company: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentShape {
    pub company: String,
    pub department: String,
    pub expert: String,
    pub status: Option<AssessmentStatus>,
}

/// Id-free view of the active data set. Two loads of the same catalog into
/// clean stores compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub categories: BTreeSet<String>,
    pub sectors: BTreeSet<String>,
    pub companies: BTreeMap<String, CompanyShape>,
    pub users: BTreeMap<String, UserShape>,
    /// dimension -> category
    pub dimensions: BTreeMap<String, String>,
    /// (dimension, sector) -> levels
    pub ladders: BTreeMap<(String, String), Vec<i32>>,
    pub assessments: BTreeMap<String, AssessmentShape>,
    /// (assessment, dimension, level)
    pub scores: BTreeSet<(String, String, i32)>,
    /// (assessment, file_url)
    pub evidence: BTreeSet<(String, String)>,
}

pub async fn snapshot<C: ConnectionTrait>(db: &C) -> Result<ActiveSnapshot, DbErr> {
    let mut snap = ActiveSnapshot::default();

    let categories = Category::find().all(db).await?;
    let category_names: HashMap<i32, String> =
        categories.iter().map(|c| (c.id, c.name.clone())).collect();
    snap.categories = categories.into_iter().map(|c| c.name).collect();

    let sectors = Sector::find().all(db).await?;
    let sector_names: HashMap<i32, String> =
        sectors.iter().map(|s| (s.id, s.name.clone())).collect();
    snap.sectors = sectors.into_iter().map(|s| s.name).collect();

    let company_names: HashMap<i32, String> = Company::find()
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    for company in SoftDeleteRepository::list_active::<Company, C>(db).await? {
        snap.companies.insert(
            company.name,
            CompanyShape {
                sector: name_of(&sector_names, company.sector_id),
                departments: BTreeSet::new(),
            },
        );
    }

    let departments = Department::find().all(db).await?;
    let department_names: HashMap<i32, String> =
        departments.iter().map(|d| (d.id, d.name.clone())).collect();
    for dept in departments {
        let company = name_of(&company_names, dept.company_id);
        if let Some(shape) = snap.companies.get_mut(&company) {
            shape.departments.insert(dept.name);
        }
    }

    let user_emails: HashMap<i32, String> = User::find()
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u.email))
        .collect();
    for user in SoftDeleteRepository::list_active::<User, C>(db).await? {
        snap.users.insert(
            user.email,
            UserShape {
                role: user.role.parse().ok(),
                company: name_of(&company_names, user.company_id),
            },
        );
    }

    let dimension_names: HashMap<i32, String> = Dimension::find()
        .all(db)
        .await?
        .into_iter()
        .map(|d| (d.id, d.name))
        .collect();
    let mut active_dimensions = HashSet::new();
    for dim in SoftDeleteRepository::list_active::<Dimension, C>(db).await? {
        active_dimensions.insert(dim.id);
        snap.dimensions
            .insert(dim.name, name_of(&category_names, dim.category_id));
    }

    for row in DescriptorRepository::all(db).await? {
        if !active_dimensions.contains(&row.dimension_id) {
            continue;
        }
        snap.ladders
            .entry((
                name_of(&dimension_names, row.dimension_id),
                name_of(&sector_names, row.sector_id),
            ))
            .or_default()
            .push(row.level);
    }

    let assessments = Assessment::find().all(db).await?;
    let assessment_titles: HashMap<i32, String> =
        assessments.iter().map(|a| (a.id, a.title.clone())).collect();
    for a in assessments {
        snap.assessments.insert(
            a.title,
            AssessmentShape {
                company: name_of(&company_names, a.company_id),
                department: name_of(&department_names, a.department_id),
                expert: name_of(&user_emails, a.expert_id),
                status: a.status.parse().ok(),
            },
        );
    }

    for s in Score::find().all(db).await? {
        snap.scores.insert((
            name_of(&assessment_titles, s.assessment_id),
            name_of(&dimension_names, s.dimension_id),
            s.level,
        ));
    }
    for e in Evidence::find().all(db).await? {
        snap.evidence
            .insert((name_of(&assessment_titles, e.assessment_id), e.file_url));
    }

    Ok(snap)
}

fn name_of(names: &HashMap<i32, String>, id: i32) -> String {
    names.get(&id).cloned().unwrap_or_else(|| format!("#{}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;

    #[tokio::test]
    async fn snapshot_of_empty_store_is_empty() {
        let db = memory_db().await;
        assert_eq!(snapshot(&db).await.unwrap(), ActiveSnapshot::default());
    }
}
