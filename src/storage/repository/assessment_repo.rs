use crate::catalog::{AssessmentFixture, EvidenceFixture, ScoreFixture};
use crate::storage::entity::assessment::{
    ActiveModel as AssessmentActiveModel, Model as AssessmentModel,
};
use crate::storage::entity::evidence::{ActiveModel as EvidenceActiveModel, Model as EvidenceModel};
use crate::storage::entity::score::{ActiveModel as ScoreActiveModel, Model as ScoreModel};
use sea_orm::{ActiveModelTrait, ConnectionTrait, NotSet, Set};

pub struct AssessmentRepository;

#[derive(Debug, Clone, Copy)]
pub struct AssessmentRefs {
    pub company_id: i32,
    pub department_id: i32,
    pub expert_id: i32,
}

impl AssessmentRepository {
    pub async fn create_assessment<C: ConnectionTrait>(
        db: &C,
        fixture: &AssessmentFixture,
        refs: AssessmentRefs,
        now: i64,
    ) -> Result<AssessmentModel, sea_orm::DbErr> {
        AssessmentActiveModel {
            id: NotSet,
            title: Set(fixture.title.clone()),
            company_id: Set(refs.company_id),
            department_id: Set(refs.department_id),
            expert_id: Set(refs.expert_id),
            status: Set(fixture.status.as_str().to_string()),
            created_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub async fn create_score<C: ConnectionTrait>(
        db: &C,
        fixture: &ScoreFixture,
        assessment_id: i32,
        dimension_id: i32,
    ) -> Result<ScoreModel, sea_orm::DbErr> {
        ScoreActiveModel {
            id: NotSet,
            assessment_id: Set(assessment_id),
            dimension_id: Set(dimension_id),
            level: Set(fixture.level),
            quantitative: Set(fixture.quantitative),
            notes: Set(fixture.notes.clone()),
            perception: Set(fixture.perception),
            audit_trail: Set(fixture.audit_trail.clone()),
        }
        .insert(db)
        .await
    }

    pub async fn create_evidence<C: ConnectionTrait>(
        db: &C,
        fixture: &EvidenceFixture,
        assessment_id: i32,
        dimension_id: i32,
        uploaded_by_id: i32,
    ) -> Result<EvidenceModel, sea_orm::DbErr> {
        EvidenceActiveModel {
            id: NotSet,
            assessment_id: Set(assessment_id),
            dimension_id: Set(dimension_id),
            file_url: Set(fixture.file_url.clone()),
            file_type: Set(fixture.file_type.clone()),
            uploaded_by_id: Set(uploaded_by_id),
            notes: Set(fixture.notes.clone()),
        }
        .insert(db)
        .await
    }
}
