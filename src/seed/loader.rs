use crate::catalog::{
    AssessmentFixture, Catalog, CategoryDef, CompanyFixture, DescriptorGroup, DimensionDef,
    EvidenceFixture, ScoreFixture, SectorDef, SoftDeleteTarget, UserFixture,
};
use crate::config::DEFAULT_LADDER_LEVELS;
use crate::seed::error::LoadError;
use crate::seed::phase::Phase;
use crate::seed::report::{SeedReport, SkippedRecord};
use crate::seed::resolver::SeedContext;
use crate::seed::soft_delete::apply_target;
use crate::storage::entity::EntityKind;
use crate::storage::repository::assessment_repo::AssessmentRefs;
use crate::storage::repository::{
    AssessmentRepository, DescriptorRepository, OrganizationRepository, ReferenceRepository,
};
use chrono::Utc;
use log::{debug, info, warn};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Longest maturity ladder accepted (L). Levels run 1..=L.
    pub ladder_levels: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            ladder_levels: DEFAULT_LADDER_LEVELS,
        }
    }
}

#[derive(Debug)]
pub struct SeedRun {
    pub context: SeedContext,
    pub report: SeedReport,
}

/// Runs `Phase::ALL` against one connection, strictly in order.
pub struct Loader<'a> {
    db: &'a DatabaseConnection,
    options: LoadOptions,
}

impl<'a> Loader<'a> {
    pub fn new(db: &'a DatabaseConnection, options: LoadOptions) -> Self {
        Self { db, options }
    }

    pub async fn load_with_timeout(
        &self,
        catalog: &Catalog,
        timeout: Duration,
    ) -> Result<SeedRun, LoadError> {
        tokio::time::timeout(timeout, self.load(catalog))
            .await
            .map_err(|_| LoadError::Timeout(timeout))?
    }

    pub async fn load(&self, catalog: &Catalog) -> Result<SeedRun, LoadError> {
        let mut ctx = SeedContext::new();
        let mut report = SeedReport::default();

        let mut done: HashSet<Phase> = HashSet::new();
        for phase in Phase::ALL {
            debug_assert!(
                phase.dependencies().iter().all(|dep| done.contains(dep)),
                "{} scheduled before its dependencies",
                phase
            );
            let skipped_before = report.skipped.len();
            let created = self.run_phase(phase, catalog, &mut ctx, &mut report).await?;
            info!(
                "{}: {} {}, {} skipped",
                phase,
                created,
                phase.outcome_verb(),
                report.skipped.len() - skipped_before
            );
            done.insert(phase);
        }

        Ok(SeedRun {
            context: ctx,
            report,
        })
    }

    async fn run_phase(
        &self,
        phase: Phase,
        catalog: &Catalog,
        ctx: &mut SeedContext,
        report: &mut SeedReport,
    ) -> Result<usize, LoadError> {
        let now = Utc::now().timestamp();
        let mut created = 0usize;

        match phase {
            Phase::Categories => {
                for def in &catalog.categories {
                    match self.load_category(ctx, def, now).await {
                        Ok(()) => created += 1,
                        Err(e) => skip_or_abort(report, phase, &def.name, e)?,
                    }
                }
                report.record_created(EntityKind::Category, created);
            }
            Phase::Sectors => {
                for def in &catalog.sectors {
                    match self.load_sector(ctx, def, now).await {
                        Ok(()) => created += 1,
                        Err(e) => skip_or_abort(report, phase, &def.name, e)?,
                    }
                }
                report.record_created(EntityKind::Sector, created);
            }
            Phase::Companies => {
                for fixture in &catalog.companies {
                    match self.load_company(ctx, fixture, now).await {
                        Ok(departments) => {
                            created += 1;
                            report.record_created(EntityKind::Department, departments);
                        }
                        Err(e) => skip_or_abort(report, phase, &fixture.name, e)?,
                    }
                }
                report.record_created(EntityKind::Company, created);
            }
            Phase::Users => {
                for fixture in &catalog.users {
                    match self.load_user(ctx, fixture, now).await {
                        Ok(()) => created += 1,
                        Err(e) => skip_or_abort(report, phase, &fixture.email, e)?,
                    }
                }
                report.record_created(EntityKind::User, created);
            }
            Phase::Dimensions => {
                for def in &catalog.dimensions {
                    match self.load_dimension(ctx, def, now).await {
                        Ok(()) => created += 1,
                        Err(e) => skip_or_abort(report, phase, &def.name, e)?,
                    }
                }
                report.record_created(EntityKind::Dimension, created);
            }
            Phase::MaturityDescriptors => {
                let mut loaded: HashSet<(i32, i32)> = HashSet::new();
                for group in &catalog.descriptors {
                    let key = format!("{}/{}", group.dimension, group.sector);
                    match self.load_ladder(ctx, group, &mut loaded).await {
                        Ok(rows) => created += rows,
                        Err(e) => skip_or_abort(report, phase, &key, e)?,
                    }
                }
                report.record_created(EntityKind::MaturityDescriptor, created);
            }
            Phase::Assessments => {
                for fixture in &catalog.assessments {
                    match self.load_assessment(ctx, fixture, now).await {
                        Ok(()) => created += 1,
                        Err(e) => skip_or_abort(report, phase, &fixture.title, e)?,
                    }
                }
                report.record_created(EntityKind::Assessment, created);
            }
            Phase::Scores => {
                for fixture in &catalog.scores {
                    let key = format!("{}/{}", fixture.assessment, fixture.dimension);
                    match self.load_score(ctx, fixture, &key).await {
                        Ok(()) => created += 1,
                        Err(e) => skip_or_abort(report, phase, &key, e)?,
                    }
                }
                report.record_created(EntityKind::Score, created);
            }
            Phase::Evidence => {
                for fixture in &catalog.evidence {
                    let key = format!("{}/{}", fixture.assessment, fixture.file_url);
                    match self.load_evidence(ctx, fixture).await {
                        Ok(()) => created += 1,
                        Err(e) => skip_or_abort(report, phase, &key, e)?,
                    }
                }
                report.record_created(EntityKind::Evidence, created);
            }
            Phase::SoftDeletes => {
                for target in &catalog.soft_deletes {
                    match self.load_soft_delete(ctx, target, now).await {
                        Ok(()) => created += 1,
                        Err(e) => skip_or_abort(report, phase, &target.key, e)?,
                    }
                }
                report.soft_deleted += created;
            }
        }

        Ok(created)
    }

    async fn load_category(
        &self,
        ctx: &mut SeedContext,
        def: &CategoryDef,
        now: i64,
    ) -> Result<(), LoadError> {
        ctx.categories.ensure_vacant(&def.name)?;
        let model = ReferenceRepository::create_category(self.db, def, now)
            .await
            .map_err(LoadError::store(format!("category {}", def.name)))?;
        ctx.categories.register(def.name.clone(), model)?;
        Ok(())
    }

    async fn load_sector(
        &self,
        ctx: &mut SeedContext,
        def: &SectorDef,
        now: i64,
    ) -> Result<(), LoadError> {
        ctx.sectors.ensure_vacant(&def.name)?;
        let model = ReferenceRepository::create_sector(self.db, def, now)
            .await
            .map_err(LoadError::store(format!("sector {}", def.name)))?;
        ctx.sectors.register(def.name.clone(), model)?;
        Ok(())
    }

    /// Returns the number of departments created with the company.
    async fn load_company(
        &self,
        ctx: &mut SeedContext,
        fixture: &CompanyFixture,
        now: i64,
    ) -> Result<usize, LoadError> {
        ctx.companies.ensure_vacant(&fixture.name)?;
        let sector_id = ctx.sectors.resolve(&fixture.sector)?.id;

        let mut dept_keys = HashSet::new();
        for dept in &fixture.departments {
            let key = SeedContext::department_key(&fixture.name, dept);
            ctx.departments.ensure_vacant(&key)?;
            if !dept_keys.insert(key.clone()) {
                return Err(LoadError::DuplicateKey {
                    kind: EntityKind::Department,
                    key,
                });
            }
        }

        let (company, departments) = OrganizationRepository::create_company_with_departments(
            self.db,
            &fixture.name,
            sector_id,
            &fixture.departments,
            now,
        )
        .await
        .map_err(LoadError::store(format!("company {}", fixture.name)))?;

        let n = departments.len();
        for dept in departments {
            let key = SeedContext::department_key(&fixture.name, &dept.name);
            ctx.departments.register(key, dept)?;
        }
        ctx.companies.register(fixture.name.clone(), company)?;
        Ok(n)
    }

    async fn load_user(
        &self,
        ctx: &mut SeedContext,
        fixture: &UserFixture,
        now: i64,
    ) -> Result<(), LoadError> {
        ctx.users.ensure_vacant(&fixture.email)?;
        let company_id = ctx.companies.resolve(&fixture.company)?.id;
        let model = OrganizationRepository::create_user(self.db, fixture, company_id, now)
            .await
            .map_err(LoadError::store(format!("user {}", fixture.email)))?;
        ctx.users.register(fixture.email.clone(), model)?;
        Ok(())
    }

    async fn load_dimension(
        &self,
        ctx: &mut SeedContext,
        def: &DimensionDef,
        now: i64,
    ) -> Result<(), LoadError> {
        ctx.dimensions.ensure_vacant(&def.name)?;
        let category_id = ctx.categories.resolve(&def.category)?.id;
        let model = ReferenceRepository::create_dimension(self.db, def, category_id, now)
            .await
            .map_err(LoadError::store(format!("dimension {}", def.name)))?;
        ctx.dimensions.register(def.name.clone(), model)?;
        Ok(())
    }

    /// A second group for an already loaded (dimension, sector) pair is rejected;
    /// the first one stays.
    async fn load_ladder(
        &self,
        ctx: &SeedContext,
        group: &DescriptorGroup,
        loaded: &mut HashSet<(i32, i32)>,
    ) -> Result<usize, LoadError> {
        let max = self.options.ladder_levels;
        if group.levels.is_empty() || group.levels.len() > max {
            return Err(LoadError::InvalidLadder {
                dimension: group.dimension.clone(),
                sector: group.sector.clone(),
                levels: group.levels.len(),
                max,
            });
        }

        let dimension_id = ctx.dimensions.resolve(&group.dimension)?.id;
        let sector_id = ctx.sectors.resolve(&group.sector)?.id;
        if loaded.contains(&(dimension_id, sector_id)) {
            return Err(LoadError::DuplicateDescriptorGroup {
                dimension: group.dimension.clone(),
                sector: group.sector.clone(),
            });
        }

        let rows =
            DescriptorRepository::insert_ladder(self.db, dimension_id, sector_id, &group.levels)
                .await
                .map_err(LoadError::store(format!(
                    "maturity ladder {}/{}",
                    group.dimension, group.sector
                )))?;
        loaded.insert((dimension_id, sector_id));
        debug!(
            "ladder {}/{}: {} levels",
            group.dimension, group.sector, rows
        );
        Ok(rows)
    }

    async fn load_assessment(
        &self,
        ctx: &mut SeedContext,
        fixture: &AssessmentFixture,
        now: i64,
    ) -> Result<(), LoadError> {
        ctx.assessments.ensure_vacant(&fixture.title)?;
        let refs = AssessmentRefs {
            company_id: ctx.companies.resolve(&fixture.company)?.id,
            department_id: ctx
                .departments
                .resolve(&SeedContext::department_key(
                    &fixture.company,
                    &fixture.department,
                ))?
                .id,
            expert_id: ctx.users.resolve(&fixture.expert)?.id,
        };
        let model = AssessmentRepository::create_assessment(self.db, fixture, refs, now)
            .await
            .map_err(LoadError::store(format!("assessment {}", fixture.title)))?;
        ctx.assessments.register(fixture.title.clone(), model)?;
        Ok(())
    }

    async fn load_score(
        &self,
        ctx: &SeedContext,
        fixture: &ScoreFixture,
        key: &str,
    ) -> Result<(), LoadError> {
        let max = self.options.ladder_levels;
        if fixture.level < 1 || fixture.level as usize > max {
            return Err(LoadError::InvalidLevel {
                key: key.to_string(),
                level: fixture.level,
                max,
            });
        }
        let assessment_id = ctx.assessments.resolve(&fixture.assessment)?.id;
        let dimension_id = ctx.dimensions.resolve(&fixture.dimension)?.id;
        AssessmentRepository::create_score(self.db, fixture, assessment_id, dimension_id)
            .await
            .map_err(LoadError::store(format!("score {}", key)))?;
        Ok(())
    }

    async fn load_evidence(
        &self,
        ctx: &SeedContext,
        fixture: &EvidenceFixture,
    ) -> Result<(), LoadError> {
        let assessment_id = ctx.assessments.resolve(&fixture.assessment)?.id;
        let dimension_id = ctx.dimensions.resolve(&fixture.dimension)?.id;
        let uploaded_by_id = ctx.users.resolve(&fixture.uploaded_by)?.id;
        AssessmentRepository::create_evidence(
            self.db,
            fixture,
            assessment_id,
            dimension_id,
            uploaded_by_id,
        )
        .await
        .map_err(LoadError::store(format!("evidence {}", fixture.file_url)))?;
        Ok(())
    }

    async fn load_soft_delete(
        &self,
        ctx: &SeedContext,
        target: &SoftDeleteTarget,
        now: i64,
    ) -> Result<(), LoadError> {
        apply_target(self.db, ctx, target, now).await
    }
}

fn skip_or_abort(
    report: &mut SeedReport,
    phase: Phase,
    key: &str,
    err: LoadError,
) -> Result<(), LoadError> {
    if !err.is_skippable_in(phase) {
        return Err(err);
    }
    warn!("{}: skipping {}: {}", phase, key, err);
    report.skipped.push(SkippedRecord {
        phase,
        key: key.to_string(),
        reason: err.to_string(),
    });
    Ok(())
}
