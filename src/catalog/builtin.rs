use super::ladders::ladders;
use super::{
    AssessmentFixture, Catalog, CategoryDef, CompanyFixture, DimensionDef, EvidenceFixture,
    ScoreFixture, SectorDef, SoftDeleteKind, SoftDeleteTarget, UserFixture,
};
use crate::storage::entity::{AssessmentStatus, UserRole};

// bcrypt("password123")，仅用于本地开发
const SAMPLE_PASSWORD_HASH: &str = "$2b$10$CwTycUXWue0Thq9StjUM0uJ8.6kFqG5Cz5Q5h1bqzF1Yl3Pq1u9yW";

pub fn builtin() -> Catalog {
    Catalog {
        categories: categories(),
        sectors: ["Healthcare", "Logistics", "Manufacturing"]
            .into_iter()
            .map(|name| SectorDef {
                name: name.to_string(),
            })
            .collect(),
        companies: companies(),
        users: users(),
        dimensions: dimensions(),
        descriptors: ladders(),
        assessments: assessments(),
        scores: scores(),
        evidence: evidence(),
        soft_deletes: vec![
            SoftDeleteTarget {
                kind: SoftDeleteKind::Company,
                key: "Legacy Fabrication Co".to_string(),
            },
            SoftDeleteTarget {
                kind: SoftDeleteKind::User,
                key: "former.expert@leanassess.test".to_string(),
            },
            SoftDeleteTarget {
                kind: SoftDeleteKind::Dimension,
                key: "Suggestion Box Program".to_string(),
            },
        ],
    }
}

fn categories() -> Vec<CategoryDef> {
    [
        (
            "Leadership",
            "How management sets direction, sponsors improvement and models Lean behaviour.",
        ),
        (
            "Process Excellence",
            "Stability, flow and standardisation of the core operational processes.",
        ),
        (
            "People & Culture",
            "Engagement, capability building and problem-solving at every level.",
        ),
        (
            "Continuous Improvement",
            "Mechanisms that surface, prioritise and sustain improvements.",
        ),
    ]
    .into_iter()
    .map(|(name, description)| CategoryDef {
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn dimensions() -> Vec<DimensionDef> {
    let rows: &[(&str, &str, &str)] = &[
        (
            "Leadership",
            "Leadership Commitment",
            "Visible, sustained engagement of leaders in the Lean transformation.",
        ),
        (
            "Leadership",
            "Strategy Deployment",
            "Cascading of breakthrough objectives into team-level targets (Hoshin Kanri).",
        ),
        (
            "Leadership",
            "Gemba Presence",
            "Leaders go to where the work happens to observe and coach.",
        ),
        (
            "Process Excellence",
            "Standard Work",
            "Documented, current best method for each repetitive task.",
        ),
        (
            "Process Excellence",
            "Value Stream Mapping",
            "End-to-end visualisation of material and information flow.",
        ),
        (
            "Process Excellence",
            "5S Workplace Organization",
            "Sort, set in order, shine, standardise and sustain the workplace.",
        ),
        (
            "People & Culture",
            "Team Engagement",
            "Frontline ownership of performance and improvement.",
        ),
        (
            "People & Culture",
            "Skills Development",
            "Structured training matrices and on-the-job coaching.",
        ),
        (
            "Continuous Improvement",
            "Kaizen Events",
            "Focused, time-boxed improvement workshops with measurable outcomes.",
        ),
        (
            "Continuous Improvement",
            "Root Cause Analysis",
            "Systematic problem solving (5 Whys, A3, Ishikawa).",
        ),
        (
            "Continuous Improvement",
            "Suggestion Box Program",
            "Retired idea-collection channel kept for historical assessments.",
        ),
    ];
    rows.iter()
        .map(|(category, name, description)| DimensionDef {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        })
        .collect()
}

fn companies() -> Vec<CompanyFixture> {
    vec![
        CompanyFixture {
            name: "Acme Health Partners".to_string(),
            sector: "Healthcare".to_string(),
            departments: vec![
                "Operations".to_string(),
                "Quality".to_string(),
                "Emergency Care".to_string(),
            ],
        },
        CompanyFixture {
            name: "Northwind Logistics".to_string(),
            sector: "Logistics".to_string(),
            departments: vec!["Warehouse".to_string(), "Fleet".to_string()],
        },
        CompanyFixture {
            name: "Legacy Fabrication Co".to_string(),
            sector: "Manufacturing".to_string(),
            departments: vec!["Assembly".to_string()],
        },
    ]
}

fn users() -> Vec<UserFixture> {
    let rows = [
        (
            "admin@leanassess.test",
            "Alice Admin",
            UserRole::Admin,
            "Acme Health Partners",
        ),
        (
            "expert@leanassess.test",
            "Eduardo Expert",
            UserRole::Expert,
            "Acme Health Partners",
        ),
        (
            "viewer@leanassess.test",
            "Vera Viewer",
            UserRole::Viewer,
            "Northwind Logistics",
        ),
        (
            "former.expert@leanassess.test",
            "Felix Former",
            UserRole::Expert,
            "Northwind Logistics",
        ),
    ];
    rows.into_iter()
        .map(|(email, name, role, company)| UserFixture {
            email: email.to_string(),
            name: name.to_string(),
            password: SAMPLE_PASSWORD_HASH.to_string(),
            role,
            company: company.to_string(),
        })
        .collect()
}

fn assessments() -> Vec<AssessmentFixture> {
    vec![
        AssessmentFixture {
            title: "Acme Operations Baseline".to_string(),
            company: "Acme Health Partners".to_string(),
            department: "Operations".to_string(),
            expert: "expert@leanassess.test".to_string(),
            status: AssessmentStatus::Submitted,
        },
        AssessmentFixture {
            title: "Northwind Warehouse Review".to_string(),
            company: "Northwind Logistics".to_string(),
            department: "Warehouse".to_string(),
            expert: "expert@leanassess.test".to_string(),
            status: AssessmentStatus::Draft,
        },
    ]
}

fn scores() -> Vec<ScoreFixture> {
    let rows: &[(&str, &str, i32, Option<f64>, &str, bool)] = &[
        (
            "Acme Operations Baseline",
            "Leadership Commitment",
            3,
            Some(62.5),
            "Weekly gemba walks established, not yet in all shifts.",
            false,
        ),
        (
            "Acme Operations Baseline",
            "Standard Work",
            2,
            None,
            "SOPs exist but are outdated in two units.",
            true,
        ),
        (
            "Acme Operations Baseline",
            "Root Cause Analysis",
            4,
            Some(80.0),
            "A3 reports used for all sentinel events.",
            false,
        ),
        (
            "Northwind Warehouse Review",
            "Value Stream Mapping",
            1,
            None,
            "No current-state map for inbound flow.",
            true,
        ),
        (
            "Northwind Warehouse Review",
            "5S Workplace Organization",
            2,
            Some(41.0),
            "Red-tag campaign completed in zone A only.",
            false,
        ),
    ];
    rows.iter()
        .map(
            |(assessment, dimension, level, quantitative, notes, perception)| ScoreFixture {
                assessment: assessment.to_string(),
                dimension: dimension.to_string(),
                level: *level,
                quantitative: *quantitative,
                notes: notes.to_string(),
                perception: *perception,
                audit_trail: format!("seeded: initial level {}", level),
            },
        )
        .collect()
}

fn evidence() -> Vec<EvidenceFixture> {
    vec![
        EvidenceFixture {
            assessment: "Acme Operations Baseline".to_string(),
            dimension: "Root Cause Analysis".to_string(),
            file_url: "https://files.leanassess.test/acme/a3-sentinel-2024.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            uploaded_by: "expert@leanassess.test".to_string(),
            notes: "Sample A3 report".to_string(),
        },
        EvidenceFixture {
            assessment: "Northwind Warehouse Review".to_string(),
            dimension: "5S Workplace Organization".to_string(),
            file_url: "https://files.leanassess.test/northwind/zone-a-5s.jpg".to_string(),
            file_type: "image/jpeg".to_string(),
            uploaded_by: "viewer@leanassess.test".to_string(),
            notes: "Zone A after red-tag campaign".to_string(),
        },
    ]
}
