//! Static reference data and sample fixtures, keyed by natural names.
//!
//! Records refer to each other by name (sector name, category name, user
//! email, assessment title); ids only exist once the loader has created them.

mod builtin;
mod ladders;

pub use builtin::builtin;

use crate::storage::entity::{AssessmentStatus, UserRole};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub categories: Vec<CategoryDef>,
    pub sectors: Vec<SectorDef>,
    pub companies: Vec<CompanyFixture>,
    pub users: Vec<UserFixture>,
    pub dimensions: Vec<DimensionDef>,
    pub descriptors: Vec<DescriptorGroup>,
    pub assessments: Vec<AssessmentFixture>,
    pub scores: Vec<ScoreFixture>,
    pub evidence: Vec<EvidenceFixture>,
    pub soft_deletes: Vec<SoftDeleteTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorDef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyFixture {
    pub name: String,
    pub sector: String,
    #[serde(default)]
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFixture {
    pub email: String,
    pub name: String,
    /// Already hashed; stored verbatim.
    pub password: String,
    pub role: UserRole,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
}

/// One maturity ladder: `levels[0]` is level 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorGroup {
    pub dimension: String,
    pub sector: String,
    pub levels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentFixture {
    pub title: String,
    pub company: String,
    pub department: String,
    /// Email of the assessing expert.
    pub expert: String,
    pub status: AssessmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFixture {
    pub assessment: String,
    pub dimension: String,
    pub level: i32,
    #[serde(default)]
    pub quantitative: Option<f64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub perception: bool,
    #[serde(default)]
    pub audit_trail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceFixture {
    pub assessment: String,
    pub dimension: String,
    pub file_url: String,
    pub file_type: String,
    /// Email of the uploader.
    pub uploaded_by: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoftDeleteKind {
    Company,
    User,
    Dimension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftDeleteTarget {
    pub kind: SoftDeleteKind,
    /// Company name, user email or dimension name.
    pub key: String,
}

impl Catalog {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("catalog is not valid JSON")
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }
}
