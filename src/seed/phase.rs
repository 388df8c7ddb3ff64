use std::fmt;

/// Load phases. `Phase::ALL` is the execution order; every phase comes after
/// the phases it depends on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Categories,
    Sectors,
    Companies,
    Users,
    Dimensions,
    MaturityDescriptors,
    Assessments,
    Scores,
    Evidence,
    SoftDeletes,
}

impl Phase {
    pub const ALL: [Phase; 10] = [
        Phase::Categories,
        Phase::Sectors,
        Phase::Companies,
        Phase::Users,
        Phase::Dimensions,
        Phase::MaturityDescriptors,
        Phase::Assessments,
        Phase::Scores,
        Phase::Evidence,
        Phase::SoftDeletes,
    ];

    pub fn dependencies(&self) -> &'static [Phase] {
        match self {
            Phase::Categories | Phase::Sectors => &[],
            Phase::Companies => &[Phase::Sectors],
            Phase::Users => &[Phase::Companies],
            Phase::Dimensions => &[Phase::Categories],
            Phase::MaturityDescriptors => &[Phase::Dimensions, Phase::Sectors],
            Phase::Assessments => &[Phase::Companies, Phase::Users],
            Phase::Scores | Phase::Evidence => {
                &[Phase::Assessments, Phase::Dimensions, Phase::Users]
            }
            Phase::SoftDeletes => &[Phase::Companies, Phase::Users, Phase::Dimensions],
        }
    }

    /// Many-row loops where one bad row must not stop the run.
    pub fn is_bulk(&self) -> bool {
        matches!(
            self,
            Phase::MaturityDescriptors | Phase::Assessments | Phase::Scores | Phase::Evidence
        )
    }

    /// Past participle for the per-phase log line.
    pub fn outcome_verb(&self) -> &'static str {
        match self {
            Phase::SoftDeletes => "marked",
            _ => "created",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Categories => "categories",
            Phase::Sectors => "sectors",
            Phase::Companies => "companies",
            Phase::Users => "users",
            Phase::Dimensions => "dimensions",
            Phase::MaturityDescriptors => "maturity descriptors",
            Phase::Assessments => "assessments",
            Phase::Scores => "scores",
            Phase::Evidence => "evidence",
            Phase::SoftDeletes => "soft deletes",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependencies_run_first() {
        for (pos, phase) in Phase::ALL.iter().enumerate() {
            for dep in phase.dependencies() {
                let dep_pos = Phase::ALL.iter().position(|p| p == dep).unwrap();
                assert!(dep_pos < pos, "{} must run before {}", dep, phase);
            }
        }
    }

    #[test]
    fn soft_delete_phase_reports_marked_rows() {
        assert_eq!(Phase::SoftDeletes.outcome_verb(), "marked");
        assert!(Phase::ALL[..9].iter().all(|p| p.outcome_verb() == "created"));
    }

    #[test]
    fn every_phase_listed_once() {
        let mut seen = std::collections::HashSet::new();
        assert!(Phase::ALL.iter().all(|p| seen.insert(*p)));
    }
}
