use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneticProfileKind {
    CopyNumber,
    Mutation,
}

impl GeneticProfileKind {
    pub const ALL: [GeneticProfileKind; 2] =
        [GeneticProfileKind::CopyNumber, GeneticProfileKind::Mutation];

    pub fn as_str(self) -> &'static str {
        match self {
            GeneticProfileKind::CopyNumber => "copy-number",
            GeneticProfileKind::Mutation => "mutation",
        }
    }
}

impl fmt::Display for GeneticProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile identifiers of one study, one per profile kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyProfiles {
    pub case_set_id: String,
    pub copy_number_profile_id: String,
    pub mutation_profile_id: String,
}

impl StudyProfiles {
    pub fn gbm_tcga() -> Self {
        Self {
            case_set_id: "gbm_tcga_cnaseq".to_string(),
            copy_number_profile_id: "gbm_tcga_gistic".to_string(),
            mutation_profile_id: "gbm_tcga_mutations".to_string(),
        }
    }

    pub fn profile_id(&self, kind: GeneticProfileKind) -> &str {
        match kind {
            GeneticProfileKind::CopyNumber => &self.copy_number_profile_id,
            GeneticProfileKind::Mutation => &self.mutation_profile_id,
        }
    }
}

impl Default for StudyProfiles {
    fn default() -> Self {
        Self::gbm_tcga()
    }
}
