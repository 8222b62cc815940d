use std::collections::BTreeMap;

use serde::Serialize;

/// How simultaneous copy-number and mutation hits in one case are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingPolicy {
    /// Copy-number first, mutation only otherwise; overlap is never counted.
    #[default]
    Legacy,
    /// Both predicates always evaluated; overlap counted and subtracted from the union.
    Overlap,
}

impl CountingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CountingPolicy::Legacy => "legacy",
            CountingPolicy::Overlap => "overlap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneSummary {
    pub gene: String,
    pub gene_id: Option<String>,
    pub total_case_count: usize,
    pub mutated_case_count: usize,
    pub copy_no_alteration_case_count: usize,
    pub multiple_alterations_case_count: usize,
    pub mutation_rate: f64,
    pub copy_number_rate: f64,
    pub combined_rate: f64,
}

/// Gene symbol -> summary.
pub type SummaryTable = BTreeMap<String, GeneSummary>;
