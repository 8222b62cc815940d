use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::profile::GeneticProfileKind;

/// Header column holding the gene's display symbol; every row is keyed by it.
pub const COMMON_FIELD: &str = "COMMON";
pub const GENE_ID_FIELD: &str = "GENE_ID";

pub const METADATA_FIELDS: [&str; 2] = [COMMON_FIELD, GENE_ID_FIELD];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneMetadata {
    pub common_name: Option<String>,
    pub gene_id: Option<String>,
}

impl GeneMetadata {
    /// Later profiles overwrite fields already present.
    pub fn merge_fields(&mut self, fields: &BTreeMap<String, String>) {
        if let Some(common) = fields.get(COMMON_FIELD) {
            self.common_name = Some(common.clone());
        }
        if let Some(gene_id) = fields.get(GENE_ID_FIELD) {
            self.gene_id = Some(gene_id.clone());
        }
    }
}

/// Gene symbol -> metadata.
pub type GeneMetadataTable = BTreeMap<String, GeneMetadata>;

/// Raw cell values of one case/gene pair, one per profile kind that reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileValues {
    values: BTreeMap<GeneticProfileKind, String>,
}

impl ProfileValues {
    pub fn get(&self, kind: GeneticProfileKind) -> Option<&str> {
        self.values.get(&kind).map(String::as_str)
    }

    pub fn set(&mut self, kind: GeneticProfileKind, value: impl Into<String>) {
        self.values.insert(kind, value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseRecord {
    genes: BTreeMap<String, ProfileValues>,
}

impl CaseRecord {
    pub fn gene(&self, gene: &str) -> Option<&ProfileValues> {
        self.genes.get(gene)
    }

    fn gene_mut(&mut self, gene: &str) -> &mut ProfileValues {
        self.genes.entry(gene.to_string()).or_default()
    }
}

/// case id -> gene symbol -> profile kind -> raw value.
///
/// Sparse: a pair reported by one profile kind need not exist under the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseMatrix {
    cases: BTreeMap<String, CaseRecord>,
}

impl CaseMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_cases(&self) -> usize {
        self.cases.len()
    }

    #[cfg(test)]
    pub fn case(&self, case_id: &str) -> Option<&CaseRecord> {
        self.cases.get(case_id)
    }

    pub fn cases(&self) -> impl Iterator<Item = (&str, &CaseRecord)> {
        self.cases.iter().map(|(c, r)| (c.as_str(), r))
    }

    #[cfg(test)]
    pub fn value(&self, case_id: &str, gene: &str, kind: GeneticProfileKind) -> Option<&str> {
        self.cases.get(case_id)?.gene(gene)?.get(kind)
    }

    pub fn set_value(
        &mut self,
        case_id: &str,
        gene: &str,
        kind: GeneticProfileKind,
        value: impl Into<String>,
    ) {
        self.cases
            .entry(case_id.to_string())
            .or_default()
            .gene_mut(gene)
            .set(kind, value);
    }
}
