use std::collections::BTreeMap;

use crate::error::Result;
use crate::input::profile::{ParsedProfile, ProfileSchema, parse_profile};
use crate::input::source::ProfileSource;
use crate::model::matrix::{CaseMatrix, GeneMetadataTable};
use crate::model::profile::GeneticProfileKind;

/// Frozen result of stage 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage1Output {
    pub gene_metadata: GeneMetadataTable,
    pub case_matrix: CaseMatrix,
    pub profiles: BTreeMap<GeneticProfileKind, ParsedProfile>,
}

/// Accumulates profiles of every kind into one metadata table and case matrix.
///
/// Merging is keyed by (case, gene, kind), so profiles may be added in any order.
#[derive(Debug, Default)]
pub struct CaseMatrixBuilder {
    schema: ProfileSchema,
    gene_metadata: GeneMetadataTable,
    case_matrix: CaseMatrix,
    profiles: BTreeMap<GeneticProfileKind, ParsedProfile>,
}

impl CaseMatrixBuilder {
    pub fn new(schema: ProfileSchema) -> Self {
        Self {
            schema,
            gene_metadata: GeneMetadataTable::new(),
            case_matrix: CaseMatrix::new(),
            profiles: BTreeMap::new(),
        }
    }

    pub fn fetch_profile(
        &mut self,
        kind: GeneticProfileKind,
        genes: &[String],
        source: &dyn ProfileSource,
    ) -> Result<()> {
        let raw = source.fetch(kind, genes)?;
        self.add_profile_text(kind, &raw)
    }

    pub fn add_profile_text(&mut self, kind: GeneticProfileKind, raw: &str) -> Result<()> {
        let parsed = parse_profile(raw, &self.schema)?;
        self.merge(kind, parsed);
        Ok(())
    }

    pub fn merge(&mut self, kind: GeneticProfileKind, parsed: ParsedProfile) {
        tracing::info!(
            profile = %kind,
            genes = parsed.n_genes(),
            cases = parsed.n_cases(),
            "merging profile into case matrix"
        );
        for (gene, fields) in &parsed.gene_metadata {
            self.gene_metadata
                .entry(gene.clone())
                .or_default()
                .merge_fields(fields);
        }
        for (case_id, genes) in &parsed.case_values {
            for (gene, value) in genes {
                self.case_matrix.set_value(case_id, gene, kind, value.clone());
            }
        }
        self.profiles.insert(kind, parsed);
    }

    pub fn finish(self) -> Stage1Output {
        Stage1Output {
            gene_metadata: self.gene_metadata,
            case_matrix: self.case_matrix,
            profiles: self.profiles,
        }
    }
}

/// Fetches and merges every profile kind from `source`.
pub fn run_stage1(source: &dyn ProfileSource, genes: &[String]) -> Result<Stage1Output> {
    let mut builder = CaseMatrixBuilder::new(ProfileSchema::default());
    for kind in GeneticProfileKind::ALL {
        builder.fetch_profile(kind, genes, source)?;
    }
    let out = builder.finish();
    tracing::info!(
        genes = out.gene_metadata.len(),
        cases = out.case_matrix.n_cases(),
        "case matrix built"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_matrix.rs"]
mod tests;
