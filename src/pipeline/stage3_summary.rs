use crate::error::{AlterationError, Result};
use crate::model::matrix::{CaseMatrix, GeneMetadataTable};
use crate::model::summary::{CountingPolicy, GeneSummary, SummaryTable};
use crate::pipeline::stage2_classify::{Alteration, classify};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GeneCounts {
    mutated: usize,
    copy_number: usize,
    multiple: usize,
}

impl GeneCounts {
    fn record(&mut self, alteration: Alteration, policy: CountingPolicy) {
        match policy {
            CountingPolicy::Legacy => {
                // The overlap arm sits behind the copy-number arm and never fires.
                if alteration.copy_number {
                    self.copy_number += 1;
                } else if alteration.mutated {
                    self.mutated += 1;
                }
            }
            CountingPolicy::Overlap => {
                if alteration.copy_number {
                    self.copy_number += 1;
                }
                if alteration.mutated {
                    self.mutated += 1;
                }
                if alteration.both() {
                    self.multiple += 1;
                }
            }
        }
    }
}

/// One summary per gene in `gene_metadata`, against every case in the matrix.
pub fn summarize(
    gene_metadata: &GeneMetadataTable,
    case_matrix: &CaseMatrix,
    policy: CountingPolicy,
) -> Result<SummaryTable> {
    let total = case_matrix.n_cases();
    if total == 0 {
        return Err(AlterationError::NoCases);
    }

    let mut table = SummaryTable::new();
    for (gene, meta) in gene_metadata {
        let mut counts = GeneCounts::default();
        for (case_id, record) in case_matrix.cases() {
            let alteration = classify(record.gene(gene)).inspect_err(|e| {
                tracing::error!(case = case_id, gene = gene.as_str(), "{e}");
            })?;
            counts.record(alteration, policy);
        }
        tracing::debug!(
            gene = gene.as_str(),
            mutated = counts.mutated,
            copy_number = counts.copy_number,
            multiple = counts.multiple,
            "gene counts"
        );
        table.insert(
            gene.clone(),
            build_summary(gene, meta.gene_id.clone(), total, counts),
        );
    }
    Ok(table)
}

fn build_summary(
    gene: &str,
    gene_id: Option<String>,
    total: usize,
    counts: GeneCounts,
) -> GeneSummary {
    let denom = total as f64;
    GeneSummary {
        gene: gene.to_string(),
        gene_id,
        total_case_count: total,
        mutated_case_count: counts.mutated,
        copy_no_alteration_case_count: counts.copy_number,
        multiple_alterations_case_count: counts.multiple,
        mutation_rate: counts.mutated as f64 / denom,
        copy_number_rate: counts.copy_number as f64 / denom,
        combined_rate: (counts.copy_number + counts.mutated - counts.multiple) as f64 / denom,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_summary.rs"]
mod tests;
