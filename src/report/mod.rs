pub mod json;
pub mod text;

use clap::ValueEnum;
use serde::Serialize;

use crate::model::summary::{GeneSummary, SummaryTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Verbose,
    Concise,
}

impl DisplayMode {
    /// A single-gene query gets the full breakdown.
    pub fn for_gene_count(n_genes: usize) -> Self {
        if n_genes > 1 {
            DisplayMode::Concise
        } else {
            DisplayMode::Verbose
        }
    }
}

/// Whole-number percentage of a 0..=1 rate.
pub fn format_percent(rate: f64) -> String {
    format!("{:.0}", rate * 100.0)
}

/// Queried genes first, in query order (symbols compared case-insensitively),
/// then any remaining genes by symbol.
pub fn ordered_summaries<'a>(table: &'a SummaryTable, query: &[String]) -> Vec<&'a GeneSummary> {
    let mut out: Vec<&GeneSummary> = Vec::with_capacity(table.len());
    for gene in query {
        let found = table
            .get(gene)
            .or_else(|| {
                table
                    .iter()
                    .find(|(symbol, _)| symbol.eq_ignore_ascii_case(gene))
                    .map(|(_, s)| s)
            });
        match found {
            Some(summary) if !out.iter().any(|s| s.gene == summary.gene) => out.push(summary),
            Some(_) => {}
            None => tracing::warn!(gene = gene.as_str(), "queried gene missing from profile data"),
        }
    }
    for summary in table.values() {
        if !out.iter().any(|s| s.gene == summary.gene) {
            out.push(summary);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
