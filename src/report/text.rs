use crate::model::summary::GeneSummary;
use crate::report::{DisplayMode, format_percent};

pub fn render_summary_text(summaries: &[&GeneSummary], mode: DisplayMode) -> String {
    let mut out = String::new();
    for summary in summaries {
        let gene = summary.gene.as_str();
        if mode == DisplayMode::Verbose {
            out.push_str(&format!(
                "{} is mutated in {}% of all cases.\n",
                gene,
                format_percent(summary.mutation_rate)
            ));
            out.push_str(&format!(
                "{} is copy number altered in {}% of all cases.\n",
                gene,
                format_percent(summary.copy_number_rate)
            ));
        }
        out.push_str(&format!(
            "Total % of cases where {} is altered by either mutation or copy number alteration: {}% of all cases.\n",
            gene,
            format_percent(summary.combined_rate)
        ));
    }
    out
}
