use super::*;
use crate::report::text::render_summary_text;

fn summary(gene: &str, mutation: f64, copy_number: f64, combined: f64) -> GeneSummary {
    GeneSummary {
        gene: gene.to_string(),
        gene_id: None,
        total_case_count: 100,
        mutated_case_count: (mutation * 100.0) as usize,
        copy_no_alteration_case_count: (copy_number * 100.0) as usize,
        multiple_alterations_case_count: 0,
        mutation_rate: mutation,
        copy_number_rate: copy_number,
        combined_rate: combined,
    }
}

fn table(entries: &[GeneSummary]) -> SummaryTable {
    entries.iter().map(|s| (s.gene.clone(), s.clone())).collect()
}

#[test]
fn test_display_mode_follows_gene_count() {
    assert_eq!(DisplayMode::for_gene_count(1), DisplayMode::Verbose);
    assert_eq!(DisplayMode::for_gene_count(2), DisplayMode::Concise);
    assert_eq!(DisplayMode::for_gene_count(3), DisplayMode::Concise);
}

#[test]
fn test_format_percent_whole_numbers() {
    assert_eq!(format_percent(0.0), "0");
    assert_eq!(format_percent(0.5), "50");
    assert_eq!(format_percent(0.2913), "29");
    assert_eq!(format_percent(1.0), "100");
}

#[test]
fn test_ordered_summaries_query_order_first() {
    let t = table(&[
        summary("EGFR", 0.1, 0.2, 0.3),
        summary("PTEN", 0.1, 0.1, 0.2),
        summary("TP53", 0.3, 0.0, 0.3),
    ]);
    let query = vec!["tp53".to_string(), "EGFR".to_string(), "MDM2".to_string()];
    let ordered: Vec<&str> = ordered_summaries(&t, &query)
        .iter()
        .map(|s| s.gene.as_str())
        .collect();
    assert_eq!(ordered, vec!["TP53", "EGFR", "PTEN"]);
}

#[test]
fn test_verbose_text_lines() {
    let s = summary("TP53", 0.29, 0.02, 0.31);
    let text = render_summary_text(&[&s], DisplayMode::Verbose);
    assert_eq!(
        text,
        "TP53 is mutated in 29% of all cases.\n\
TP53 is copy number altered in 2% of all cases.\n\
Total % of cases where TP53 is altered by either mutation or copy number alteration: 31% of all cases.\n"
    );
}

#[test]
fn test_concise_text_only_total() {
    let a = summary("TP53", 0.29, 0.02, 0.31);
    let b = summary("MDM2", 0.0, 0.08, 0.08);
    let text = render_summary_text(&[&a, &b], DisplayMode::Concise);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Total % of cases where TP53"));
    assert!(lines[1].ends_with("8% of all cases."));
}
