use serde::Serialize;

use crate::error::Result;
use crate::model::summary::{CountingPolicy, GeneSummary};

#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub tool: &'a str,
    pub version: &'a str,
    pub source: &'a str,
    pub counting_policy: CountingPolicy,
    pub total_case_count: usize,
    pub genes: &'a [&'a GeneSummary],
}

pub fn render_summary_json(report: &SummaryReport<'_>) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
