use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::input::profile::{ParsedProfile, ProfileSchema, render_profile};
use crate::model::profile::{GeneticProfileKind, StudyProfiles};
use crate::model::summary::{CountingPolicy, GeneSummary, SummaryTable};
use crate::report::json::{SummaryReport, render_summary_json};
use crate::report::text::render_summary_text;
use crate::report::{DisplayMode, ordered_summaries};

pub const TEXT_REPORT_NAME: &str = "alterations.txt";
pub const JSON_REPORT_NAME: &str = "alterations.json";

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub summaries: &'a SummaryTable,
    pub query: &'a [String],
    pub mode: DisplayMode,
    pub policy: CountingPolicy,
    pub source: String,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone)]
pub struct Stage4Output {
    pub text: String,
    pub json: String,
}

pub fn run_stage4(input: &Stage4Input<'_>) -> Result<Stage4Output> {
    let ordered: Vec<&GeneSummary> = ordered_summaries(input.summaries, input.query);
    let total_case_count = ordered.first().map(|s| s.total_case_count).unwrap_or(0);

    let text = render_summary_text(&ordered, input.mode);
    let json = render_summary_json(&SummaryReport {
        tool: &input.tool_name,
        version: &input.tool_version,
        source: &input.source,
        counting_policy: input.policy,
        total_case_count,
        genes: &ordered,
    })?;

    Ok(Stage4Output { text, json })
}

pub fn write_reports(output: &Stage4Output, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let text_path = out_dir.join(TEXT_REPORT_NAME);
    let json_path = out_dir.join(JSON_REPORT_NAME);
    fs::write(&text_path, &output.text)?;
    fs::write(&json_path, &output.json)?;
    tracing::info!(
        text = %text_path.display(),
        json = %json_path.display(),
        "reports written"
    );
    Ok(vec![text_path, json_path])
}

/// Writes each merged profile as `<profile_id>.txt`, so `out_dir` can be
/// replayed later with `--input`.
pub fn write_profile_snapshots(
    profiles: &BTreeMap<GeneticProfileKind, ParsedProfile>,
    study: &StudyProfiles,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let schema = ProfileSchema::default();
    let mut written = Vec::with_capacity(profiles.len());
    for (kind, parsed) in profiles {
        let path = out_dir.join(format!("{}.txt", study.profile_id(*kind)));
        let mut text = format!("# {kind} profile snapshot written by kira-alterations\n");
        text.push_str(&render_profile(parsed, &schema));
        fs::write(&path, text)?;
        tracing::info!(profile = %kind, path = %path.display(), "profile snapshot written");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
