use std::collections::{BTreeMap, BTreeSet};

use crate::error::{AlterationError, Result};
use crate::model::matrix::{COMMON_FIELD, METADATA_FIELDS};

const COMMENT_MARKER: char = '#';

/// Which header columns describe the gene rather than a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSchema {
    pub key_column: String,
    pub metadata_fields: BTreeSet<String>,
}

impl ProfileSchema {
    pub fn new<I, S>(key_column: &str, metadata_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key_column: key_column.to_string(),
            metadata_fields: metadata_fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_metadata(&self, column: &str) -> bool {
        column == self.key_column || self.metadata_fields.contains(column)
    }
}

impl Default for ProfileSchema {
    fn default() -> Self {
        Self::new(COMMON_FIELD, METADATA_FIELDS)
    }
}

/// One parsed profile payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedProfile {
    /// gene -> metadata field -> value
    pub gene_metadata: BTreeMap<String, BTreeMap<String, String>>,
    /// case -> gene -> raw value
    pub case_values: BTreeMap<String, BTreeMap<String, String>>,
}

impl ParsedProfile {
    pub fn n_genes(&self) -> usize {
        self.gene_metadata.len()
    }

    pub fn n_cases(&self) -> usize {
        self.case_values.len()
    }
}

pub fn parse_profile(raw: &str, schema: &ProfileSchema) -> Result<ParsedProfile> {
    let mut lines = raw.lines().enumerate();
    let mut header: Option<(usize, Vec<String>)> = None;

    for (idx, line) in lines.by_ref() {
        let line = line.trim_end_matches('\r');
        if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
            continue;
        }
        header = Some((idx + 1, parse_header(line, idx + 1)?));
        break;
    }

    let Some((header_line, columns)) = header else {
        return Err(AlterationError::MalformedProfileData(
            "no header row found".to_string(),
        ));
    };
    let key_idx = columns
        .iter()
        .position(|c| *c == schema.key_column)
        .ok_or_else(|| {
            AlterationError::MalformedProfileData(format!(
                "header (line {}) has no {} column",
                header_line, schema.key_column
            ))
        })?;

    let mut parsed = ParsedProfile::default();
    let mut n_rows = 0usize;

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split('\t').collect();
        if cells.len() != columns.len() {
            return Err(AlterationError::MalformedProfileData(format!(
                "line {} has {} columns, header has {}",
                line_no,
                cells.len(),
                columns.len()
            )));
        }
        let gene = cells[key_idx].trim();
        if gene.is_empty() {
            return Err(AlterationError::MalformedProfileData(format!(
                "line {} has an empty {} cell",
                line_no, schema.key_column
            )));
        }

        let meta = parsed.gene_metadata.entry(gene.to_string()).or_default();
        for (column, cell) in columns.iter().zip(cells.iter()) {
            if *column == schema.key_column {
                meta.insert(column.clone(), gene.to_string());
            } else if schema.is_metadata(column) {
                meta.insert(column.clone(), cell.to_string());
            } else {
                parsed
                    .case_values
                    .entry(column.clone())
                    .or_default()
                    .insert(gene.to_string(), cell.to_string());
            }
        }
        n_rows += 1;
    }

    tracing::debug!(
        rows = n_rows,
        genes = parsed.n_genes(),
        cases = parsed.n_cases(),
        "parsed profile"
    );

    Ok(parsed)
}

fn parse_header(line: &str, line_no: usize) -> Result<Vec<String>> {
    let columns: Vec<String> = line.split('\t').map(|c| c.trim().to_string()).collect();
    let mut seen = BTreeSet::new();
    for column in &columns {
        if column.is_empty() {
            return Err(AlterationError::MalformedProfileData(format!(
                "header (line {}) has an empty column name",
                line_no
            )));
        }
        if !seen.insert(column.as_str()) {
            return Err(AlterationError::MalformedProfileData(format!(
                "header (line {}) repeats column {}",
                line_no, column
            )));
        }
    }
    Ok(columns)
}

/// Writes a profile back out as tab-delimited text: the key column, the
/// metadata columns any gene carries, then case columns in sorted order.
pub fn render_profile(parsed: &ParsedProfile, schema: &ProfileSchema) -> String {
    let mut meta_columns = vec![schema.key_column.clone()];
    for field in &schema.metadata_fields {
        let used = parsed.gene_metadata.values().any(|m| m.contains_key(field));
        if *field != schema.key_column && used {
            meta_columns.push(field.clone());
        }
    }
    let case_ids: Vec<&String> = parsed.case_values.keys().collect();

    let mut genes: BTreeSet<&str> = parsed.gene_metadata.keys().map(String::as_str).collect();
    for values in parsed.case_values.values() {
        genes.extend(values.keys().map(String::as_str));
    }

    let mut out = String::new();
    let header: Vec<&str> = meta_columns
        .iter()
        .map(String::as_str)
        .chain(case_ids.iter().map(|c| c.as_str()))
        .collect();
    out.push_str(&header.join("\t"));
    out.push('\n');

    for gene in genes {
        let meta = parsed.gene_metadata.get(gene);
        let mut row: Vec<&str> = Vec::with_capacity(header.len());
        for column in &meta_columns {
            if *column == schema.key_column {
                row.push(gene);
            } else {
                row.push(
                    meta.and_then(|m| m.get(column))
                        .map(String::as_str)
                        .unwrap_or(""),
                );
            }
        }
        for case_id in &case_ids {
            row.push(
                parsed
                    .case_values
                    .get(*case_id)
                    .and_then(|v| v.get(gene))
                    .map(String::as_str)
                    .unwrap_or(""),
            );
        }
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/profile.rs"]
mod tests;
