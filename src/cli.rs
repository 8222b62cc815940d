use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::{AlterationError, Result};
use crate::input::source::DEFAULT_PORTAL_URL;
use crate::model::profile::StudyProfiles;
use crate::model::summary::CountingPolicy;
use crate::report::DisplayMode;

/// Summarize how often genes are mutated or copy-number altered across a
/// cBioPortal case set.
#[derive(Debug, Parser)]
#[command(name = "kira-alterations", version, about)]
pub struct Cli {
    /// Gene symbols to query (space or comma separated).
    #[arg(value_name = "GENE", required = true)]
    pub genes: Vec<String>,

    /// Report layout; defaults to verbose for one gene, concise otherwise.
    #[arg(long, value_enum)]
    pub mode: Option<DisplayMode>,

    /// Read `<profile_id>.txt(.gz)` exports from this directory instead of the portal.
    #[arg(long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    #[arg(long, value_name = "URL", default_value = DEFAULT_PORTAL_URL)]
    pub portal_url: String,

    #[arg(long, value_name = "ID", default_value = "gbm_tcga_cnaseq")]
    pub case_set: String,

    #[arg(long, value_name = "ID", default_value = "gbm_tcga_gistic")]
    pub cna_profile: String,

    #[arg(long, value_name = "ID", default_value = "gbm_tcga_mutations")]
    pub mutation_profile: String,

    /// Count cases hit by both mechanisms once each in both rates and
    /// subtract the overlap from the combined rate.
    #[arg(long)]
    pub count_overlap: bool,

    /// Also write alterations.txt and alterations.json here.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug); RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Portal { base_url: String },
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub genes: Vec<String>,
    pub mode: DisplayMode,
    pub source: SourceConfig,
    pub study: StudyProfiles,
    pub policy: CountingPolicy,
    pub out_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let genes = split_genes(&cli.genes)?;
        let mode = cli
            .mode
            .unwrap_or_else(|| DisplayMode::for_gene_count(genes.len()));
        let source = match cli.input {
            Some(dir) => SourceConfig::Directory(dir),
            None => SourceConfig::Portal {
                base_url: cli.portal_url,
            },
        };
        let study = StudyProfiles {
            case_set_id: non_empty("--case-set", cli.case_set)?,
            copy_number_profile_id: non_empty("--cna-profile", cli.cna_profile)?,
            mutation_profile_id: non_empty("--mutation-profile", cli.mutation_profile)?,
        };
        let policy = if cli.count_overlap {
            CountingPolicy::Overlap
        } else {
            CountingPolicy::Legacy
        };

        Ok(RunConfig {
            genes,
            mode,
            source,
            study,
            policy,
            out_dir: cli.out,
        })
    }
}

fn split_genes(raw: &[String]) -> Result<Vec<String>> {
    let mut genes: Vec<String> = Vec::new();
    for arg in raw {
        for symbol in arg.split(',') {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(AlterationError::InvalidConfig(format!(
                    "empty gene symbol in {arg:?}"
                )));
            }
            if genes.iter().any(|g| g.eq_ignore_ascii_case(symbol)) {
                tracing::warn!(gene = symbol, "duplicate gene in query; ignoring");
                continue;
            }
            genes.push(symbol.to_string());
        }
    }
    if genes.is_empty() {
        return Err(AlterationError::InvalidConfig("no genes given".to_string()));
    }
    Ok(genes)
}

fn non_empty(flag: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(AlterationError::InvalidConfig(format!("{flag} is empty")));
    }
    Ok(value.trim().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
