mod cli;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
mod test_support;

use clap::Parser;

use crate::cli::{Cli, RunConfig, SourceConfig};
use crate::error::Result;
use crate::input::source::{DirSource, PortalSource, ProfileSource};
use crate::pipeline::stage1_matrix::run_stage1;
use crate::pipeline::stage3_summary::summarize;
use crate::pipeline::stage4_report::{
    Stage4Input, run_stage4, write_profile_snapshots, write_reports,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Runs the whole pipeline and returns the text report.
fn run(cli: Cli) -> Result<String> {
    let config = RunConfig::from_cli(cli)?;
    let source = build_source(&config)?;
    tracing::info!(
        genes = %config.genes.join(","),
        source = %source.describe(),
        policy = config.policy.as_str(),
        "starting alteration summary"
    );

    let stage1 = run_stage1(source.as_ref(), &config.genes)?;
    let summaries = summarize(&stage1.gene_metadata, &stage1.case_matrix, config.policy)?;

    let stage4 = run_stage4(&Stage4Input {
        summaries: &summaries,
        query: &config.genes,
        mode: config.mode,
        policy: config.policy,
        source: source.describe(),
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    })?;

    if let Some(out_dir) = &config.out_dir {
        write_reports(&stage4, out_dir)?;
        write_profile_snapshots(&stage1.profiles, &config.study, out_dir)?;
    }
    Ok(stage4.text)
}

fn build_source(config: &RunConfig) -> Result<Box<dyn ProfileSource>> {
    let source: Box<dyn ProfileSource> = match &config.source {
        SourceConfig::Portal { base_url } => {
            Box::new(PortalSource::new(base_url, config.study.clone())?)
        }
        SourceConfig::Directory(dir) => Box::new(DirSource::new(dir, config.study.clone())),
    };
    Ok(source)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
