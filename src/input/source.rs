use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::{AlterationError, Result};
use crate::model::matrix::COMMON_FIELD;
use crate::model::profile::{GeneticProfileKind, StudyProfiles};

pub const DEFAULT_PORTAL_URL: &str = "http://www.cbioportal.org";

/// Supplies the raw tab-delimited text of one genetic profile.
pub trait ProfileSource {
    fn fetch(&self, kind: GeneticProfileKind, genes: &[String]) -> Result<String>;

    fn describe(&self) -> String;
}

/// cBioPortal legacy webservice (`cmd=getProfileData`).
pub struct PortalSource {
    client: Client,
    base_url: String,
    study: StudyProfiles,
}

impl PortalSource {
    pub fn new(base_url: &str, study: StudyProfiles) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("kira-alterations/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AlterationError::InvalidConfig(format!("http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            study,
        })
    }

    pub fn request_url(&self, kind: GeneticProfileKind, genes: &[String]) -> Result<Url> {
        let endpoint = format!("{}/webservice.do", self.base_url);
        let gene_list = genes.join(",");
        Url::parse_with_params(
            &endpoint,
            &[
                ("cmd", "getProfileData"),
                ("genetic_profile_id", self.study.profile_id(kind)),
                ("id_type", "gene_symbol"),
                ("gene_list", gene_list.as_str()),
                ("case_set_id", self.study.case_set_id.as_str()),
            ],
        )
        .map_err(|e| AlterationError::InvalidConfig(format!("portal url {endpoint}: {e}")))
    }
}

impl ProfileSource for PortalSource {
    fn fetch(&self, kind: GeneticProfileKind, genes: &[String]) -> Result<String> {
        let url = self.request_url(kind, genes)?;
        tracing::info!(profile = %kind, %url, "requesting profile data");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AlterationError::retrieval(kind, e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AlterationError::retrieval(
                kind,
                format!("portal responded with HTTP {status}"),
            ));
        }
        resp.text()
            .map_err(|e| AlterationError::retrieval(kind, e.to_string()))
    }

    fn describe(&self) -> String {
        format!("portal {}", self.base_url)
    }
}

/// Profiles previously exported to `<dir>/<profile_id>.txt(.gz)`.
pub struct DirSource {
    dir: PathBuf,
    study: StudyProfiles,
}

impl DirSource {
    pub fn new(dir: &Path, study: StudyProfiles) -> Self {
        Self {
            dir: dir.to_path_buf(),
            study,
        }
    }

    pub fn find_profile_path(&self, kind: GeneticProfileKind) -> Result<PathBuf> {
        let profile_id = self.study.profile_id(kind);
        let candidates = [format!("{profile_id}.txt"), format!("{profile_id}.txt.gz")];
        for name in &candidates {
            let path = self.dir.join(name);
            if path.exists() {
                return Ok(path);
            }
        }
        Err(AlterationError::retrieval(
            kind,
            format!(
                "missing {}.txt(.gz) in {}",
                profile_id,
                self.dir.display()
            ),
        ))
    }
}

impl ProfileSource for DirSource {
    /// Exports hold the whole study; rows are narrowed to the queried genes
    /// the way the portal would answer.
    fn fetch(&self, kind: GeneticProfileKind, genes: &[String]) -> Result<String> {
        let path = self.find_profile_path(kind)?;
        tracing::info!(
            profile = %kind,
            path = %path.display(),
            genes = genes.len(),
            "reading profile export"
        );
        let text =
            read_maybe_gz(&path).map_err(|e| AlterationError::retrieval(kind, e.to_string()))?;
        Ok(retain_genes(&text, COMMON_FIELD, genes))
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

/// Keeps comment lines, the header and the data rows whose key cell matches
/// one of `genes` (case-insensitive). Text without the key column is returned
/// unchanged so the parser can report it.
pub fn retain_genes(text: &str, key_column: &str, genes: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut key_idx: Option<usize> = None;
    let mut header_seen = false;

    for line in text.lines() {
        let trimmed = line.trim_end_matches('\r');
        if !header_seen {
            if !trimmed.starts_with('#') && !trimmed.trim().is_empty() {
                header_seen = true;
                key_idx = trimmed.split('\t').position(|c| c.trim() == key_column);
                if key_idx.is_none() {
                    return text.to_string();
                }
            }
            out.push_str(line);
            out.push('\n');
            continue;
        }
        let keep = match key_idx.and_then(|idx| trimmed.split('\t').nth(idx)) {
            Some(symbol) => genes.iter().any(|g| g.eq_ignore_ascii_case(symbol.trim())),
            // Short rows are left for the parser to reject.
            None => !trimmed.trim().is_empty(),
        };
        if keep {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

pub fn read_maybe_gz(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut text = String::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        GzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        file.read_to_string(&mut text)?;
    }
    Ok(text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/source.rs"]
mod tests;
