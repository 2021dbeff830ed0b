/// Regeneration of the JSON index and the README index section.
///
/// Every run rebuilds the outputs from the HIP directory. In check mode nothing
/// is written; outputs whose SHA-256 digest differs from the freshly rendered
/// content are reported as stale instead.
use std::path::{Path, PathBuf};

use hip_core::error::IndexError;
use hip_core::model::{HipRecord, IndexStats};
use hip_core::table::TableOptions;
use hip_core::{collector, emit, patch, table};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;

/// Which artifacts a run regenerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Json,
    Readme,
    All,
}

impl Target {
    fn includes_json(self) -> bool {
        matches!(self, Target::Json | Target::All)
    }

    fn includes_readme(self) -> bool {
        matches!(self, Target::Readme | Target::All)
    }
}

/// Result of an update run.
#[derive(Debug)]
pub struct UpdateResult {
    /// Statistics over the collected HIPs.
    pub stats: IndexStats,
    /// Outputs whose content differs (or would differ, in check mode) from before.
    pub changed: Vec<PathBuf>,
}

pub struct UpdateService {
    config: Config,
}

impl UpdateService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn collect(&self) -> Result<Vec<HipRecord>, AppError> {
        let records = collector::collect(&self.config.hips_dir)?;
        info!(
            dir = %self.config.hips_dir.display(),
            hips = records.len(),
            "collected hips"
        );
        Ok(records)
    }

    /// Render the README with its index section replaced.
    pub fn render_readme(&self, records: &[HipRecord]) -> Result<String, AppError> {
        let path = &self.config.readme_path;
        let current = std::fs::read_to_string(path).map_err(|e| IndexError::io(path, e))?;
        let body = table::render_with(
            records,
            &TableOptions {
                heading: &self.config.section_heading,
                link_base: &self.config.link_base,
            },
        );
        Ok(patch::patch(&current, &self.config.section_heading, &body))
    }

    /// JSON destinations whose on-disk content is missing or outdated.
    pub fn stale_json(&self, json: &str) -> Result<Vec<PathBuf>, AppError> {
        let mut stale = Vec::new();
        for dest in &self.config.json_outputs {
            if is_stale(dest, json.as_bytes())? {
                stale.push(dest.clone());
            }
        }
        Ok(stale)
    }

    /// Paths among the selected outputs whose on-disk content is missing or outdated.
    pub fn stale_outputs(
        &self,
        records: &[HipRecord],
        target: Target,
    ) -> Result<Vec<PathBuf>, AppError> {
        let mut stale = Vec::new();

        if target.includes_json() {
            stale.extend(self.stale_json(&emit::render_index(records)?)?);
        }

        if target.includes_readme() {
            let readme = self.render_readme(records)?;
            if is_stale(&self.config.readme_path, readme.as_bytes())? {
                stale.push(self.config.readme_path.clone());
            }
        }

        Ok(stale)
    }

    /// Regenerate the selected outputs, or only verify them when `check` is set.
    ///
    /// The JSON index is written before the README is touched, so a README
    /// failure leaves freshly written JSON in place.
    pub fn run(&self, target: Target, check: bool) -> Result<UpdateResult, AppError> {
        let records = self.collect()?;
        let stats = IndexStats::from_records(&records);

        if check {
            let changed = self.stale_outputs(&records, target)?;
            if !changed.is_empty() {
                return Err(AppError::Stale(
                    changed.iter().map(|p| p.display().to_string()).collect(),
                ));
            }
            info!("all outputs up to date");
            return Ok(UpdateResult { stats, changed });
        }

        let mut changed = Vec::new();

        if target.includes_json() {
            changed.extend(self.stale_json(&emit::render_index(&records)?)?);
            emit::emit(&records, &self.config.json_outputs)?;
        }

        if target.includes_readme() {
            let readme = self.render_readme(&records)?;
            let path = &self.config.readme_path;
            if is_stale(path, readme.as_bytes())? {
                changed.push(path.clone());
            }
            std::fs::write(path, readme).map_err(|e| IndexError::io(path, e))?;
            info!(path = %path.display(), hips = records.len(), "updated readme index");
        }

        Ok(UpdateResult { stats, changed })
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

fn is_stale(path: &Path, rendered: &[u8]) -> Result<bool, AppError> {
    let current = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "output missing");
            return Ok(true);
        }
        Err(e) => return Err(IndexError::io(path, e).into()),
    };

    let current_digest = sha256_hex(&current);
    let rendered_digest = sha256_hex(rendered);
    debug!(
        path = %path.display(),
        current = %current_digest,
        rendered = %rendered_digest,
        "compared output digests"
    );
    Ok(current_digest != rendered_digest)
}
