use std::path::PathBuf;

use hip_core::table::{DEFAULT_HEADING, DEFAULT_LINK_BASE};

use crate::error::AppError;

const DEFAULT_HIP_DIR: &str = "HIPs";
const DEFAULT_OUTPUTS: &str = "docs/hip-index.json,docs/site/hip-index.json";
const DEFAULT_README: &str = "README.md";

/// Application configuration loaded from environment variables.
///
/// Relative paths resolve against `repo_root`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository checkout holding the HIPs, README and docs.
    pub repo_root: PathBuf,
    /// Directory scanned for `hip-*.md` documents.
    pub hips_dir: PathBuf,
    /// Every path the JSON index is written to.
    pub json_outputs: Vec<PathBuf>,
    /// Overview document whose index section gets replaced.
    pub readme_path: PathBuf,
    /// Heading of the index section, e.g. "## HIP Index".
    pub section_heading: String,
    /// Link prefix for table rows, e.g. "./HIPs".
    pub link_base: String,
}

impl Config {
    /// Load configuration from environment variables. All are optional.
    ///
    /// - `HIP_REPO_ROOT` (default: ".")
    /// - `HIP_DIR` (default: "HIPs")
    /// - `HIP_INDEX_OUTPUTS`: comma-separated JSON destinations
    ///   (default: "docs/hip-index.json,docs/site/hip-index.json")
    /// - `HIP_README` (default: "README.md")
    /// - `HIP_INDEX_SECTION` (default: "## HIP Index")
    /// - `HIP_LINK_BASE` (default: "./HIPs")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let repo_root = PathBuf::from(var("HIP_REPO_ROOT", "."));

        let outputs = parse_list(&var("HIP_INDEX_OUTPUTS", DEFAULT_OUTPUTS));
        if outputs.is_empty() {
            return Err(AppError::Config(
                "HIP_INDEX_OUTPUTS must name at least one destination".to_string(),
            ));
        }

        let section_heading = var("HIP_INDEX_SECTION", DEFAULT_HEADING);
        if section_heading.trim().is_empty() {
            return Err(AppError::Config(
                "HIP_INDEX_SECTION must not be empty".to_string(),
            ));
        }

        Ok(Self {
            hips_dir: repo_root.join(var("HIP_DIR", DEFAULT_HIP_DIR)),
            json_outputs: outputs.iter().map(|p| repo_root.join(p)).collect(),
            readme_path: repo_root.join(var("HIP_README", DEFAULT_README)),
            section_heading,
            link_base: var("HIP_LINK_BASE", DEFAULT_LINK_BASE),
            repo_root,
        })
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
