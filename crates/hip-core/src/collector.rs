/// Directory scan that turns HIP documents into sorted records.
///
/// Only files named `hip-<digits>[-<slug>].md` take part. The digit run is the
/// record's identity; the slug is kept in `file` for link construction only.
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::IndexError;
use crate::frontmatter;
use crate::model::HipRecord;

fn filename_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^hip-(\d+)(?:-[a-z0-9-]+)?\.md$").expect("valid regex"))
}

/// Parse the HIP number out of a filename.
///
/// Examples:
/// - "hip-0001-foo.md" → Some(1)
/// - "hip-10.md" → Some(10)
/// - "HIP-1.md", "hip-1-Foo.md", "hip-1.mdx" → None
///
/// A digit run too large for `u64` also yields `None`.
pub fn parse_hip_number(filename: &str) -> Option<u64> {
    let caps = filename_re().captures(filename)?;
    match caps[1].parse::<u64>() {
        Ok(number) => Some(number),
        Err(e) => {
            warn!(filename, error = %e, "hip number out of range, skipping");
            None
        }
    }
}

/// Collect every HIP document in `dir`, sorted ascending by number.
///
/// A missing or unlistable directory yields an empty list. Failing to read a
/// matching file is an error.
pub fn collect(dir: &Path) -> Result<Vec<HipRecord>, IndexError> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "hip directory not found, nothing to collect");
        return Ok(Vec::new());
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "hip directory unreadable, nothing to collect");
            return Ok(Vec::new());
        }
    };

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IndexError::io(dir, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(number) = parse_hip_number(name) else {
            continue;
        };

        let path = entry.path();
        let content = std::fs::read_to_string(&path).map_err(|e| IndexError::io(&path, e))?;
        let fields = frontmatter::extract(&content);
        records.push(HipRecord::from_frontmatter(number, name, &fields));
    }

    // Enumeration order is filesystem-defined; this sort is the only ordering guarantee.
    records.sort_by_key(|r| r.number);

    debug!(dir = %dir.display(), count = records.len(), "collected hips");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).expect("write fixture");
    }

    #[test]
    fn parse_number_variants() {
        assert_eq!(parse_hip_number("hip-0001-foo.md"), Some(1));
        assert_eq!(parse_hip_number("hip-10.md"), Some(10));
        assert_eq!(parse_hip_number("hip-0000.md"), Some(0));
        assert_eq!(parse_hip_number("hip-42-llm-gateway-v2.md"), Some(42));
        assert_eq!(parse_hip_number("hip-123456789012.md"), Some(123_456_789_012));
    }

    #[test]
    fn parse_number_rejects_non_matching_names() {
        assert_eq!(parse_hip_number("HIP-1.md"), None);
        assert_eq!(parse_hip_number("hip-1-Foo.md"), None);
        assert_eq!(parse_hip_number("hip-1_foo.md"), None);
        assert_eq!(parse_hip_number("hip-1.mdx"), None);
        assert_eq!(parse_hip_number("hip-.md"), None);
        assert_eq!(parse_hip_number("hip-1.md.bak"), None);
        assert_eq!(parse_hip_number("xhip-1.md"), None);
        assert_eq!(parse_hip_number("README.md"), None);
        assert_eq!(parse_hip_number("TEMPLATE.md"), None);
    }

    #[test]
    fn parse_number_overflow_is_skipped() {
        assert_eq!(parse_hip_number("hip-99999999999999999999999.md"), None);
    }

    #[test]
    fn missing_directory_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let records = collect(&temp.path().join("HIPs")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn collects_and_sorts_by_number() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path();
        write(dir, "hip-7-seven.md", "---\ntitle: Seven\n---\n");
        write(dir, "hip-1.md", "---\ntitle: One\n---\n");
        write(dir, "hip-0003-three.md", "---\ntitle: Three\n---\n");
        write(dir, "README.md", "---\ntitle: Not a hip\n---\n");
        write(dir, "hip-template.md", "---\ntitle: Template\n---\n");

        let records = collect(dir).unwrap();
        let numbers: Vec<u64> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 3, 7]);
        assert_eq!(records[1].file, "hip-0003-three.md");
        assert_eq!(records[1].title, "Three");
    }

    #[test]
    fn headerless_document_gets_defaults() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "hip-0010.md", "# HIP-10\n\nNo header here.\n");

        let records = collect(temp.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, 10);
        assert_eq!(records[0].title, "Untitled");
        assert_eq!(records[0].status, "Draft");
    }

    #[test]
    fn duplicate_numbers_are_all_kept() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "hip-0005-a.md", "");
        write(temp.path(), "hip-5-b.md", "");
        write(temp.path(), "hip-2.md", "");

        let records = collect(temp.path()).unwrap();
        let numbers: Vec<u64> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![2, 5, 5]);
    }

    #[test]
    fn unreadable_matching_entry_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("hip-1.md")).unwrap();

        let err = collect(temp.path()).unwrap_err();
        assert!(matches!(err, IndexError::Io { .. }));
    }
}
