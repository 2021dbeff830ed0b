use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::category::category_for;

/// Fallback values for header fields, applied when a key is absent from the
/// header block. A key that is present with an empty value keeps the empty string.
pub const FIELD_DEFAULTS: &[(&str, &str)] = &[
    ("title", "Untitled"),
    ("description", ""),
    ("author", ""),
    ("status", "Draft"),
    ("type", ""),
    ("category", ""),
    ("created", ""),
];

/// Default for a header field, or `""` for keys outside the table.
pub fn field_default(key: &str) -> &'static str {
    FIELD_DEFAULTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or("")
}

/// One proposal document (e.g. `hip-0001-foo.md`).
///
/// Field order is the serialized order in `hip-index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HipRecord {
    /// Numeric identity from the filename, e.g. 1 for `hip-0001-foo.md`
    pub number: u64,
    /// Source filename, e.g. "hip-0001-foo.md"
    pub file: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub created: String,
}

impl HipRecord {
    /// Build a record from extracted header fields, filling gaps from `FIELD_DEFAULTS`.
    pub fn from_frontmatter(
        number: u64,
        file: impl Into<String>,
        fields: &HashMap<String, String>,
    ) -> Self {
        let get = |key: &str| {
            fields
                .get(key)
                .cloned()
                .unwrap_or_else(|| field_default(key).to_string())
        };

        Self {
            number,
            file: file.into(),
            title: get("title"),
            description: get("description"),
            author: get("author"),
            status: get("status"),
            kind: get("type"),
            category: get("category"),
            created: get("created"),
        }
    }
}

/// Top-level JSON document written by the emitter.
#[derive(Debug, Serialize)]
pub struct HipIndex<'a> {
    pub hip_count: usize,
    pub hips: &'a [HipRecord],
}

impl<'a> HipIndex<'a> {
    pub fn new(hips: &'a [HipRecord]) -> Self {
        Self {
            hip_count: hips.len(),
            hips,
        }
    }
}

const UNKNOWN: &str = "Unknown";
const UNCATEGORIZED: &str = "uncategorized";

/// Summary counts over a collected set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
    /// Keyed by category slug; numbers outside every range count as "uncategorized".
    pub by_category: BTreeMap<String, usize>,
}

impl IndexStats {
    pub fn from_records(records: &[HipRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            *stats
                .by_status
                .entry(label_or_unknown(&record.status))
                .or_insert(0) += 1;
            *stats
                .by_type
                .entry(label_or_unknown(&record.kind))
                .or_insert(0) += 1;
            let slug = category_for(record.number).map_or(UNCATEGORIZED, |c| c.slug);
            *stats.by_category.entry(slug.to_string()).or_insert(0) += 1;
        }
        stats
    }
}

fn label_or_unknown(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}
