/// Markdown table of all HIPs, as embedded in the README's index section.
use crate::model::HipRecord;

pub const DEFAULT_HEADING: &str = "## HIP Index";
pub const DEFAULT_LINK_BASE: &str = "./HIPs";

const MAX_TITLE_CHARS: usize = 55;
const TRUNCATED_TITLE_CHARS: usize = 52;
const ELLIPSIS: &str = "...";
const EMPTY_CELL: &str = "-";

#[derive(Debug, Clone, Copy)]
pub struct TableOptions<'a> {
    /// Heading line opening the section, e.g. "## HIP Index"
    pub heading: &'a str,
    /// Relative directory prefix for each row's link, e.g. "./HIPs"
    pub link_base: &'a str,
}

impl Default for TableOptions<'_> {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING,
            link_base: DEFAULT_LINK_BASE,
        }
    }
}

/// Render the index table with the default heading and link base.
pub fn render(records: &[HipRecord]) -> String {
    render_with(records, &TableOptions::default())
}

/// Render the index table. Rows follow the order of `records`.
pub fn render_with(records: &[HipRecord], options: &TableOptions<'_>) -> String {
    let mut lines = vec![
        format!("{}\n", options.heading),
        "| Number | Title | Type | Category | Status |".to_string(),
        "|:-------|:------|:-----|:---------|:-------|".to_string(),
    ];

    for record in records {
        lines.push(format!(
            "| [HIP-{:04}]({}/{}) | {} | {} | {} | {} |",
            record.number,
            options.link_base.trim_end_matches('/'),
            record.file,
            truncate_title(&record.title),
            or_dash(&record.kind),
            or_dash(&record.category),
            record.status,
        ));
    }

    lines.join("\n")
}

/// Titles over 55 chars keep their first 52 plus "...".
fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let head: String = title.chars().take(TRUNCATED_TITLE_CHARS).collect();
        format!("{head}{ELLIPSIS}")
    } else {
        title.to_string()
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_CELL
    } else {
        value
    }
}
