/// Section replacement inside a markdown document.
///
/// A section runs from its heading to the next sibling second-level heading
/// (`## ` followed by anything but `#`), or to the end of the document.
/// Deeper headings such as `### ` stay inside the section. The scan is purely
/// textual, so a `## ` line inside a fenced code block also ends the section.
use std::sync::OnceLock;

use regex::Regex;

fn sibling_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n## [^#]").expect("valid regex"))
}

/// Replace the section starting at `marker` with `body`.
///
/// When `marker` does not occur, `body` is appended after a blank line.
pub fn patch(document: &str, marker: &str, body: &str) -> String {
    let Some(start) = document.find(marker) else {
        return format!("{document}\n\n{body}");
    };

    let search_from = start + marker.len();
    match next_sibling_heading(&document[search_from..]) {
        Some(offset) => {
            // `newline` points at the '\n' before the sibling heading; it is
            // replaced by the blank line that follows `body`.
            let newline = search_from + offset;
            format!("{}{}\n\n{}", &document[..start], body, &document[newline + 1..])
        }
        None => format!("{}{}", &document[..start], body),
    }
}

/// Byte offset of the newline that opens the next sibling `## ` heading.
fn next_sibling_heading(text: &str) -> Option<usize> {
    sibling_heading_re().find(text).map(|m| m.start())
}
