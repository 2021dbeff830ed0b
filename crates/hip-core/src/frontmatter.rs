/// Header block extraction for HIP documents.
///
/// A header block opens with `---` at offset 0 and closes at the next line
/// starting with `---`. Each `key: value` line inside becomes one field.
/// This is a line splitter, not a YAML parser: anything it cannot read is
/// dropped rather than reported.
use std::collections::HashMap;

const DELIMITER: &str = "---";
const CLOSING: &str = "\n---";

/// Extract header fields from raw document text.
///
/// Returns an empty map when the text has no opening delimiter or the block
/// is never closed.
pub fn extract(text: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    if !text.starts_with(DELIMITER) {
        return fields;
    }

    let body_start = DELIMITER.len();
    let Some(offset) = text[body_start..].find(CLOSING) else {
        return fields;
    };
    let block = &text[body_start..body_start + offset];

    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // Values may contain colons (timestamps, URLs), so split on the first only.
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        fields.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    fields
}

/// Strip one layer of matching `"` or `'` quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_header() {
        let text = "---\nhip: 1\ntitle: \"Hanzo AI Architecture\"\nstatus: Final\n---\n\n# Body\n";
        let fields = extract(text);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["hip"], "1");
        assert_eq!(fields["title"], "Hanzo AI Architecture");
        assert_eq!(fields["status"], "Final");
    }

    #[test]
    fn no_opening_delimiter() {
        assert!(extract("# Title\n---\ntitle: X\n---\n").is_empty());
        assert!(extract(" ---\ntitle: X\n---\n").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn unclosed_block_yields_nothing() {
        assert!(extract("---\ntitle: X\nstatus: Draft\n").is_empty());
    }

    #[test]
    fn splits_on_first_colon_only() {
        let text = "---\ncreated: 2025-01-09T10:30:00Z\ndiscussions-to: https://github.com/hanzoai/hips\n---\n";
        let fields = extract(text);
        assert_eq!(fields["created"], "2025-01-09T10:30:00Z");
        assert_eq!(fields["discussions-to"], "https://github.com/hanzoai/hips");
    }

    #[test]
    fn strips_one_layer_of_matching_quotes() {
        let text = "---\na: \"double\"\nb: 'single'\nc: \"'nested'\"\nd: \"mismatched'\ne: \"\nf: \"\"\n---\n";
        let fields = extract(text);
        assert_eq!(fields["a"], "double");
        assert_eq!(fields["b"], "single");
        assert_eq!(fields["c"], "'nested'");
        assert_eq!(fields["d"], "\"mismatched'");
        assert_eq!(fields["e"], "\"");
        assert_eq!(fields["f"], "");
    }

    #[test]
    fn ignores_lines_without_colon() {
        let text = "---\ntitle: X\njust some text\n\n  \nauthor:   Zach  \n---\n";
        let fields = extract(text);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["author"], "Zach");
    }

    #[test]
    fn trims_keys_and_values() {
        let fields = extract("---\n  title  :   Spaced out   \n---\n");
        assert_eq!(fields["title"], "Spaced out");
    }

    #[test]
    fn later_duplicate_key_wins() {
        let fields = extract("---\nstatus: Draft\nstatus: Review\n---\n");
        assert_eq!(fields["status"], "Review");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let fields = extract("---\r\ntitle: X\r\nstatus: Final\r\n---\r\n");
        assert_eq!(fields["title"], "X");
        assert_eq!(fields["status"], "Final");
    }

    #[test]
    fn preserves_non_ascii_values() {
        let fields = extract("---\ntitle: Jin 多模态 — ünïcode\n---\n");
        assert_eq!(fields["title"], "Jin 多模态 — ünïcode");
    }
}
