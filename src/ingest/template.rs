// src/ingest/template.rs

use std::sync::LazyLock;

use regex::Regex;

static LEADING_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} ").expect("valid regex"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").expect("valid regex"));

pub const PLACEHOLDER: &str = "{num}";

/// Splits a log line into its reusable template and the numbers pulled out of it.
pub fn templatize(line: &str) -> (String, Vec<String>) {
    let stripped = LEADING_TIMESTAMP.replace(line, "");
    let values = NUMBER
        .find_iter(&stripped)
        .map(|m| m.as_str().to_string())
        .collect();
    let template = NUMBER.replace_all(&stripped, PLACEHOLDER).into_owned();

    (template, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_replaced_and_collected() {
        let (template, values) = templatize("2025-11-23 12:00:00 ERROR retry 3 of 5 failed");
        assert_eq!(template, "ERROR retry {num} of {num} failed");
        assert_eq!(values, vec!["3", "5"]);
    }

    #[test]
    fn lines_differing_only_in_numbers_share_a_template() {
        let (a, _) = templatize("2025-11-23 12:00:00 WARNING queue at 91 percent");
        let (b, _) = templatize("2025-11-24 08:30:10 WARNING queue at 97 percent");
        assert_eq!(a, b);
    }

    #[test]
    fn digits_inside_words_are_kept() {
        let (template, values) = templatize("ERROR node7 unreachable");
        assert_eq!(template, "ERROR node7 unreachable");
        assert!(values.is_empty());
    }
}
