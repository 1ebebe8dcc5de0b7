//! Parsing of model replies into issue lists.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::issue::Issue;

/// Markdown code-fence markers stripped before JSON parsing.
static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\n?|\n?```").unwrap());

/// Parse a model reply into an issue list.
///
/// Code fences are stripped and the remainder trimmed before parsing. A reply
/// that still does not parse as a JSON issue array yields an empty list; a
/// malformed reply is never an error.
pub fn parse_issues(reply: &str) -> Vec<Issue> {
    let cleaned = FENCE_RE.replace_all(reply, "");
    serde_json::from_str(cleaned.trim()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_array() {
        let reply = r#"[{"row":3,"col":2,"type":"Phone format","oldValue":"+7999123","newValue":"8(999)123-45-67","confidence":0.98}]"#;
        let issues = parse_issues(reply);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, 3);
        assert_eq!(issues[0].col, 2);
        assert_eq!(issues[0].kind, "Phone format");
        assert_eq!(issues[0].old_value, "+7999123");
        assert_eq!(issues[0].new_value, "8(999)123-45-67");
        assert_eq!(issues[0].confidence, Some(0.98));
    }

    #[test]
    fn test_parse_json_fenced() {
        let reply = "```json\n[{\"row\":1,\"col\":1,\"type\":\"Spaces\",\"oldValue\":\" a \",\"newValue\":\"a\",\"confidence\":0.9}]\n```";
        let issues = parse_issues(reply);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, "Spaces");
    }

    #[test]
    fn test_parse_bare_fenced() {
        let reply = "```\n[]\n```";
        assert!(parse_issues(reply).is_empty());
    }

    #[test]
    fn test_parse_fence_without_newlines() {
        let reply = "```json[{\"row\":2,\"col\":2}]```";
        let issues = parse_issues(reply);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, 2);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let reply = "  \n[{\"row\":4,\"col\":1}]\n  ";
        assert_eq!(parse_issues(reply).len(), 1);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_issues("[]").is_empty());
    }

    #[test]
    fn test_parse_garbage_degrades_to_empty() {
        assert!(parse_issues("I could not find any issues.").is_empty());
        assert!(parse_issues("").is_empty());
        assert!(parse_issues("{\"row\":1}").is_empty());
    }

    #[test]
    fn test_parse_prose_around_fence_degrades_to_empty() {
        let reply = "Here are the issues:\n```json\n[{\"row\":1,\"col\":1}]\n```";
        assert!(parse_issues(reply).is_empty());
    }

    #[test]
    fn test_parse_sparse_objects() {
        let issues = parse_issues(r#"[{}, {"row": 7}]"#);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].row, 0);
        assert!(issues[0].confidence.is_none());
        assert_eq!(issues[1].row, 7);
    }

    #[test]
    fn test_parse_high_precision_confidence() {
        // The default float parser may land a long decimal in the neighboring
        // ULP; the gate only needs the magnitude.
        let reply = r#"[{"row":1,"col":1,"type":"Trim","oldValue":" a","newValue":"a","confidence":0.9573940154579369}]"#;
        let issues = parse_issues(reply);

        assert_eq!(issues.len(), 1);
        let confidence = issues[0].confidence.unwrap();
        assert!((confidence - 0.9573940154579369).abs() < 1e-12);
        assert!(issues[0].is_confident());
    }
}
