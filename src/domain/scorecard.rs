use serde_json::Value;
use thiserror::Error;

/// One parsed model reply, shaped for display: one column per top-level
/// key, one row of stringified values.
#[derive(Debug)]
pub struct ScorecardTable {
    pub columns: Vec<String>,
    pub row: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ScorecardParseError {
    #[error("Model reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Model reply is valid JSON but not an object")]
    NotAnObject,
}

/// Strict parse of the raw model reply. Markdown fences, trailing prose
/// and non-object payloads all fail; the caller keeps the raw text on
/// screen either way, so nothing is rescued here.
pub fn parse_scorecard(raw: &str) -> Result<ScorecardTable, ScorecardParseError> {
    let value: Value = serde_json::from_str(raw)?;
    let object = value.as_object().ok_or(ScorecardParseError::NotAnObject)?;

    let columns = object.keys().cloned().collect();
    let row = object.values().map(render_cell).collect();

    Ok(ScorecardTable { columns, row })
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_scorecard, ScorecardParseError};

    #[test]
    fn valid_scorecard_json_becomes_a_single_row_table() {
        let raw = r#"{"url":"https://example.com","c1":1,"c2":0,"c3":1,"c4":0,"c5":1,"c6":0,"c7":0,"c8":1,"c9":1,"c10":0,"total":5}"#;
        let table = parse_scorecard(raw).unwrap();

        assert_eq!(
            table.columns,
            vec![
                "url", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10", "total"
            ]
        );
        assert_eq!(table.row.len(), 12);
        assert_eq!(table.row[0], "https://example.com");
        assert_eq!(table.row[11], "5")
    }

    #[test]
    fn prose_reply_is_a_parse_error() {
        assert!(parse_scorecard("I cannot answer this.").is_err())
    }

    #[test]
    fn fenced_json_is_not_rescued() {
        let raw = "```json\n{\"url\": \"https://example.com\"}\n```";

        assert!(parse_scorecard(raw).is_err())
    }

    #[test]
    fn json_with_trailing_prose_is_a_parse_error() {
        assert!(parse_scorecard("{\"total\": 4} Hope this helps!").is_err())
    }

    #[test]
    fn non_object_json_is_rejected() {
        let error = parse_scorecard("[1, 0, 1]").unwrap_err();

        assert!(matches!(error, ScorecardParseError::NotAnObject))
    }

    #[test]
    fn string_cells_render_bare_and_other_values_as_json() {
        let raw = r#"{"url":"https://example.com","score":1,"fresh":true,"note":null}"#;
        let table = parse_scorecard(raw).unwrap();

        assert_eq!(table.row, vec!["https://example.com", "1", "true", "null"])
    }
}
