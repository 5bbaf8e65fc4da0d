use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// One response row: column name to value, in the order the API sent them.
pub type Row = Map<String, Value>;

/// Row-oriented result of a request. Columns are the union of all row keys
/// in first-seen order; no schema is enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

/// Shared response wrapper: `{"data": [ {...}, ... ]}`.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Vec<Row>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, rows }
    }

    /// Decode a response body. `data` absent or null yields an empty table.
    pub fn from_envelope(body: &[u8]) -> Result<Self, ApiError> {
        let envelope: Envelope = serde_json::from_slice(body)?;
        Ok(Self::from_rows(envelope.data.unwrap_or_default()))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// No rows, or rows that carry no columns at all (`{"data": [{}]}`).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Value of `column` in the first row, if both exist.
    pub fn first_value(&self, column: &str) -> Option<&Value> {
        self.rows.first().and_then(|row| row.get(column))
    }

    /// Display text of `column` in the first row.
    pub fn first_text(&self, column: &str) -> Option<String> {
        self.first_value(column).map(cell_text)
    }
}

/// Render a cell for display. Strings lose their quotes and null is blank.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_data_array() {
        let table = Table::from_envelope(br#"{"data": []}"#).unwrap();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn single_row() {
        let table = Table::from_envelope(br#"{"data": [{"a": 1}]}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.columns(), &["a".to_string()]);
        assert_eq!(table.first_value("a"), Some(&json!(1)));
    }

    #[test]
    fn missing_data_is_empty() {
        let table = Table::from_envelope(br#"{"detail": "Not Found"}"#).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn null_data_is_empty() {
        let table = Table::from_envelope(br#"{"data": null}"#).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let err = Table::from_envelope(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn data_of_scalars_is_decode_error() {
        let err = Table::from_envelope(br#"{"data": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn top_level_array_is_decode_error() {
        let err = Table::from_envelope(br#"[{"a": 1}]"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn rows_without_columns_are_empty() {
        let table = Table::from_envelope(br#"{"data": [{}, {}]}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn columns_union_in_first_seen_order() {
        let body = br#"{"data": [{"b": 1, "a": 2}, {"a": 3, "c": 4}]}"#;
        let table = Table::from_envelope(body).unwrap();
        assert_eq!(
            table.columns(),
            &["b".to_string(), "a".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn first_text_of_missing_column() {
        let table = Table::from_envelope(br#"{"data": [{"a": 1}]}"#).unwrap();
        assert_eq!(table.first_text("b"), None);
        assert_eq!(Table::new().first_text("a"), None);
    }

    #[test]
    fn cell_text_formats() {
        assert_eq!(cell_text(&json!("MIST")), "MIST");
        assert_eq!(cell_text(&json!(460)), "460");
        assert_eq!(cell_text(&json!(3.5)), "3.5");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!({"x": 1})), r#"{"x":1}"#);
    }
}
