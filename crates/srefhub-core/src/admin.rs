//! Admin bulk export/import.
//!
//! Exports are opaque files produced by the server. Imports are parsed
//! locally from JSON (array of objects, or `{ "records": [...] }`) or CSV
//! (header row + RFC 4180 quoting) into records posted back in one request.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HubError, HubResult};

/// One imported row, keyed by column/field name
pub type Record = Map<String, Value>;

/// File formats supported by export and import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(HubError::InvalidInput(format!(
                "unsupported format '{}', expected csv or json",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collections that can be exported/imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Posts,
    Prompts,
    Gallery,
    Users,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Posts,
        ResourceKind::Prompts,
        ResourceKind::Gallery,
        ResourceKind::Users,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Posts => "posts",
            ResourceKind::Prompts => "prompts",
            ResourceKind::Gallery => "gallery",
            ResourceKind::Users => "users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Posts => "Style posts",
            ResourceKind::Prompts => "Prompts",
            ResourceKind::Gallery => "Gallery",
            ResourceKind::Users => "Users",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                HubError::InvalidInput(format!(
                    "unknown resource '{}', expected posts, prompts, gallery or users",
                    s
                ))
            })
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server response to `POST /admin/import/:type`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSummary {
    pub imported: u64,
    pub failed: u64,
    pub message: Option<String>,
}

/// Suggested file name for a download, e.g. `prompts-export-2024-05-01.csv`
pub fn export_file_name(kind: ResourceKind, format: ExportFormat, date: NaiveDate) -> String {
    format!("{}-export-{}.{}", kind, date.format("%Y-%m-%d"), format)
}

/// Parse an import file in the given format.
pub fn parse_records(bytes: &[u8], format: ExportFormat) -> HubResult<Vec<Record>> {
    match format {
        ExportFormat::Json => parse_json_records(bytes),
        ExportFormat::Csv => parse_csv_records(bytes),
    }
}

/// Parse a JSON array of objects, or an object with a `records` array.
pub fn parse_json_records(bytes: &[u8]) -> HubResult<Vec<Record>> {
    let value: Value = serde_json::from_slice(bytes)?;
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut obj) => match obj.remove("records") {
            Some(Value::Array(rows)) => rows,
            _ => {
                return Err(HubError::InvalidInput(
                    "JSON import must be an array or contain a \"records\" array".to_string(),
                ))
            }
        },
        _ => {
            return Err(HubError::InvalidInput(
                "JSON import must be an array of objects".to_string(),
            ))
        }
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(record) => Ok(record),
            other => Err(HubError::InvalidInput(format!(
                "record {} is not an object: {}",
                i + 1,
                other
            ))),
        })
        .collect()
}

/// Parse CSV with a header row. Quoted fields may contain commas, escaped
/// quotes and newlines. Values are kept as strings; surrounding whitespace
/// is trimmed.
pub fn parse_csv_records(bytes: &[u8]) -> HubResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(HubError::InvalidInput("CSV import has no header row".to_string()));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect();
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_handles_quotes_and_newlines() {
        let csv = "title,prompt,tags\n\
                   \"Foggy, pier\",\"a \"\"quiet\"\" harbor\nat dawn\",moody\n\
                   Plain,simple,\n";
        let records = parse_csv_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["title"], "Foggy, pier");
        assert_eq!(records[0]["prompt"], "a \"quiet\" harbor\nat dawn");
        assert_eq!(records[1]["tags"], "");
    }

    #[test]
    fn test_csv_ragged_row_is_an_error() {
        let csv = "a,b\n1,2,3\n";
        assert!(matches!(parse_csv_records(csv.as_bytes()), Err(HubError::Csv(_))));
    }

    #[test]
    fn test_json_array_and_wrapped() {
        let arr = parse_json_records(br#"[{"title":"a"},{"title":"b"}]"#).unwrap();
        assert_eq!(arr.len(), 2);

        let wrapped = parse_json_records(br#"{"records":[{"title":"a"}]}"#).unwrap();
        assert_eq!(wrapped[0]["title"], "a");
    }

    #[test]
    fn test_json_rejects_non_objects() {
        assert!(parse_json_records(br#"[1,2]"#).is_err());
        assert!(parse_json_records(br#""text""#).is_err());
        assert!(parse_json_records(br#"{"items":[]}"#).is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("dump.CSV")), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_path(Path::new("dump.json")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_path(Path::new("dump.xlsx")), None);
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            export_file_name(ResourceKind::Prompts, ExportFormat::Csv, date),
            "prompts-export-2024-05-01.csv"
        );
    }

    #[test]
    fn test_resource_kind_parse() {
        assert_eq!("Gallery".parse::<ResourceKind>().unwrap(), ResourceKind::Gallery);
        assert!("comments".parse::<ResourceKind>().is_err());
    }
}
