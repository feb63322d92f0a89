use super::{Dataset, DatasetError, Record};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Header names of the descriptive and numeric CSV columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvColumns {
    pub name: String,
    pub value: String,
}

impl CsvColumns {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self::new("Movie Name", "IMDB Rating")
    }
}

impl Dataset {
    /// Load every row of a headered CSV file
    pub fn load_csv(path: impl AsRef<Path>, columns: &CsvColumns) -> Result<Self, DatasetError> {
        Self::load_csv_percentage(path, columns, 100.0)
    }

    /// Load the leading `percentage` of rows from a headered CSV file
    pub fn load_csv_percentage(
        path: impl AsRef<Path>,
        columns: &CsvColumns,
        percentage: f64,
    ) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let mut rows: Vec<StringRecord> = reader.records().collect::<Result<_, _>>()?;

        // only the kept prefix has to parse
        rows.truncate(super::prefix_len(rows.len(), percentage)?);

        let dataset = Self::from_rows(&headers, &rows, columns)?;
        info!(
            path = %path.display(),
            percentage,
            rows = dataset.len(),
            "Loaded dataset prefix"
        );
        Ok(dataset)
    }

    fn from_rows(
        headers: &StringRecord,
        rows: &[StringRecord],
        columns: &CsvColumns,
    ) -> Result<Self, DatasetError> {
        let name_idx = column_index(headers, &columns.name)?;
        let value_idx = column_index(headers, &columns.value)?;
        debug!(name_idx, value_idx, "Resolved CSV columns");

        let records = rows
            .iter()
            .enumerate()
            .map(|(row, fields)| -> Result<Record, DatasetError> {
                let name = fields.get(name_idx).unwrap_or("").to_string();
                let raw = fields.get(value_idx).unwrap_or("").trim();
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| DatasetError::InvalidValue {
                        row,
                        value: raw.to_string(),
                    })?;
                Ok(Record { name, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(records))
    }
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))
}
