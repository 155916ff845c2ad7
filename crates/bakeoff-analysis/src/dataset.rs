//! Reference dataset of historical brownie trials.
//!
//! Two on-disk formats are accepted:
//!
//! - **CSV**: a header row naming the columns, followed by one trial per line. The
//!   seven feature columns are located by exact header name; any other columns are
//!   ignored. Cells may be wrapped in double quotes, which lets them contain commas.
//!   Feature cells must hold finite numbers.
//! - **JSON**: an array of objects keyed by column name. Extra keys are ignored.
//!
//! ```json
//! [
//!   { "Sugar": 0.3, "Butter": 0.2, "Chocolate": 0.2, "Flour": 0.2, "Eggs": 0.1,
//!     "Temp": 350, "Time": 25 }
//! ]
//! ```

use std::{fs, mem, path::Path};

use bakeoff_engine::{Feature, FeatureVector};
use serde::Deserialize;

use crate::DataError;

/// Rows of a reference dataset, restricted to the seven tracked features.
///
/// A dataset always holds at least one row.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    rows: Vec<FeatureVector>,
}

#[derive(Debug, Deserialize)]
struct TrialRecord {
    #[serde(rename = "Sugar")]
    sugar: f64,
    #[serde(rename = "Butter")]
    butter: f64,
    #[serde(rename = "Chocolate")]
    chocolate: f64,
    #[serde(rename = "Flour")]
    flour: f64,
    #[serde(rename = "Eggs")]
    eggs: f64,
    #[serde(rename = "Temp")]
    temp: f64,
    #[serde(rename = "Time")]
    time: f64,
}

impl From<TrialRecord> for FeatureVector {
    fn from(r: TrialRecord) -> Self {
        FeatureVector::from_parts([r.sugar, r.butter, r.chocolate, r.flour, r.eggs], r.temp, r.time)
    }
}

impl ReferenceDataset {
    pub fn from_rows(rows: Vec<FeatureVector>) -> Result<Self, DataError> {
        if rows.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(Self { rows })
    }

    /// Reads a dataset file, choosing the format by extension.
    ///
    /// Files ending in `.json` are parsed as JSON; everything else as CSV.
    pub fn open<P>(path: P) -> Result<Self, DataError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_owned(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_csv_str(&text)
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, DataError> {
        let records: Vec<TrialRecord> =
            serde_json::from_str(text).map_err(|source| DataError::Json { source })?;
        Self::from_rows(records.into_iter().map(FeatureVector::from).collect())
    }

    pub fn from_csv_str(text: &str) -> Result<Self, DataError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(DataError::Empty)?;
        let header = header.trim_start_matches('\u{feff}');
        let columns = split_csv_line(header);

        let mut positions = [0; Feature::LEN];
        for feature in Feature::ALL {
            positions[feature.index()] = columns
                .iter()
                .position(|name| name == feature.name())
                .ok_or(DataError::MissingColumn { feature })?;
        }

        let rows = lines
            .map(|(line, text)| {
                let cells = split_csv_line(text);
                if cells.len() != columns.len() {
                    return Err(DataError::RowLength {
                        line,
                        expected: columns.len(),
                        found: cells.len(),
                    });
                }
                let mut values = [0.0; Feature::LEN];
                for feature in Feature::ALL {
                    let cell = cells[positions[feature.index()]].as_str();
                    values[feature.index()] = cell
                        .parse::<f64>()
                        .ok()
                        .filter(|value| value.is_finite())
                        .ok_or_else(|| DataError::InvalidValue {
                            line,
                            feature,
                            value: cell.to_owned(),
                        })?;
                }
                Ok(FeatureVector::from_array(values))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    /// Values of one feature across all rows.
    pub fn column(&self, feature: Feature) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[feature])
    }
}

/// Splits one record into trimmed cells.
///
/// Commas inside double quotes do not separate cells, and `""` inside quotes stands
/// for a literal quote.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(mem::take(&mut cell).trim().to_owned()),
            _ => cell.push(c),
        }
    }
    cells.push(cell.trim().to_owned());
    cells
}
