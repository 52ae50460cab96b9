//! Spreadsheet Data Loader Module
//! Loads the country table from CSV (Polars) or a workbook (calamine).

use super::columns::{COUNTRY, NUMERIC};
use calamine::{open_workbook_auto, Data, Range, Reader};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Dataset not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to build table: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to read workbook: {0}")]
    WorkbookError(#[from] calamine::Error),
    #[error("Unsupported file type: .{0}")]
    UnsupportedFormat(String),
    #[error("Workbook has no data")]
    EmptyWorkbook,
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Country listed twice: {0}")]
    DuplicateCountry(String),
}

/// Handles dataset loading. Keeps the last loaded table as the render source.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a dataset, replacing the current one. On failure nothing is kept.
    pub fn load(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        self.df = None;

        let df = Self::read_table(file_path)?;
        info!(
            path = %file_path.display(),
            rows = df.height(),
            "dataset loaded"
        );

        Ok(&*self.df.insert(df))
    }

    /// Read and normalize a dataset without touching loader state.
    pub fn read_table(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        let extension = file_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let raw = match extension.as_str() {
            "csv" => Self::read_csv(file_path)?,
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Self::read_workbook(file_path)?,
            other => return Err(LoaderError::UnsupportedFormat(other.to_string())),
        };

        Self::normalize(&raw)
    }

    fn read_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;
        Ok(df)
    }

    /// First worksheet, first row is the header. Only the required columns are read.
    fn read_workbook(file_path: &Path) -> Result<DataFrame, LoaderError> {
        let mut workbook = open_workbook_auto(file_path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(LoaderError::EmptyWorkbook)??;

        Self::table_from_range(&range)
    }

    fn table_from_range(range: &Range<Data>) -> Result<DataFrame, LoaderError> {
        let mut rows = range.rows();
        let header: Vec<String> = rows
            .next()
            .ok_or(LoaderError::EmptyWorkbook)?
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let index_of = |name: &str| {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
        };

        let country_idx = index_of(COUNTRY)?;
        let numeric_idx = NUMERIC
            .iter()
            .map(|&name| index_of(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut countries: Vec<Option<String>> = Vec::new();
        let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); NUMERIC.len()];

        for row in rows {
            countries.push(row.get(country_idx).and_then(cell_text));
            for (col, &idx) in numeric_idx.iter().enumerate() {
                values[col].push(row.get(idx).and_then(cell_number));
            }
        }

        let mut columns = vec![Column::new(COUNTRY.into(), countries)];
        for (name, vals) in NUMERIC.iter().zip(values) {
            columns.push(Column::new((*name).into(), vals));
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Keep the required columns, coerce numerics, drop rows without a country.
    ///
    /// Cells that are not numbers become missing values.
    fn normalize(raw: &DataFrame) -> Result<DataFrame, LoaderError> {
        let country_col = raw
            .column(COUNTRY)
            .map_err(|_| LoaderError::MissingColumn(COUNTRY.to_string()))?
            .cast(&DataType::String)?;

        let keep: Vec<Option<String>> = country_col
            .str()?
            .into_iter()
            .map(|c| c.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string))
            .collect();

        let skipped = keep.iter().filter(|c| c.is_none()).count();
        if skipped > 0 {
            debug!(rows = skipped, "rows without a country skipped");
        }

        let mut seen = HashSet::new();
        let mut countries = Vec::with_capacity(keep.len() - skipped);
        for country in keep.iter().flatten() {
            if !seen.insert(country.as_str()) {
                return Err(LoaderError::DuplicateCountry(country.clone()));
            }
            countries.push(country.clone());
        }

        let mut columns = vec![Column::new(COUNTRY.into(), countries)];

        for name in NUMERIC {
            let source = raw
                .column(name)
                .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
            // Booleans are not numbers, even though polars casts them to 0/1.
            let coerced = if source.dtype() == &DataType::Boolean {
                Column::full_null(name.into(), source.len(), &DataType::Float64)
            } else {
                source.cast(&DataType::Float64)?
            };

            let values: Vec<Option<f64>> = coerced
                .f64()?
                .into_iter()
                .zip(keep.iter())
                .filter(|(_, country)| country.is_some())
                .map(|(v, _)| v.filter(|v| v.is_finite()))
                .collect();

            let missing = values.iter().filter(|v| v.is_none()).count();
            if missing > 0 {
                debug!(column = name, cells = missing, "missing or non-numeric cells");
            }

            columns.push(Column::new(name.into(), values));
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Number of rows in the loaded table.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        other => Some(other.to_string()),
    }
}

/// Numeric coercion for workbook cells. Numeric text is parsed, anything else is missing.
fn cell_number(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}
