//! Data Processor Module
//! Derives percentage-change columns, filters countries and assigns highlight colors.

use super::columns::{CHANGES, COLOR, COUNTRY};
use super::highlight::{classify, HighlightToggles};
use polars::prelude::*;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// Handles table transformations. Every operation returns a new DataFrame.
pub struct DataProcessor;

impl DataProcessor {
    /// `(after - before) / before * 100`, missing unless the result is finite.
    pub fn percent_change(before: Option<f64>, after: Option<f64>) -> Option<f64> {
        let (before, after) = (before?, after?);
        if before == 0.0 {
            return None;
        }
        let change = (after - before) / before * 100.0;
        change.is_finite().then_some(change)
    }

    /// Append `Change_MA`, `Change_BA` and `Change_ALL_TER`.
    pub fn add_change_columns(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let mut result = df.clone();

        for (name, before_col, after_col) in CHANGES {
            let before = Self::numeric_column(df, before_col)?;
            let after = Self::numeric_column(df, after_col)?;

            let changes: Vec<Option<f64>> = before
                .into_iter()
                .zip(after)
                .map(|(b, a)| Self::percent_change(b, a))
                .collect();

            result.with_column(Column::new(name.into(), changes))?;
        }

        Ok(result)
    }

    /// Keep rows whose country is in `countries`, in source order.
    pub fn filter_countries(
        df: &DataFrame,
        countries: &BTreeSet<String>,
    ) -> Result<DataFrame, ProcessorError> {
        let mask: BooleanChunked = Self::column(df, COUNTRY)?
            .str()?
            .into_iter()
            .map(|c| c.is_some_and(|c| countries.contains(c)))
            .collect();

        Ok(df.filter(&mask)?)
    }

    /// Append the `Color` category column.
    pub fn assign_colors(
        df: &DataFrame,
        toggles: HighlightToggles,
    ) -> Result<DataFrame, ProcessorError> {
        let colors: Vec<&str> = Self::countries(df)?
            .iter()
            .map(|country| classify(country, toggles).label())
            .collect();

        let mut result = df.clone();
        result.with_column(Column::new(COLOR.into(), colors))?;
        Ok(result)
    }

    /// Country names in row order.
    pub fn countries(df: &DataFrame) -> Result<Vec<String>, ProcessorError> {
        Ok(Self::column(df, COUNTRY)?
            .str()?
            .into_iter()
            .map(|c| c.unwrap_or_default().to_string())
            .collect())
    }

    /// Float values of a column, NaN read as missing.
    pub fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ProcessorError> {
        let values = Self::column(df, name)?.cast(&DataType::Float64)?;
        Ok(values
            .f64()?
            .into_iter()
            .map(|v| v.filter(|v| !v.is_nan()))
            .collect())
    }

    /// String values of a column.
    pub fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, ProcessorError> {
        Ok(Self::column(df, name)?
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect())
    }

    fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, ProcessorError> {
        df.column(name)
            .map_err(|_| ProcessorError::MissingColumn(name.to_string()))
    }
}
