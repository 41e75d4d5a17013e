//! Tabular input data.
//!
//! A [`Dataset`] is a header plus string rows, the shape of an uploaded CSV.
//! Columns are looked up by name; extra columns are carried along untouched.

use crate::error::{ClimateError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column holding the city identifier.
pub const CITY_COLUMN: &str = "city";
/// Column holding the observation timestamp.
pub const TIMESTAMP_COLUMN: &str = "timestamp";
/// Column holding the observed temperature.
pub const TEMPERATURE_COLUMN: &str = "temperature";

/// Columns every temperature dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = [CITY_COLUMN, TIMESTAMP_COLUMN, TEMPERATURE_COLUMN];

/// Header-plus-rows table of string cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a dataset, checking every row has one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for row in &rows {
            if row.len() != columns.len() {
                return Err(ClimateError::DimensionMismatch {
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Read a headed CSV document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let columns: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Self::new(columns, rows)
    }

    /// Read a headed CSV file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Write the dataset as headed CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.columns)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column that must be present.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ClimateError::schema(name))
    }

    /// Check that all the named columns are present.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        for name in names {
            self.require_column(name)?;
        }
        Ok(())
    }

    /// Cell values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Distinct values of a column in order of first appearance.
    pub fn unique(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.require_column(name)?;
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for row in &self.rows {
            let value = row[idx].as_str();
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
        Ok(values)
    }

    /// Return a copy with one more column appended.
    ///
    /// An existing column of the same name is overwritten in place.
    pub fn with_column(&self, name: &str, values: Vec<String>) -> Result<Self> {
        if values.len() != self.rows.len() {
            return Err(ClimateError::DimensionMismatch {
                expected: self.rows.len(),
                got: values.len(),
            });
        }

        let mut columns = self.columns.clone();
        let mut rows = self.rows.clone();
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                columns.push(name.to_string());
                for (row, value) in rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }

        Ok(Self { columns, rows })
    }
}
