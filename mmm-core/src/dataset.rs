//! In-memory column store shared by the fit, decomposition, and
//! optimization paths. Raw series are read-only inputs; every column
//! must have the same length T.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Column-oriented dataset: one f64 series per named column, with an
/// optional weekly date index labelling the periods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    len: usize,
    columns: BTreeMap<String, Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    week_index: Option<Vec<NaiveDate>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (name, values) pairs. All series must share one length.
    pub fn from_columns<I>(columns: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        let mut dataset = Self::new();
        for (name, values) in columns {
            dataset.insert(name, values)?;
        }
        Ok(dataset)
    }

    /// Insert a column, rejecting length mismatches against existing columns.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<(), ModelError> {
        let name = name.into();
        if self.columns.is_empty() {
            self.len = values.len();
        } else if values.len() != self.len {
            return Err(ModelError::LengthMismatch {
                column: name,
                expected: self.len,
                actual: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Label the periods with consecutive weeks starting at `start`.
    ///
    /// Call after the columns are in place; the index length follows the
    /// current period count.
    pub fn with_week_index(mut self, start: NaiveDate) -> Self {
        self.week_index = Some(
            (0..self.len)
                .map(|i| start + Duration::weeks(i as i64))
                .collect(),
        );
        self
    }

    /// Attach an explicit period index, rejecting length mismatches.
    pub fn set_week_index(&mut self, weeks: Vec<NaiveDate>) -> Result<(), ModelError> {
        if weeks.len() != self.len {
            return Err(ModelError::LengthMismatch {
                column: "week".to_string(),
                expected: self.len,
                actual: weeks.len(),
            });
        }
        self.week_index = Some(weeks);
        Ok(())
    }

    /// Weekly date labels for the periods, when attached.
    pub fn week_index(&self) -> Option<&[NaiveDate]> {
        self.week_index.as_deref()
    }

    /// Number of periods T.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0 || self.columns.is_empty()
    }

    pub fn column(&self, name: &str) -> Result<&[f64], ModelError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ModelError::MissingColumn {
                name: name.to_string(),
            })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Check that the target and every named series column exist.
    pub fn require_columns<'a, I>(&self, names: I) -> Result<(), ModelError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            if !self.has_column(name) {
                return Err(ModelError::MissingColumn {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Replace NaN entries in the named columns with 0.0.
    ///
    /// Returns the number of entries filled so the caller can log a
    /// warning when the count is nonzero.
    pub fn fill_nan_with_zero<'a, I>(&mut self, names: I) -> Result<usize, ModelError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut filled = 0;
        for name in names {
            let values = self
                .columns
                .get_mut(name)
                .ok_or_else(|| ModelError::MissingColumn {
                    name: name.to_string(),
                })?;
            for v in values.iter_mut() {
                if v.is_nan() {
                    *v = 0.0;
                    filled += 1;
                }
            }
        }
        Ok(filled)
    }
}
