// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The row abstraction generated factories read from.
//!
//! # Overview
//!
//! - [`Row`] - keyed accessor: look a column up by name, convert it
//! - [`FromRow`] - implemented by `#[derive(RowMapped)]`
//! - [`Record`] - ordered in-memory row
//!
//! `Row` is also implemented for `HashMap<String, Value>` and
//! `BTreeMap<String, Value>`, so query results already collected into a map
//! can be mapped directly.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher
};

use crate::{
    error::RowError,
    value::{FromValue, Value}
};

/// One tabular record, addressed by column name.
///
/// Implementations decide what a missing column or an unconvertible value
/// means; generated code calls [`Row::get`] once per mapped field and
/// propagates the error unchanged.
///
/// # Example
///
/// ```rust
/// use rowmap_core::{Record, Row};
///
/// let row = Record::new().with("id", 7_i64).with("name", "Ada");
/// let id: i64 = row.get("id").unwrap();
/// let name: String = row.get("name").unwrap();
/// assert_eq!((id, name.as_str()), (7, "Ada"));
/// ```
pub trait Row {
    /// Error returned for missing or unconvertible columns.
    type Error;

    /// Read `column` and convert it into `T`.
    ///
    /// # Errors
    ///
    /// Whatever the implementation reports for a missing column or a value
    /// that `T` does not accept.
    fn get<T: FromValue>(&self, column: &str) -> Result<T, Self::Error>;
}

impl<R: Row + ?Sized> Row for &R {
    type Error = R::Error;

    fn get<T: FromValue>(&self, column: &str) -> Result<T, Self::Error> {
        (**self).get(column)
    }
}

/// Construction from a [`Row`].
///
/// Generated by `#[derive(RowMapped)]`: the factory starts from
/// `Default::default()` and assigns every mapped field from its column, in
/// field declaration order.
pub trait FromRow: Sized {
    /// Build `Self` from `row`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Row::get`].
    fn from_row<R: Row>(row: &R) -> Result<Self, R::Error>;
}

/// Ordered in-memory row.
///
/// Columns keep insertion order; inserting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<(String, Value)>
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new()
        }
    }

    /// Set a column, returning the record for chaining.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column, returning the previous value if it existed.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let column = column.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.columns.push((column, value));
                None
            }
        }
    }

    /// Raw value of a column.
    #[must_use]
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the record has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

/// Convert a looked-up value, attaching the column name to failures.
fn convert<T: FromValue>(value: Option<&Value>, column: &str) -> Result<T, RowError> {
    let value = value.ok_or_else(|| RowError::MissingColumn {
        column: column.to_owned()
    })?;
    T::from_value(value.clone()).map_err(|source| RowError::Conversion {
        column: column.to_owned(),
        source
    })
}

impl Row for Record {
    type Error = RowError;

    fn get<T: FromValue>(&self, column: &str) -> Result<T, Self::Error> {
        convert(self.value(column), column)
    }
}

impl<S: BuildHasher> Row for HashMap<String, Value, S> {
    type Error = RowError;

    fn get<T: FromValue>(&self, column: &str) -> Result<T, Self::Error> {
        convert(HashMap::get(self, column), column)
    }
}

impl Row for BTreeMap<String, Value> {
    type Error = RowError;

    fn get<T: FromValue>(&self, column: &str) -> Result<T, Self::Error> {
        convert(BTreeMap::get(self, column), column)
    }
}
