// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors reported by the bundled row implementations.

use thiserror::Error;

use crate::value::ValueError;

/// Lookup failure on a [`Record`](crate::Record) or map-backed row.
///
/// Generated factories never produce this error themselves; they propagate
/// whatever the row returns, so a missing column surfaces at the call site of
/// `from_row`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    /// The row has no column with this name.
    #[error("column `{column}` is not present in the row")]
    MissingColumn {
        /// Requested column name.
        column: String
    },

    /// The column exists but its value does not fit the field type.
    #[error("column `{column}` could not be converted: {source}")]
    Conversion {
        /// Requested column name.
        column: String,
        /// Underlying conversion failure.
        source: ValueError
    }
}

impl RowError {
    /// Column the error refers to.
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::MissingColumn { column } | Self::Conversion { column, .. } => column
        }
    }
}
