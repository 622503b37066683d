// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors surfaced by the pipeline and the writer.
//!
//! The mapping core itself has no fatal conditions: unresolvable markers and
//! ineligible members are skipped silently. What remains is reading input,
//! rendering output and cancellation.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::cancel::Cancelled;

/// Failure of a generation pass.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A source unit is not valid Rust.
    #[error("failed to parse {unit}: {source}")]
    Parse {
        /// Module path or file the unit came from.
        unit:   String,
        /// Parser error.
        source: syn::Error
    },

    /// Generated tokens could not be rendered.
    #[error("failed to render factory for {name}: {source}")]
    Render {
        /// Qualified type name.
        name:   String,
        /// Parser error raised while re-reading generated tokens.
        source: syn::Error
    },

    /// Reading a source file or writing an artifact failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// File involved.
        path:   PathBuf,
        /// Underlying error.
        source: io::Error
    },

    /// The pass was cancelled.
    #[error(transparent)]
    Cancelled(#[from] Cancelled)
}

impl CodegenError {
    /// Check if this error is a cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
