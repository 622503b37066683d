// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structural view of the code a pass runs over.
//!
//! A [`Compilation`] is an ordered list of [`SourceUnit`]s, each a parsed file
//! together with the module path it is mounted at. Supplying the same unit
//! twice is allowed; discovery collapses the duplicates.

use std::{fs, path::Path};

use crate::{error::CodegenError, model::ModulePath};

/// One parsed source file mounted at a module path.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Module the file's items live in.
    pub module: ModulePath,

    /// Parsed file.
    pub file: syn::File
}

impl SourceUnit {
    /// Wrap an already parsed file.
    #[must_use]
    pub fn new(module: ModulePath, file: syn::File) -> Self {
        Self { module, file }
    }

    /// Parse source text mounted at `module` (e.g. `"crate::crm"`).
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Parse`] if the text is not a valid Rust file.
    pub fn parse(module: &str, source: &str) -> Result<Self, CodegenError> {
        let module = ModulePath::parse(module);
        let file = syn::parse_file(source).map_err(|source| CodegenError::Parse {
            unit: module.to_string(),
            source
        })?;
        Ok(Self { module, file })
    }

    /// Read and parse a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Io`] if the file cannot be read and
    /// [`CodegenError::Parse`] if it is not valid Rust.
    pub fn read(module: &str, path: impl AsRef<Path>) -> Result<Self, CodegenError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source
        })?;
        let file = syn::parse_file(&source).map_err(|source| CodegenError::Parse {
            unit: path.display().to_string(),
            source
        })?;
        Ok(Self {
            module: ModulePath::parse(module),
            file
        })
    }
}

/// All source units of one generation pass.
#[derive(Debug, Clone, Default)]
pub struct Compilation {
    units: Vec<SourceUnit>
}

impl Compilation {
    /// Empty compilation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit.
    pub fn push(&mut self, unit: SourceUnit) {
        self.units.push(unit);
    }

    /// Add a unit, returning the compilation for chaining.
    #[must_use]
    pub fn with(mut self, unit: SourceUnit) -> Self {
        self.push(unit);
        self
    }

    /// Units in the order they were added.
    #[must_use]
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Check if there is nothing to scan.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl From<Vec<SourceUnit>> for Compilation {
    fn from(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }
}

impl FromIterator<SourceUnit> for Compilation {
    fn from_iter<I: IntoIterator<Item = SourceUnit>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect()
        }
    }
}
