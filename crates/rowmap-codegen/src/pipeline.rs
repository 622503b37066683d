// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation pass over a whole compilation.
//!
//! ```text
//! Compilation ──discover──► [AnnotatedType] ──resolve──► [ColumnBinding] ──emit──► GeneratedArtifact ──► sink
//! ```
//!
//! Types are processed one after another on the calling thread. The
//! [`CancellationToken`] is checked throughout discovery and before each
//! stage of each type; a type
//! interrupted midway produces nothing, artifacts already handed to the sink
//! stay valid.

use tracing::debug;

use crate::{
    cancel::CancellationToken,
    compilation::Compilation,
    config::Config,
    discover::discover,
    emit::{PrettyPrinter, Printer, emit},
    error::CodegenError,
    model::GeneratedArtifact,
    resolve::resolve
};

/// Configured generation pass.
///
/// # Example
///
/// ```rust
/// use rowmap_codegen::{Compilation, Config, Pipeline, SourceUnit};
///
/// let unit = SourceUnit::parse(
///     "crate::crm",
///     r#"
///     use rowmap::RowMapped;
///
///     #[derive(Default, RowMapped)]
///     pub struct Customer {
///         pub id: i64,
///         #[column(name = "full_name")]
///         pub name: String
///     }
///     "#
/// )
/// .unwrap();
///
/// let artifacts = Pipeline::new(Config::default()).generate(&Compilation::from(vec![unit])).unwrap();
/// assert_eq!(artifacts.len(), 1);
/// assert_eq!(artifacts[0].hint_name, "crm.Customer.rowmap.rs");
/// assert!(artifacts[0].source.contains(r#"::rowmap::Row::get(row, "full_name")?"#));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<P = PrettyPrinter> {
    config:  Config,
    printer: P,
    cancel:  CancellationToken
}

impl Pipeline {
    /// Pipeline with the pretty printer.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            printer: PrettyPrinter,
            cancel: CancellationToken::new()
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<P: Printer> Pipeline<P> {
    /// Replace the printer.
    #[must_use]
    pub fn with_printer<Q: Printer>(self, printer: Q) -> Pipeline<Q> {
        Pipeline {
            config: self.config,
            printer,
            cancel: self.cancel
        }
    }

    /// Use a shared cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Token observed by this pipeline.
    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Run the pass, handing each artifact to `sink` as soon as it is ready.
    ///
    /// Returns the number of artifacts produced.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Cancelled`] when interrupted and
    /// [`CodegenError::Render`] when a factory cannot be printed.
    pub fn run<F>(&self, compilation: &Compilation, mut sink: F) -> Result<usize, CodegenError>
    where
        F: FnMut(GeneratedArtifact)
    {
        let types = discover(compilation, &self.config, &self.cancel)?;

        let mut produced = 0;
        for ty in &types {
            self.cancel.check()?;
            let bindings = resolve(ty, &self.cancel)?;

            self.cancel.check()?;
            let artifact = emit(ty, &bindings, self.config.runtime(), &self.printer)?;

            sink(artifact);
            produced += 1;
        }

        debug!(types = types.len(), produced, "generation pass finished");
        Ok(produced)
    }

    /// Run the pass and collect every artifact.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::run`]; no partial set is returned on error.
    pub fn generate(&self, compilation: &Compilation) -> Result<Vec<GeneratedArtifact>, CodegenError> {
        let mut artifacts = Vec::new();
        self.run(compilation, |artifact| artifacts.push(artifact))?;
        Ok(artifacts)
    }
}

/// Run a default pass with `config`.
///
/// # Errors
///
/// See [`Pipeline::generate`].
pub fn generate(compilation: &Compilation, config: &Config) -> Result<Vec<GeneratedArtifact>, CodegenError> {
    Pipeline::new(config.clone()).generate(compilation)
}
