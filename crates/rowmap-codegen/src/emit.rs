// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code emission.
//!
//! A resolved type is lowered to a [`Factory`] and rendered by a [`Printer`].
//! The artifact text is a fixed header line followed by the printed code:
//!
//! ```text
//! // @generated by rowmap-codegen from crate::crm::Customer. Do not edit.
//! #[automatically_derived]
//! impl ::rowmap::FromRow for crate::crm::Customer { .. }
//! ```
//!
//! Nothing here consults a clock, the environment or hash-map order, so the
//! same input always yields byte-identical text.

pub mod ir;
pub mod printer;


use tracing::debug;

pub use self::{
    ir::{Assignment, Factory},
    printer::{CompactPrinter, PrettyPrinter, Printer}
};
use crate::{
    error::CodegenError,
    model::{AnnotatedType, ColumnBinding, GeneratedArtifact}
};

/// Render the artifact for one type.
///
/// # Errors
///
/// Returns [`CodegenError::Render`] if the generated code cannot be printed.
pub fn emit<P: Printer + ?Sized>(
    ty: &AnnotatedType,
    bindings: &[ColumnBinding],
    runtime: &syn::Path,
    printer: &P
) -> Result<GeneratedArtifact, CodegenError> {
    let render_error = |source| CodegenError::Render {
        name: ty.name.to_string(),
        source
    };

    let factory = Factory::new(ty, bindings, runtime).map_err(render_error)?;
    let code = printer.print(&factory).map_err(render_error)?;

    let artifact = GeneratedArtifact {
        name:      ty.name.clone(),
        hint_name: ty.name.hint_name(),
        source:    format!("{}\n{code}", header(ty))
    };
    debug!(ty = %ty.name, hint = %artifact.hint_name, assignments = bindings.len(), "factory emitted");
    Ok(artifact)
}

fn header(ty: &AnnotatedType) -> String {
    format!("// @generated by rowmap-codegen from {}. Do not edit.", ty.name)
}
