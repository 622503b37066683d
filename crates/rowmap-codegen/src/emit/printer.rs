// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rendering of a [`Factory`] to source text.

use quote::ToTokens;

use super::ir::Factory;

/// Turns a factory into source text.
///
/// Implementations must be deterministic: the same factory always renders to
/// the same text.
pub trait Printer {
    /// Render `factory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the generated tokens do not form a valid file.
    fn print(&self, factory: &Factory) -> syn::Result<String>;
}

/// `rustfmt`-like output via `prettyplease`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyPrinter;

impl Printer for PrettyPrinter {
    fn print(&self, factory: &Factory) -> syn::Result<String> {
        let file: syn::File = syn::parse2(factory.to_token_stream())?;
        Ok(prettyplease::unparse(&file))
    }
}

/// Token stream text on a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactPrinter;

impl Printer for CompactPrinter {
    fn print(&self, factory: &Factory) -> syn::Result<String> {
        let mut text = factory.to_token_stream().to_string();
        text.push('\n');
        Ok(text)
    }
}

impl<P: Printer + ?Sized> Printer for &P {
    fn print(&self, factory: &Factory) -> syn::Result<String> {
        (**self).print(factory)
    }
}
