// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(RowMapped)]` expansion.
//!
//! rustc has already resolved the marker, so discovery is reduced to a shape
//! check. Resolution and lowering are shared with the file-scanning pipeline
//! in `rowmap-codegen`:
//!
//! ```text
//! DeriveInput ─► RowMappedAttrs (darling)
//!             └► AnnotatedType ─► resolve ─► Factory ─► TokenStream
//! ```

mod attrs;

#[cfg(test)]
mod tests;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use rowmap_codegen::{AnnotatedType, CancellationToken, Factory, resolve};
use syn::{DeriveInput, parse_macro_input};

use self::attrs::RowMappedAttrs;

/// Main entry point for the RowMapped derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    if !matches!(input.data, syn::Data::Struct(_)) {
        return Err(
            darling::Error::custom("RowMapped can only be derived for structs").with_span(&input.ident)
        );
    }

    let attrs = RowMappedAttrs::from_derive_input(input)?;
    let ty = AnnotatedType::from_derive_input(input)?;

    // A fresh token is never cancelled.
    let bindings = resolve(&ty, &CancellationToken::new())
        .map_err(|err| darling::Error::custom(err).with_span(&input.ident))?;

    let factory = Factory::new(&ty, &bindings, &attrs.krate)?;
    Ok(factory.into_token_stream())
}
