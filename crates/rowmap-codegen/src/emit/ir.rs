// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Factory IR.
//!
//! ```text
//! Factory
//! ├── target: Path              (Customer | crate::crm::Customer)
//! ├── generics: Generics
//! ├── runtime: Path             (::rowmap)
//! └── assignments: Vec<Assignment>
//!     └── Assignment { field, column }
//! ```
//!
//! Lowered to tokens by its [`ToTokens`] impl:
//!
//! ```rust,ignore
//! #[automatically_derived]
//! impl ::rowmap::FromRow for Customer {
//!     fn from_row<__R: ::rowmap::Row>(row: &__R) -> ::core::result::Result<Self, __R::Error> {
//!         let mut instance = <Self as ::core::default::Default>::default();
//!         instance.Id = ::rowmap::Row::get(row, "Id")?;
//!         ::core::result::Result::Ok(instance)
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Generics, Ident, parse_quote};

use crate::model::{AnnotatedType, ColumnBinding};

/// One `instance.field = row.get("column")?` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Field assigned.
    pub field: Ident,

    /// Column read.
    pub column: String
}

impl From<&ColumnBinding> for Assignment {
    fn from(binding: &ColumnBinding) -> Self {
        Self {
            field:  binding.field.clone(),
            column: binding.column.clone()
        }
    }
}

/// Factory for one type.
#[derive(Debug, Clone)]
pub struct Factory {
    /// Type being built.
    pub target: syn::Path,

    /// Generic parameters of the target.
    pub generics: Generics,

    /// Path of the runtime crate providing `Row` and `FromRow`.
    pub runtime: syn::Path,

    /// Assignments in binding order.
    pub assignments: Vec<Assignment>
}

impl Factory {
    /// Lower a resolved type.
    ///
    /// The target is the bare ident for derive input and the qualified path
    /// for scanned types.
    ///
    /// # Errors
    ///
    /// Returns an error if the qualified name cannot form a path.
    pub fn new(ty: &AnnotatedType, bindings: &[ColumnBinding], runtime: &syn::Path) -> syn::Result<Self> {
        Ok(Self {
            target:      ty.name.to_path()?,
            generics:    ty.generics.clone(),
            runtime:     runtime.clone(),
            assignments: bindings.iter().map(Assignment::from).collect()
        })
    }

    /// Check if the factory assigns nothing.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl ToTokens for Factory {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            target,
            generics,
            runtime,
            assignments
        } = self;

        // Generic types only build when their Default impl applies.
        let mut generics = generics.clone();
        if !generics.params.is_empty() {
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(Self: ::core::default::Default));
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let (row, binding) = if self.is_degenerate() {
            (format_ident!("_row"), quote!(let instance))
        } else {
            (format_ident!("row"), quote!(let mut instance))
        };

        let statements = assignments.iter().map(|Assignment { field, column }| {
            quote! {
                instance.#field = #runtime::Row::get(#row, #column)?;
            }
        });

        tokens.extend(quote! {
            #[automatically_derived]
            impl #impl_generics #runtime::FromRow for #target #ty_generics #where_clause {
                fn from_row<__R: #runtime::Row>(#row: &__R) -> ::core::result::Result<Self, __R::Error> {
                    #binding = <Self as ::core::default::Default>::default();
                    #(#statements)*
                    ::core::result::Result::Ok(instance)
                }
            }
        });
    }
}
