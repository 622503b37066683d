// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attributes.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Effect |
//! |-----------|---------|--------|
//! | `name` | `#[column(name = "full_name")]` | Custom column name |
//! | positional | `#[column("full_name")]` | Same as `name` |
//! | anything else | `#[column(unique, varchar = 255)]` | Ignored |
//! | `readonly` | `#[readonly]` | Field is never assigned |

use syn::{Attribute, Expr, LitStr, Meta, Token, meta::ParseNestedMeta};

/// Parsed `#[column(...)]` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAttr {
    /// Custom column name, used verbatim.
    pub name: Option<String>
}

impl ColumnAttr {
    /// Parse a `#[column(...)]` attribute.
    ///
    /// Unknown keys are skipped together with their value. Malformed input
    /// keeps whatever was parsed before the error.
    pub fn from_attr(attr: &Attribute) -> Self {
        let mut config = Self::default();

        let Meta::List(meta_list) = &attr.meta else {
            return config;
        };

        if let Ok(lit) = meta_list.parse_args::<LitStr>() {
            config.name = Some(lit.value());
            return config;
        }

        let _ = meta_list.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if config.name.is_none() {
                    config.name = Some(value.value());
                }
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        });

        config
    }
}

/// Consume `= expr` or `(...)` after an unrecognized key.
fn skip_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        let _: Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_value(&nested))?;
    }
    Ok(())
}

/// Column name override from the first `#[column]` attribute that has one.
#[must_use]
pub fn column_override(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("column"))
        .find_map(|attr| ColumnAttr::from_attr(attr).name)
}

/// Check for the `#[readonly]` marker.
#[must_use]
pub fn is_readonly(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("readonly"))
}
