// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod row_mapped;

use proc_macro::TokenStream;

/// Derive a `FromRow` factory for a struct.
///
/// Every `pub` named field not marked `#[readonly]` is read from the row
/// column of the same name, or from the column given by
/// `#[column(name = "...")]`. The struct must implement `Default`: the
/// factory starts from `Default::default()` and assigns the mapped fields in
/// declaration order.
///
/// # Example
///
/// ```rust,ignore
/// use rowmap::{FromRow, Record, RowMapped};
///
/// #[derive(Debug, Default, RowMapped)]
/// pub struct Customer {
///     pub id: i64,
///
///     #[column(name = "full_name")]
///     pub name: String,
///
///     #[readonly]
///     pub loaded_at: u64,
///
///     cache: Option<String>
/// }
///
/// let row = Record::new().with("id", 7_i64).with("full_name", "Ada");
/// let customer = Customer::from_row(&row)?;
/// ```
///
/// # Generated Code
///
/// ```rust,ignore
/// #[automatically_derived]
/// impl ::rowmap::FromRow for Customer {
///     fn from_row<__R: ::rowmap::Row>(row: &__R) -> ::core::result::Result<Self, __R::Error> {
///         let mut instance = <Self as ::core::default::Default>::default();
///         instance.id = ::rowmap::Row::get(row, "id")?;
///         instance.name = ::rowmap::Row::get(row, "full_name")?;
///         ::core::result::Result::Ok(instance)
///     }
/// }
/// ```
///
/// # Attributes
///
/// | Attribute | Level | Description |
/// |-----------|-------|-------------|
/// | `#[rowmap(crate = "path")]` | struct | Runtime crate path, default `::rowmap` |
/// | `#[column(name = "col")]` | field | Column override, used verbatim |
/// | `#[readonly]` | field | Excluded from the mapping |
#[proc_macro_derive(RowMapped, attributes(rowmap, column, readonly))]
pub fn derive_row_mapped(input: TokenStream) -> TokenStream {
    row_mapped::derive(input)
}
