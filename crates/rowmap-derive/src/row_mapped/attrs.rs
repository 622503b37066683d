// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container attribute parsing with darling.
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `crate` | No | `::rowmap` | Path of the runtime crate in generated code |

use darling::FromDeriveInput;
use rowmap_codegen::default_runtime;

/// Struct-level attributes parsed from `#[rowmap(...)]`.
///
/// ```rust,ignore
/// #[derive(Default, RowMapped)]
/// #[rowmap(crate = "crate::db::rowmap")]
/// pub struct Customer { .. }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(rowmap))]
pub struct RowMappedAttrs {
    /// Runtime crate path.
    #[darling(rename = "crate", default = "default_runtime")]
    pub krate: syn::Path
}
