// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Everything needed to derive and use row factories.
//!
//! ```rust
//! use rowmap::prelude::*;
//!
//! #[derive(Default, RowMapped)]
//! pub struct Tag {
//!     pub label: String
//! }
//!
//! let tag = Tag::from_row(&Record::new().with("label", "urgent")).unwrap();
//! assert_eq!(tag.label, "urgent");
//! ```

pub use rowmap_core::prelude::*;
pub use rowmap_derive::RowMapped;
