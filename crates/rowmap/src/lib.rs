// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod prelude;

pub use rowmap_core::{FromRow, FromValue, Record, Row, RowError, Value, ValueError};
pub use rowmap_derive::RowMapped;
