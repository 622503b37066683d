// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for rowmap.
//!
//! This crate provides the row abstraction that `#[derive(RowMapped)]`
//! generated factories read from. It can also be used standalone for manual
//! implementations.
//!
//! # Overview
//!
//! - [`Row`] - keyed accessor over one tabular record
//! - [`FromRow`] - factory trait implemented by generated code
//! - [`Value`] / [`FromValue`] - loosely-typed cell and its conversions
//! - [`Record`] - ordered in-memory row
//! - [`prelude`] - convenient re-exports
//!
//! # Usage
//!
//! Most users should use `rowmap` directly, which re-exports this crate.
//! For manual implementations:
//!
//! ```rust
//! use rowmap_core::prelude::*;
//!
//! #[derive(Default)]
//! struct Point {
//!     x: i64,
//!     y: i64
//! }
//!
//! impl FromRow for Point {
//!     fn from_row<R: Row>(row: &R) -> Result<Self, R::Error> {
//!         let mut point = Self::default();
//!         point.x = row.get("x")?;
//!         point.y = row.get("y")?;
//!         Ok(point)
//!     }
//! }
//!
//! let row = Record::new().with("x", 1_i64).with("y", 2_i64);
//! let point = Point::from_row(&row).unwrap();
//! assert_eq!((point.x, point.y), (1, 2));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod prelude;
mod row;
mod value;

pub use error::RowError;
pub use row::{FromRow, Record, Row};
pub use value::{FromValue, Value, ValueError};
