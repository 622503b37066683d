// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports.
//!
//! ```rust
//! use rowmap_core::prelude::*;
//! ```

pub use crate::{FromRow, FromValue, Record, Row, RowError, Value, ValueError};
