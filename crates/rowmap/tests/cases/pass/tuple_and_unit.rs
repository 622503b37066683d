// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowmap::{FromRow, Record, RowMapped};

#[derive(Debug, Default, PartialEq, RowMapped)]
pub struct Pair(pub i64, pub String);

#[derive(Debug, Default, PartialEq, RowMapped)]
pub struct Marker;

#[derive(Debug, Default, PartialEq, RowMapped)]
pub struct Hidden {
    secret: String
}

fn main() {
    let row = Record::new();
    assert_eq!(Pair::from_row(&row).unwrap(), Pair::default());
    assert_eq!(Marker::from_row(&row).unwrap(), Marker);
    assert_eq!(Hidden::from_row(&row).unwrap(), Hidden::default());
}
