// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(non_snake_case)]

use rowmap::{FromRow, Record, RowMapped};

#[derive(Debug, Default, RowMapped)]
pub struct Customer {
    pub Id: i32,

    #[column(name = "full_name")]
    pub FullName: String,

    _cache: String
}

fn main() {
    let row = Record::new()
        .with("Id", 42_i32)
        .with("full_name", "Grace Hopper")
        .with("_cache", "ignored");

    let customer = Customer::from_row(&row).unwrap();
    assert_eq!(customer.Id, 42);
    assert_eq!(customer.FullName, "Grace Hopper");
    assert!(customer._cache.is_empty());
}
