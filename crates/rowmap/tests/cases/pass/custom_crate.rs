// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod db {
    pub use rowmap::*;
}

use rowmap::{Record, RowMapped};

#[derive(Default, RowMapped)]
#[rowmap(crate = "crate::db")]
pub struct Order {
    pub id: i64
}

fn main() {
    let row = Record::new().with("id", 3_i64);
    let order = <Order as db::FromRow>::from_row(&row).unwrap();
    assert_eq!(order.id, 3);
}
