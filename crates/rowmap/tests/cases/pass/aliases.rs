// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowmap::{FromRow, Record, RowMapped as Mapped};

mod inner {
    use rowmap::prelude::*;

    #[derive(Default, RowMapped)]
    pub struct Tag {
        pub label: String
    }
}

#[derive(Default, Mapped)]
pub struct Customer {
    #[column("customer_id")]
    pub id: i64
}

#[derive(Default, rowmap::RowMapped)]
pub struct Order {
    pub r#type: String,
    #[column(name = "total", unique, varchar = 32)]
    pub amount: u32
}

fn main() {
    let row = Record::new()
        .with("customer_id", 5_i64)
        .with("label", "vip")
        .with("type", "online")
        .with("total", 120_u32);

    assert_eq!(Customer::from_row(&row).unwrap().id, 5);
    assert_eq!(inner::Tag::from_row(&row).unwrap().label, "vip");

    let order = Order::from_row(&row).unwrap();
    assert_eq!(order.r#type, "online");
    assert_eq!(order.amount, 120);
}
