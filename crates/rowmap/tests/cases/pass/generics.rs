// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::marker::PhantomData;

use rowmap::{FromRow, Record, RowMapped};

#[derive(Default, RowMapped)]
pub struct Tagged<T: Clone>
where
    T: Send
{
    pub id: i64,
    marker: PhantomData<T>
}

#[derive(Default, RowMapped)]
pub struct Borrowed<'a> {
    pub id: i64,
    label: &'a str
}

fn main() {
    let row = Record::new().with("id", 9_i64);

    let tagged = Tagged::<String>::from_row(&row).unwrap();
    assert_eq!(tagged.id, 9);
    let _ = tagged.marker;

    let borrowed = Borrowed::from_row(&row).unwrap();
    assert_eq!(borrowed.id, 9);
    assert!(borrowed.label.is_empty());
}
