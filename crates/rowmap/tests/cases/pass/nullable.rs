// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use rowmap::{FromRow, RowMapped, Value};

#[derive(Default, RowMapped)]
pub struct Profile {
    pub nickname: Option<String>,
    pub age: Option<u8>,
    pub raw: Value
}

fn main() {
    let mut row = HashMap::new();
    row.insert("nickname".to_owned(), Value::Null);
    row.insert("age".to_owned(), Value::Int(31));
    row.insert("raw".to_owned(), Value::Bytes(vec![1, 2]));

    let profile = Profile::from_row(&row).unwrap();
    assert!(profile.nickname.is_none());
    assert_eq!(profile.age, Some(31));
    assert_eq!(profile.raw, Value::Bytes(vec![1, 2]));
}
