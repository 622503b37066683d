// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowmap::{FromRow, Record, RowMapped};

#[derive(Default, RowMapped)]
pub struct Account {
    pub id: i64,

    #[readonly]
    pub balance: u64,

    pub(crate) owner: String,

    note: Option<String>
}

fn main() {
    let row = Record::new().with("id", 1_i64);

    let account = Account::from_row(&row).unwrap();
    assert_eq!(account.id, 1);
    assert_eq!(account.balance, 0);
    assert!(account.owner.is_empty());
    assert!(account.note.is_none());
}
