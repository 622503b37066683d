// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowmap::RowMapped;

#[derive(RowMapped)]
pub enum Status {
    Active,
    Inactive
}

fn main() {}
