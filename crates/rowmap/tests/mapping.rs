// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime behaviour of derived factories.

#![allow(non_snake_case)]

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap}
};

use rowmap::{FromRow, FromValue, Record, Row, RowError, RowMapped, Value, ValueError};

#[derive(Debug, Default, PartialEq, RowMapped)]
pub struct Customer {
    pub Id: i32,

    #[column(name = "full_name")]
    pub FullName: String,

    _cache: String
}

#[derive(Debug, Default, RowMapped)]
pub struct Order {
    pub id: i64,
    pub customer: String,
    pub total: u32
}

fn customer_row() -> Record {
    Record::new().with("Id", 1_i32).with("full_name", "Ada")
}

#[test]
fn customer_from_record() {
    let customer = Customer::from_row(&customer_row()).unwrap();
    assert_eq!(
        customer,
        Customer {
            Id:       1,
            FullName: "Ada".to_string(),
            _cache:   String::new()
        }
    );
}

#[test]
fn field_name_is_not_consulted_when_overridden() {
    let row = Record::new().with("Id", 1_i32).with("FullName", "Ada");
    let err = Customer::from_row(&row).unwrap_err();
    assert_eq!(
        err,
        RowError::MissingColumn {
            column: "full_name".to_string()
        }
    );
}

#[test]
fn missing_column_surfaces_at_call_site() {
    let err = Order::from_row(&Record::new().with("id", 1_i64)).unwrap_err();
    assert_eq!(err.column(), "customer");
}

#[test]
fn conversion_failure_names_column() {
    let row = Record::new()
        .with("id", 1_i64)
        .with("customer", "Ada")
        .with("total", -5_i64);
    let err = Order::from_row(&row).unwrap_err();
    assert!(matches!(
        err,
        RowError::Conversion {
            ref column,
            source: ValueError::OutOfRange { .. }
        } if column == "total"
    ));
}

#[test]
fn extra_columns_are_ignored() {
    let row = customer_row().with("unused", true).with("_cache", "x");
    let customer = Customer::from_row(&row).unwrap();
    assert!(customer._cache.is_empty());
}

#[test]
fn map_backed_rows() {
    let hash: HashMap<String, Value> = [
        ("Id".to_string(), Value::Int(2)),
        ("full_name".to_string(), Value::from("Bob"))
    ]
    .into_iter()
    .collect();
    let tree: BTreeMap<String, Value> = hash.clone().into_iter().collect();

    assert_eq!(Customer::from_row(&hash).unwrap().Id, 2);
    assert_eq!(Customer::from_row(&tree).unwrap().FullName, "Bob");
}

/// Row that records the order columns are read in.
#[derive(Default)]
struct Recording {
    reads: RefCell<Vec<String>>
}

impl Row for Recording {
    type Error = ValueError;

    fn get<T: FromValue>(&self, column: &str) -> Result<T, Self::Error> {
        self.reads.borrow_mut().push(column.to_owned());
        let value = match column {
            "id" | "total" => Value::Uint(1),
            _ => Value::Text(column.to_owned())
        };
        T::from_value(value)
    }
}

#[test]
fn columns_are_read_once_in_declaration_order() {
    let row = Recording::default();
    let order = Order::from_row(&row).unwrap();
    assert_eq!(order.customer, "customer");
    assert_eq!(*row.reads.borrow(), ["id", "customer", "total"]);
}

#[test]
fn custom_row_error_type_is_propagated() {
    #[derive(Debug, Default, RowMapped)]
    pub struct Flag {
        pub enabled: bool
    }

    let err = Flag::from_row(&Recording::default()).unwrap_err();
    assert!(matches!(err, ValueError::TypeMismatch { .. }));
}

#[test]
fn first_failure_stops_the_factory() {
    let row = Recording::default();
    #[derive(Debug, Default, RowMapped)]
    pub struct Mixed {
        pub name: String,
        pub flag: bool,
        pub id: u8
    }

    assert!(Mixed::from_row(&row).is_err());
    assert_eq!(*row.reads.borrow(), ["name", "flag"]);
}

#[test]
fn borrowed_row_is_a_row() {
    let record = customer_row();
    let by_ref: &Record = &record;
    assert_eq!(Customer::from_row(&by_ref).unwrap().Id, 1);
}
