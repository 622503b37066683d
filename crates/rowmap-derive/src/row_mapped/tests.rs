// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use quote::quote;
use syn::parse_quote;

use super::*;

fn expand_ok(input: DeriveInput) -> String {
    expand(&input).unwrap().to_string()
}

#[test]
fn default_runtime_path() {
    let input: DeriveInput = parse_quote! {
        #[derive(RowMapped)]
        pub struct Customer {
            pub id: i64
        }
    };
    let attrs = RowMappedAttrs::from_derive_input(&input).unwrap();
    let krate = attrs.krate;
    assert_eq!(quote!(#krate).to_string(), quote!(::rowmap).to_string());
}

#[test]
fn crate_override_as_string() {
    let input: DeriveInput = parse_quote! {
        #[rowmap(crate = "crate::db::rowmap")]
        pub struct Customer;
    };
    let attrs = RowMappedAttrs::from_derive_input(&input).unwrap();
    let krate = attrs.krate;
    assert_eq!(quote!(#krate).to_string(), quote!(crate::db::rowmap).to_string());
}

#[test]
fn unknown_container_key_is_an_error() {
    let input: DeriveInput = parse_quote! {
        #[rowmap(table = "customers")]
        pub struct Customer;
    };
    assert!(expand(&input).is_err());
}

#[test]
fn enum_is_rejected() {
    let input: DeriveInput = parse_quote! {
        pub enum Status { Active }
    };
    let err = expand(&input).unwrap_err();
    assert_eq!(err.to_string(), "RowMapped can only be derived for structs");
}

#[test]
fn union_is_rejected() {
    let input: DeriveInput = parse_quote! {
        pub union Bits { a: u32, b: f32 }
    };
    assert!(expand(&input).is_err());
}

#[test]
fn customer_expansion() {
    let tokens = expand_ok(parse_quote! {
        #[derive(Default, RowMapped)]
        pub struct Customer {
            pub Id: i32,
            #[column(name = "full_name")]
            pub FullName: String,
            _cache: String
        }
    });
    let expected = quote! {
        #[automatically_derived]
        impl ::rowmap::FromRow for Customer {
            fn from_row<__R: ::rowmap::Row>(row: &__R) -> ::core::result::Result<Self, __R::Error> {
                let mut instance = <Self as ::core::default::Default>::default();
                instance.Id = ::rowmap::Row::get(row, "Id")?;
                instance.FullName = ::rowmap::Row::get(row, "full_name")?;
                ::core::result::Result::Ok(instance)
            }
        }
    };
    assert_eq!(tokens, expected.to_string());
}

#[test]
fn expansion_uses_custom_crate() {
    let tokens = expand_ok(parse_quote! {
        #[rowmap(crate = "crate::db")]
        pub struct Order {
            pub id: i64
        }
    });
    assert!(tokens.contains(&quote!(impl crate::db::FromRow for Order).to_string()));
}

#[test]
fn tuple_and_unit_structs_get_empty_factories() {
    for input in [
        parse_quote!(pub struct Pair(pub i64, pub String);),
        parse_quote!(pub struct Marker;)
    ] {
        let tokens = expand_ok(input);
        assert!(tokens.contains(&quote!(let instance =).to_string()));
        assert!(!tokens.contains("Row :: get"));
    }
}

#[test]
fn expansion_is_deterministic() {
    let input: DeriveInput = parse_quote! {
        pub struct Customer {
            pub b: i64,
            pub a: i64,
            #[column("c")]
            pub c_field: i64
        }
    };
    assert_eq!(expand_ok(input.clone()), expand_ok(input));
}
