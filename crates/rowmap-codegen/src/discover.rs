// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type discovery.
//!
//! Scans every struct of a [`Compilation`] and keeps those whose
//! `#[derive(...)]` list names the marker. Derives inside `#[cfg_attr(..)]`
//! count whatever the predicate, since no `cfg` is known at scan time. Names are matched after
//! resolution through the enclosing module's imports (see [`scope`]), so
//!
//! ```rust,ignore
//! use rowmap::RowMapped as Mapped;
//!
//! #[derive(Mapped)]          // matches
//! pub struct Customer { .. }
//!
//! mod other {
//!     use not_rowmap::RowMapped;
//!
//!     #[derive(RowMapped)]   // does not match
//!     pub struct Decoy { .. }
//! }
//! ```
//!
//! A reference that resolves to nothing is a non-match, never an error.
//! The same declaration seen twice (a unit supplied more than once) yields one
//! [`AnnotatedType`]. The only failure is cancellation, observed per unit and
//! per candidate struct.

mod scope;


use std::collections::{HashMap, HashSet};

use syn::{Attribute, ImplItem, Item, ItemStruct, Meta, Token, Type, punctuated::Punctuated};
use tracing::{debug, trace};

use self::scope::{Scopes, name_of};
use crate::{
    cancel::{CancellationToken, Cancelled},
    compilation::Compilation,
    config::Config,
    model::{AnnotatedType, ModulePath, QualifiedName}
};

struct Candidate<'a> {
    module: ModulePath,
    item:   &'a ItemStruct
}

type ImplTable<'a> = HashMap<(ModulePath, String), Vec<&'a ImplItem>>;

/// Find all distinct marker-carrying structs, in first-seen order.
///
/// # Example
///
/// ```rust
/// use rowmap_codegen::{CancellationToken, Compilation, Config, SourceUnit, discover};
///
/// let unit = SourceUnit::parse(
///     "crate::crm",
///     "use rowmap::RowMapped; #[derive(Default, RowMapped)] pub struct Customer { pub id: i64 }"
/// )
/// .unwrap();
/// let compilation = Compilation::from(vec![unit]);
/// let types = discover(&compilation, &Config::default(), &CancellationToken::new()).unwrap();
/// assert_eq!(types.len(), 1);
/// assert_eq!(types[0].name.to_string(), "crate::crm::Customer");
/// ```
///
/// # Errors
///
/// Returns [`Cancelled`] once `cancel` is cancelled. Nothing found so far is
/// returned in that case.
pub fn discover(
    compilation: &Compilation,
    config: &Config,
    cancel: &CancellationToken
) -> Result<Vec<AnnotatedType>, Cancelled> {
    cancel.check()?;

    let mut scopes = Scopes::default();
    let mut candidates = Vec::new();
    let mut impls = ImplTable::new();

    for unit in compilation.units() {
        cancel.check()?;
        walk(&unit.module, &unit.file.items, &mut scopes, &mut candidates, &mut impls);
    }

    let mut seen = HashSet::new();
    let mut types = Vec::new();

    for candidate in candidates {
        cancel.check()?;
        let name = QualifiedName::new(candidate.module.clone(), candidate.item.ident.clone());
        if !carries_marker(&candidate, &scopes, config) {
            continue;
        }
        if !seen.insert(name.clone()) {
            trace!(ty = %name, "duplicate declaration collapsed");
            continue;
        }

        let impl_items = impls
            .get(&(candidate.module.clone(), name_of(&candidate.item.ident)))
            .map(|items| distinct(items))
            .unwrap_or_default();

        debug!(ty = %name, members = candidate.item.fields.len() + impl_items.len(), "discovered row-mapped type");
        types.push(AnnotatedType::from_struct(candidate.module, candidate.item, &impl_items));
    }

    debug!(count = types.len(), "discovery finished");
    Ok(types)
}

fn walk<'a>(
    module: &ModulePath,
    items: &'a [Item],
    scopes: &mut Scopes,
    candidates: &mut Vec<Candidate<'a>>,
    impls: &mut ImplTable<'a>
) {
    scopes.record_items(module, items);

    for item in items {
        match item {
            Item::Struct(item) => candidates.push(Candidate {
                module: module.clone(),
                item
            }),
            Item::Impl(item) if item.trait_.is_none() => {
                if let Some(target) = impl_target(&item.self_ty) {
                    impls
                        .entry((module.clone(), target))
                        .or_default()
                        .extend(item.items.iter());
                }
            }
            Item::Mod(item) => {
                if let Some((_, content)) = &item.content {
                    let child = module.child(&name_of(&item.ident));
                    walk(&child, content, scopes, candidates, impls);
                }
            }
            _ => {}
        }
    }
}

/// Simple name of the type an inherent impl is for.
fn impl_target(self_ty: &Type) -> Option<String> {
    let Type::Path(type_path) = self_ty else {
        return None;
    };
    if type_path.qself.is_some() || type_path.path.segments.len() != 1 {
        return None;
    }
    type_path.path.segments.first().map(|segment| name_of(&segment.ident))
}

fn carries_marker(candidate: &Candidate<'_>, scopes: &Scopes, config: &Config) -> bool {
    derive_paths(&candidate.item.attrs).iter().any(|path| {
        let resolved = scopes.resolve(&candidate.module, path);
        let matched = resolved.iter().any(|segments| config.is_marker(segments));
        if !matched {
            let derive = quote::quote!(#path).to_string();
            trace!(module = %candidate.module, %derive, ?resolved, "derive is not the marker");
        }
        matched
    })
}

/// Paths listed by `#[derive(..)]`, including derives nested in `#[cfg_attr(..)]`.
fn derive_paths(attrs: &[Attribute]) -> Vec<syn::Path> {
    let mut paths = Vec::new();
    for attr in attrs {
        collect_derives(&attr.meta, &mut paths);
    }
    paths
}

fn collect_derives(meta: &Meta, paths: &mut Vec<syn::Path>) {
    let Meta::List(list) = meta else {
        return;
    };
    if list.path.is_ident("derive") {
        if let Ok(listed) = list.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated) {
            paths.extend(listed);
        }
    } else if list.path.is_ident("cfg_attr") {
        // predicates are not evaluated
        if let Ok(nested) = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated) {
            for meta in nested.iter().skip(1) {
                collect_derives(meta, paths);
            }
        }
    }
}

/// Impl items without repeats from units supplied more than once.
fn distinct(items: &[&ImplItem]) -> Vec<ImplItem> {
    let mut out: Vec<ImplItem> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(*item) {
            out.push((*item).clone());
        }
    }
    out
}
