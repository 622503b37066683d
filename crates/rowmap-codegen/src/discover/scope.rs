// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-module name tables.
//!
//! Derive paths are matched by what they resolve to, not by how they are
//! spelled. Each scanned module records the names it binds:
//!
//! | Source | Binding |
//! |--------|---------|
//! | `use a::b::C;` | `C` → import `a::b::C` |
//! | `use a::b::C as D;` | `D` → import `a::b::C` |
//! | `use a::b::{self};` | `b` → import `a::b` |
//! | `use a::b::*;` | glob `a::b` |
//! | `extern crate a as b;` | `b` → import `::a` |
//! | `struct C;`, `mod c { .. }`, `fn c()` | `C` / `c` → local item |
//!
//! Resolution produces absolute candidate paths: external ones start with a
//! crate name, local ones with `crate`. Imports are followed through scanned
//! modules, so `pub use rowmap::RowMapped;` in the crate root makes
//! `crate::RowMapped` resolve to `rowmap::RowMapped`.

use std::collections::HashMap;

use syn::{Ident, Item, UseTree, ext::IdentExt};

use crate::model::ModulePath;

/// Bound on import indirections followed for one path.
const MAX_DEPTH: usize = 16;

/// Path exactly as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WrittenPath {
    /// Starts with `::`, i.e. names an external crate.
    leading_colon: bool,
    segments:      Vec<String>
}

impl WrittenPath {
    fn joined(&self, tail: &[String]) -> Self {
        Self {
            leading_colon: self.leading_colon,
            segments:      concat(&self.segments, tail)
        }
    }
}

#[derive(Debug, Clone)]
enum Binding {
    /// Item declared in the module itself.
    Local,
    /// `use` import or `extern crate` alias.
    Import(WrittenPath)
}

/// Restrictions on the first segment of a path being resolved.
#[derive(Debug, Clone, Copy)]
struct Lookup<'a> {
    /// Name whose own import is being followed; `use rowmap::X` must not
    /// resolve `rowmap` through itself.
    skip:  Option<&'a str>,
    /// Glob imports may supply the first segment. Off for paths a glob
    /// already produced.
    globs: bool
}

impl Default for Lookup<'_> {
    fn default() -> Self {
        Self {
            skip:  None,
            globs: true
        }
    }
}

impl<'a> Lookup<'a> {
    fn skipping(name: &'a str) -> Self {
        Self {
            skip:  Some(name),
            globs: true
        }
    }

    fn expanded() -> Self {
        Self {
            skip:  None,
            globs: false
        }
    }
}

#[derive(Debug, Default)]
struct ModuleScope {
    bindings: HashMap<String, Binding>,
    globs:    Vec<WrittenPath>
}

/// Name tables of every scanned module.
#[derive(Debug, Default)]
pub(super) struct Scopes {
    modules: HashMap<ModulePath, ModuleScope>
}

impl Scopes {
    /// Record the names bound by `items` in `module`.
    ///
    /// Calling this again for the same module (a unit supplied twice) merges
    /// into the existing table.
    pub(super) fn record_items(&mut self, module: &ModulePath, items: &[Item]) {
        let scope = self.modules.entry(module.clone()).or_default();

        for item in items {
            match item {
                Item::Use(item_use) => {
                    let leading_colon = item_use.leading_colon.is_some();
                    flatten_use(&item_use.tree, Vec::new(), leading_colon, scope);
                }
                Item::ExternCrate(extern_crate) => {
                    let crate_name = name_of(&extern_crate.ident);
                    let bound = extern_crate
                        .rename
                        .as_ref()
                        .map_or_else(|| crate_name.clone(), |(_, rename)| name_of(rename));
                    let target = if crate_name == "self" {
                        WrittenPath {
                            leading_colon: false,
                            segments:      vec!["crate".to_owned()]
                        }
                    } else {
                        WrittenPath {
                            leading_colon: true,
                            segments:      vec![crate_name]
                        }
                    };
                    if bound != "_" {
                        scope.bindings.insert(bound, Binding::Import(target));
                    }
                }
                other => {
                    if let Some(ident) = declared_ident(other) {
                        scope.bindings.insert(name_of(ident), Binding::Local);
                    }
                }
            }
        }
    }

    /// Absolute candidate paths `path` may refer to from inside `module`.
    ///
    /// Empty when the path cannot be resolved at all. Every lookup state is
    /// expanded at most once per call, so glob cycles such as sibling modules
    /// importing `super::*` from a root that re-exports them stay linear.
    pub(super) fn resolve(&self, module: &ModulePath, path: &syn::Path) -> Vec<Vec<String>> {
        let written = WrittenPath {
            leading_colon: path.leading_colon.is_some(),
            segments:      path.segments.iter().map(|s| name_of(&s.ident)).collect()
        };
        let mut search = Search::default();
        self.resolve_written(module, &written, Lookup::default(), 0, &mut search);
        search.out
    }

    fn resolve_written(
        &self,
        module: &ModulePath,
        path: &WrittenPath,
        lookup: Lookup<'_>,
        depth: usize,
        search: &mut Search
    ) {
        if depth > MAX_DEPTH || path.segments.is_empty() {
            return;
        }
        if path.leading_colon {
            search.push(path.segments.clone());
            return;
        }
        if !search.enter(State::written(module, path, lookup), depth) {
            return;
        }

        let first = path.segments[0].as_str();
        let rest = &path.segments[1..];

        match first {
            "crate" => self.canonicalize(path.segments.clone(), depth, search),
            "self" => self.canonicalize(concat(module.segments(), rest), depth, search),
            "super" => {
                let supers = path.segments.iter().take_while(|s| *s == "super").count();
                let mut base = module.clone();
                for _ in 0..supers {
                    match base.parent() {
                        Some(parent) => base = parent,
                        None => return
                    }
                }
                self.canonicalize(concat(base.segments(), &path.segments[supers..]), depth, search);
            }
            _ => {
                let scope = self.modules.get(module);
                let binding = scope
                    .and_then(|scope| scope.bindings.get(first))
                    .filter(|_| lookup.skip != Some(first));

                match binding {
                    Some(Binding::Local) => {
                        self.canonicalize(concat(module.segments(), &path.segments), depth, search);
                    }
                    Some(Binding::Import(target)) => {
                        self.resolve_written(module, &target.joined(rest), Lookup::skipping(first), depth + 1, search);
                    }
                    None => {
                        let globs = scope.map(|s| s.globs.as_slice()).unwrap_or_default();
                        for glob in globs.iter().filter(|_| lookup.globs) {
                            self.resolve_written(module, &glob.joined(&path.segments), Lookup::expanded(), depth + 1, search);
                        }
                        // Extern prelude: `rowmap::RowMapped` without an import.
                        if !rest.is_empty() {
                            search.push(path.segments.clone());
                        }
                    }
                }
            }
        }
    }

    /// Follow imports for a `crate::...` path through scanned modules.
    fn canonicalize(&self, absolute: Vec<String>, depth: usize, search: &mut Search) {
        if depth > MAX_DEPTH || !search.enter(State::Canonical(absolute.clone()), depth) {
            return;
        }

        for split in (1..absolute.len()).rev() {
            let module = ModulePath::from_segments(absolute[..split].to_vec());
            let Some(scope) = self.modules.get(&module) else {
                continue;
            };
            let name = absolute[split].as_str();
            let rest = &absolute[split + 1..];

            match scope.bindings.get(name) {
                Some(Binding::Import(target)) => {
                    self.resolve_written(&module, &target.joined(rest), Lookup::skipping(name), depth + 1, search);
                }
                Some(Binding::Local) => search.push(absolute),
                None if !scope.globs.is_empty() => {
                    let tail = &absolute[split..];
                    for glob in &scope.globs {
                        self.resolve_written(&module, &glob.joined(tail), Lookup::expanded(), depth + 1, search);
                    }
                }
                None => search.push(absolute)
            }
            return;
        }

        search.push(absolute);
    }
}

/// Lookup already expanded during one [`Scopes::resolve`] call.
#[derive(Debug, PartialEq, Eq, Hash)]
enum State {
    Written {
        module:        ModulePath,
        leading_colon: bool,
        segments:      Vec<String>,
        skip:          Option<String>,
        globs:         bool
    },
    Canonical(Vec<String>)
}

impl State {
    fn written(module: &ModulePath, path: &WrittenPath, lookup: Lookup<'_>) -> Self {
        Self::Written {
            module:        module.clone(),
            leading_colon: path.leading_colon,
            segments:      path.segments.clone(),
            skip:          lookup.skip.map(str::to_owned),
            globs:         lookup.globs
        }
    }
}

/// Bookkeeping of one [`Scopes::resolve`] call.
#[derive(Debug, Default)]
struct Search {
    /// Shallowest depth each state was expanded at.
    seen: HashMap<State, usize>,
    out:  Vec<Vec<String>>
}

impl Search {
    /// Check if `state` still needs expanding at `depth`.
    ///
    /// A state reached again at the same or a greater depth cannot produce
    /// anything new.
    fn enter(&mut self, state: State, depth: usize) -> bool {
        match self.seen.get(&state) {
            Some(&shallowest) if shallowest <= depth => false,
            _ => {
                self.seen.insert(state, depth);
                true
            }
        }
    }

    fn push(&mut self, candidate: Vec<String>) {
        if !self.out.contains(&candidate) {
            self.out.push(candidate);
        }
    }
}

fn flatten_use(tree: &UseTree, prefix: Vec<String>, leading_colon: bool, scope: &mut ModuleScope) {
    match tree {
        UseTree::Path(path) => {
            let mut prefix = prefix;
            prefix.push(name_of(&path.ident));
            flatten_use(&path.tree, prefix, leading_colon, scope);
        }
        UseTree::Name(name) => {
            let ident = name_of(&name.ident);
            if ident == "self" {
                if let Some(last) = prefix.last().cloned() {
                    bind_import(scope, last, prefix, leading_colon);
                }
            } else {
                let segments = concat(&prefix, std::slice::from_ref(&ident));
                bind_import(scope, ident, segments, leading_colon);
            }
        }
        UseTree::Rename(rename) => {
            let ident = name_of(&rename.ident);
            let segments = if ident == "self" {
                prefix
            } else {
                concat(&prefix, &[ident])
            };
            bind_import(scope, name_of(&rename.rename), segments, leading_colon);
        }
        UseTree::Glob(_) => scope.globs.push(WrittenPath {
            leading_colon,
            segments: prefix
        }),
        UseTree::Group(group) => {
            for tree in &group.items {
                flatten_use(tree, prefix.clone(), leading_colon, scope);
            }
        }
    }
}

fn bind_import(scope: &mut ModuleScope, name: String, segments: Vec<String>, leading_colon: bool) {
    // `use x as _;` binds nothing
    if name == "_" || segments.is_empty() {
        return;
    }
    scope.bindings.insert(
        name,
        Binding::Import(WrittenPath {
            leading_colon,
            segments
        })
    );
}

/// Name an item binds in its module's type or value namespace.
fn declared_ident(item: &Item) -> Option<&Ident> {
    match item {
        Item::Const(i) => Some(&i.ident),
        Item::Enum(i) => Some(&i.ident),
        Item::Fn(i) => Some(&i.sig.ident),
        Item::Macro(i) => i.ident.as_ref(),
        Item::Mod(i) => Some(&i.ident),
        Item::Static(i) => Some(&i.ident),
        Item::Struct(i) => Some(&i.ident),
        Item::Trait(i) => Some(&i.ident),
        Item::TraitAlias(i) => Some(&i.ident),
        Item::Type(i) => Some(&i.ident),
        Item::Union(i) => Some(&i.ident),
        _ => None
    }
}

pub(super) fn name_of(ident: &Ident) -> String {
    ident.unraw().to_string()
}

fn concat(head: &[String], tail: &[String]) -> Vec<String> {
    head.iter().chain(tail).cloned().collect()
}
