// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data passed between the pipeline stages.
//!
//! # Data Structures
//!
//! ```text
//! AnnotatedType                 (discovery output)
//! ├── name: QualifiedName       (module path + simple ident)
//! ├── generics: Generics
//! └── members: Vec<Member>      (fields, then inherent impl items)
//!
//! ColumnBinding                 (resolver output, one per mapped field)
//! ├── field: Ident
//! ├── column: String
//! └── ty: Type                  (carried through, never interpreted)
//!
//! GeneratedArtifact             (emitter output, one per type)
//! ├── name: QualifiedName
//! ├── hint_name: String         ("crm.Customer.rowmap.rs")
//! └── source: String
//! ```

use std::fmt;

use proc_macro2::Span;
use syn::{
    Attribute, DeriveInput, Field, Generics, Ident, ImplItem, ItemStruct, Type, Visibility,
    ext::IdentExt
};

/// Suffix appended to every artifact hint name.
pub const ARTIFACT_SUFFIX: &str = ".rowmap.rs";

/// Absolute module path, e.g. `crate::crm::model`.
///
/// Segments are stored unrawed (`r#type` becomes `type`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ModulePath {
    segments: Vec<String>
}

impl ModulePath {
    /// Path of the crate root.
    #[must_use]
    pub fn crate_root() -> Self {
        Self {
            segments: vec!["crate".to_owned()]
        }
    }

    /// Parse `crate::a::b`. A path not starting with `crate` is anchored at
    /// the crate root.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let mut segments: Vec<String> = path
            .split("::")
            .map(|segment| segment.trim().trim_start_matches("r#").to_owned())
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.first().map(String::as_str) != Some("crate") {
            segments.insert(0, "crate".to_owned());
        }
        Self { segments }
    }

    /// Build from raw segments without anchoring.
    #[must_use]
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Path of an inline child module.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_owned());
        Self { segments }
    }

    /// Enclosing module, `None` at the crate root or for an empty path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec()
        })
    }

    /// Path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Check if the path has no segments (derive input of unknown location).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

/// Module path plus simple name of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Module the type is declared in. Empty for derive input.
    pub module: ModulePath,

    /// Simple type name.
    pub ident: Ident
}

impl QualifiedName {
    /// Create a qualified name.
    #[must_use]
    pub fn new(module: ModulePath, ident: Ident) -> Self {
        Self { module, ident }
    }

    /// Simple name without any `r#` prefix.
    #[must_use]
    pub fn simple_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Output name of the artifact generated for this type.
    ///
    /// Module segments below the crate root are part of the name so two types
    /// sharing a simple name in different modules never collide.
    ///
    /// ```rust
    /// use rowmap_codegen::{ModulePath, QualifiedName};
    /// use syn::parse_quote;
    ///
    /// let name = QualifiedName::new(ModulePath::parse("crate::crm"), parse_quote!(Customer));
    /// assert_eq!(name.hint_name(), "crm.Customer.rowmap.rs");
    /// ```
    #[must_use]
    pub fn hint_name(&self) -> String {
        let simple = self.simple_name();
        let mut parts: Vec<&str> = self
            .module
            .segments()
            .iter()
            .map(String::as_str)
            .skip_while(|segment| *segment == "crate")
            .collect();
        parts.push(&simple);
        format!("{}{}", parts.join("."), ARTIFACT_SUFFIX)
    }

    /// Path used to name the type in generated code.
    ///
    /// The bare ident for derive input, `crate::module::Type` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a module segment is not a valid path segment.
    pub fn to_path(&self) -> syn::Result<syn::Path> {
        let mut segments: Vec<Ident> = self
            .module
            .segments()
            .iter()
            .map(|segment| segment_ident(segment))
            .collect();
        segments.push(self.ident.clone());
        let path = segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("::");
        syn::parse_str(&path)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module.is_empty() {
            write!(f, "{}", self.simple_name())
        } else {
            write!(f, "{}::{}", self.module, self.simple_name())
        }
    }
}

/// Ident for a module segment, raw when the name is a reserved word.
fn segment_ident(name: &str) -> Ident {
    if matches!(name, "crate" | "self" | "super" | "Self") || syn::parse_str::<Ident>(name).is_ok() {
        Ident::new(name, Span::call_site())
    } else {
        Ident::new_raw(name, Span::call_site())
    }
}

/// Kind of a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Struct field, named or positional.
    Field,

    /// Associated function or method from an inherent impl.
    Method,

    /// Associated constant.
    Constant,

    /// Associated type.
    TypeAlias,

    /// Macro invocation or anything else found in an impl block.
    Other
}

/// One declared member of a discovered type.
#[derive(Debug, Clone)]
pub struct Member {
    /// What the member is.
    pub kind: MemberKind,

    /// Member name; `None` for positional fields and unnamed impl items.
    pub ident: Option<Ident>,

    /// Declared visibility.
    pub vis: Visibility,

    /// Attributes in source order.
    pub attrs: Vec<Attribute>,

    /// Declared type for fields and constants.
    pub ty: Option<Type>
}

impl Member {
    /// Member for a struct field.
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        Self {
            kind:  MemberKind::Field,
            ident: field.ident.clone(),
            vis:   field.vis.clone(),
            attrs: field.attrs.clone(),
            ty:    Some(field.ty.clone())
        }
    }

    /// Member for an item of an inherent impl block.
    #[must_use]
    pub fn from_impl_item(item: &ImplItem) -> Self {
        match item {
            ImplItem::Fn(f) => Self {
                kind:  MemberKind::Method,
                ident: Some(f.sig.ident.clone()),
                vis:   f.vis.clone(),
                attrs: f.attrs.clone(),
                ty:    None
            },
            ImplItem::Const(c) => Self {
                kind:  MemberKind::Constant,
                ident: Some(c.ident.clone()),
                vis:   c.vis.clone(),
                attrs: c.attrs.clone(),
                ty:    Some(c.ty.clone())
            },
            ImplItem::Type(t) => Self {
                kind:  MemberKind::TypeAlias,
                ident: Some(t.ident.clone()),
                vis:   t.vis.clone(),
                attrs: t.attrs.clone(),
                ty:    None
            },
            other => Self {
                kind:  MemberKind::Other,
                ident: None,
                vis:   Visibility::Inherited,
                attrs: match other {
                    ImplItem::Macro(m) => m.attrs.clone(),
                    _ => Vec::new()
                },
                ty:    None
            }
        }
    }

    /// Member name for logging.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.ident
            .as_ref()
            .map_or_else(|| "<unnamed>".to_owned(), ToString::to_string)
    }
}

/// A type carrying the marker, ready for column resolution.
#[derive(Debug, Clone)]
pub struct AnnotatedType {
    /// Identity of the type.
    pub name: QualifiedName,

    /// Generic parameters, reproduced on the generated impl.
    pub generics: Generics,

    /// Members in declaration order: fields first, then inherent impl items.
    pub members: Vec<Member>
}

impl AnnotatedType {
    /// Type found by scanning a module.
    #[must_use]
    pub fn from_struct(module: ModulePath, item: &ItemStruct, impl_items: &[ImplItem]) -> Self {
        let members = item
            .fields
            .iter()
            .map(Member::from_field)
            .chain(impl_items.iter().map(Member::from_impl_item))
            .collect();

        Self {
            name: QualifiedName::new(module, item.ident.clone()),
            generics: item.generics.clone(),
            members
        }
    }

    /// Type handed to the derive macro.
    ///
    /// The compiler already resolved the marker, so only the shape is checked.
    ///
    /// # Errors
    ///
    /// Returns an error for enums and unions.
    pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "RowMapped can only be derived for structs"
            ));
        };

        Ok(Self {
            name:     QualifiedName::new(ModulePath::default(), input.ident.clone()),
            generics: input.generics.clone(),
            members:  data.fields.iter().map(Member::from_field).collect()
        })
    }
}

/// Resolved field-to-column pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    /// Field identifier in the target type.
    pub field: Ident,

    /// Column name the field reads from.
    pub column: String,

    /// Declared field type.
    pub ty: Type
}

/// Rendered factory for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Type the factory was generated for.
    pub name: QualifiedName,

    /// Output name, see [`QualifiedName::hint_name`].
    pub hint_name: String,

    /// Rendered source text.
    pub source: String
}
