// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member mapping.
//!
//! Turns the members of an [`AnnotatedType`] into the ordered
//! [`ColumnBinding`]s the emitter assigns. A member is mapped when it is
//!
//! 1. a field with a name,
//! 2. declared `pub`,
//! 3. not marked `#[readonly]`.
//!
//! Everything else is skipped silently. Column names come from
//! `#[column(name = "...")]` when present, otherwise from the field name.

mod column;


use syn::{Attribute, Ident, Visibility, ext::IdentExt};
use tracing::trace;

pub use self::column::{ColumnAttr, column_override, is_readonly};
use crate::{
    cancel::{CancellationToken, Cancelled},
    model::{AnnotatedType, ColumnBinding, Member, MemberKind}
};

/// Check if a member takes part in the mapping.
///
/// # Example
///
/// ```rust
/// use rowmap_codegen::{Member, is_eligible};
/// use syn::parse_quote;
///
/// let field: syn::Field = parse_quote!(pub id: i64);
/// assert!(is_eligible(&Member::from_field(&field)));
///
/// let field: syn::Field = parse_quote!(#[readonly] pub id: i64);
/// assert!(!is_eligible(&Member::from_field(&field)));
/// ```
#[must_use]
pub fn is_eligible(member: &Member) -> bool {
    member.kind == MemberKind::Field
        && member.ident.is_some()
        && matches!(member.vis, Visibility::Public(_))
        && !is_readonly(&member.attrs)
}

/// Column name a field binds to.
///
/// The override is used verbatim, an empty string included.
///
/// ```rust
/// use rowmap_codegen::resolve_column_name;
/// use syn::parse_quote;
///
/// assert_eq!(resolve_column_name(&parse_quote!(Id), &[]), "Id");
/// assert_eq!(resolve_column_name(&parse_quote!(r#type), &[]), "type");
/// assert_eq!(
///     resolve_column_name(&parse_quote!(FullName), &[parse_quote!(#[column(name = "full_name")])]),
///     "full_name"
/// );
/// ```
#[must_use]
pub fn resolve_column_name(ident: &Ident, attrs: &[Attribute]) -> String {
    column_override(attrs).unwrap_or_else(|| ident.unraw().to_string())
}

/// Resolve the bindings of one type, in declaration order.
///
/// # Errors
///
/// Returns [`Cancelled`] if the token is cancelled before the last member
/// is looked at. No bindings are returned in that case.
pub fn resolve(ty: &AnnotatedType, cancel: &CancellationToken) -> Result<Vec<ColumnBinding>, Cancelled> {
    let mut bindings = Vec::new();

    for member in &ty.members {
        cancel.check()?;

        if !is_eligible(member) {
            trace!(ty = %ty.name, member = %member.display_name(), kind = ?member.kind, "member skipped");
            continue;
        }
        let (Some(field), Some(field_ty)) = (&member.ident, &member.ty) else {
            continue;
        };

        bindings.push(ColumnBinding {
            field:  field.clone(),
            column: resolve_column_name(field, &member.attrs),
            ty:     field_ty.clone()
        });
    }

    Ok(bindings)
}
