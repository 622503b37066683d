// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Pipeline
//!
//! ```text
//! Compilation
//!     │ discover        marker resolved through use/extern crate/globs
//!     ▼
//! Vec<AnnotatedType>
//!     │ resolve         pub, named, not #[readonly]; #[column(name)] or ident
//!     ▼
//! Vec<ColumnBinding>
//!     │ emit            Factory IR ─► Printer
//!     ▼
//! GeneratedArtifact ──► sink / Writer
//! ```
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Data passed between stages |
//! | [`discover`] | Marker discovery with per-module name resolution |
//! | [`resolve`] | Member eligibility and column names |
//! | [`emit`] | Factory IR and printers |
//! | [`pipeline`] | Cancellable pass driving the three stages |
//! | [`writer`] | Artifact output with an `include!` index |

mod cancel;
mod compilation;
mod config;
pub mod discover;
pub mod emit;
mod error;
pub mod model;
pub mod pipeline;
pub mod resolve;
pub mod writer;

pub use self::{
    cancel::{CancellationToken, Cancelled},
    compilation::{Compilation, SourceUnit},
    config::{Config, DEFAULT_MARKERS, default_runtime},
    discover::discover,
    emit::{Assignment, CompactPrinter, Factory, PrettyPrinter, Printer, emit},
    error::CodegenError,
    model::{
        ARTIFACT_SUFFIX, AnnotatedType, ColumnBinding, GeneratedArtifact, Member, MemberKind,
        ModulePath, QualifiedName
    },
    pipeline::{Pipeline, generate},
    resolve::{is_eligible, resolve, resolve_column_name},
    writer::{INDEX_FILE, Writer}
};
