// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! | Setting | Default | Meaning |
//! |---------|---------|---------|
//! | markers | `rowmap::RowMapped`, `rowmap::prelude::RowMapped`, `rowmap_derive::RowMapped` | Fully qualified paths a derive must resolve to |
//! | runtime | `::rowmap` | Crate path used in generated code |

/// Default fully qualified marker paths.
pub const DEFAULT_MARKERS: [&str; 3] = [
    "rowmap::RowMapped",
    "rowmap::prelude::RowMapped",
    "rowmap_derive::RowMapped"
];

/// Settings shared by discovery and emission.
///
/// # Example
///
/// ```rust
/// use rowmap_codegen::Config;
///
/// let config = Config::default()
///     .with_marker("my_orm::RowMapped")
///     .with_runtime(syn::parse_quote!(::my_orm::rowmap));
/// assert!(config.is_marker(&["my_orm".to_owned(), "RowMapped".to_owned()]));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    markers: Vec<Vec<String>>,
    runtime: syn::Path
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| split_path(m)).collect(),
            runtime: default_runtime()
        }
    }
}

impl Config {
    /// Configuration recognizing no marker at all.
    #[must_use]
    pub fn without_markers() -> Self {
        Self {
            markers: Vec::new(),
            runtime: default_runtime()
        }
    }

    /// Recognize another fully qualified marker path, e.g. `my_orm::RowMapped`.
    #[must_use]
    pub fn with_marker(mut self, path: &str) -> Self {
        let segments = split_path(path);
        if !segments.is_empty() && !self.markers.contains(&segments) {
            self.markers.push(segments);
        }
        self
    }

    /// Crate path generated code refers to.
    #[must_use]
    pub fn with_runtime(mut self, runtime: syn::Path) -> Self {
        self.runtime = runtime;
        self
    }

    /// Check if resolved path segments name a marker.
    #[must_use]
    pub fn is_marker(&self, segments: &[String]) -> bool {
        self.markers.iter().any(|marker| marker.as_slice() == segments)
    }

    /// Recognized marker paths.
    #[must_use]
    pub fn markers(&self) -> &[Vec<String>] {
        &self.markers
    }

    /// Crate path generated code refers to.
    #[must_use]
    pub fn runtime(&self) -> &syn::Path {
        &self.runtime
    }
}

/// Default runtime crate path.
#[must_use]
pub fn default_runtime() -> syn::Path {
    syn::parse_quote!(::rowmap)
}

fn split_path(path: &str) -> Vec<String> {
    path.split("::")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &str) -> Vec<String> {
        split_path(path)
    }

    #[test]
    fn default_markers() {
        let config = Config::default();
        assert!(config.is_marker(&segs("rowmap::RowMapped")));
        assert!(config.is_marker(&segs("rowmap_derive::RowMapped")));
        assert!(!config.is_marker(&segs("RowMapped")));
        assert!(!config.is_marker(&segs("other::RowMapped")));
    }

    #[test]
    fn leading_colons_are_ignored() {
        let config = Config::without_markers().with_marker("::a::B");
        assert_eq!(config.markers(), [segs("a::B")]);
    }

    #[test]
    fn duplicate_marker_is_kept_once() {
        let config = Config::without_markers().with_marker("a::B").with_marker("a::B");
        assert_eq!(config.markers().len(), 1);
    }

    #[test]
    fn default_runtime_path() {
        let runtime = Config::default().runtime().clone();
        assert_eq!(quote::quote!(#runtime).to_string(), ":: rowmap");
    }
}
