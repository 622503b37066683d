// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact output.
//!
//! Each artifact is written to `<out_dir>/<hint_name>`, followed by an index
//! that pulls all of them into one module:
//!
//! ```text
//! out/
//! ├── crm.Customer.rowmap.rs
//! ├── crm.Order.rowmap.rs
//! └── rowmap.rs        include!("crm.Customer.rowmap.rs"); ...
//! ```
//!
//! Files whose content is already up to date are left untouched so their
//! modification time does not trigger rebuilds.

use std::{
    fs, io,
    path::{Path, PathBuf}
};

use tracing::{debug, info};

use crate::{error::CodegenError, model::GeneratedArtifact};

/// Default file name of the index.
pub const INDEX_FILE: &str = "rowmap.rs";

/// Writes artifacts to a directory.
///
/// # Visibility
///
/// The index is meant to be `include!`d once, at the crate root, and every
/// artifact names its type as `crate::module::Type`. That path must be
/// reachable from the root: a marked struct that is private, or declared in a
/// private module the root cannot see into, makes the included index fail to
/// compile. Such types should use `#[derive(RowMapped)]` instead, or be
/// included with [`Writer::without_index`] at a site that can name them.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::PathBuf;
///
/// use rowmap_codegen::{Compilation, Config, Writer, generate};
///
/// # fn main() -> Result<(), rowmap_codegen::CodegenError> {
/// let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap_or_default());
/// let artifacts = generate(&Compilation::new(), &Config::default())?;
/// Writer::new(&out_dir).write(&artifacts)?;
/// // in the crate: include!(concat!(env!("OUT_DIR"), "/rowmap.rs"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    out_dir: PathBuf,
    index:   Option<String>
}

impl Writer {
    /// Writer into `out_dir` with the default index file.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            index:   Some(INDEX_FILE.to_owned())
        }
    }

    /// Use a different index file name.
    #[must_use]
    pub fn with_index(mut self, name: impl Into<String>) -> Self {
        self.index = Some(name.into());
        self
    }

    /// Write artifacts only.
    #[must_use]
    pub fn without_index(mut self) -> Self {
        self.index = None;
        self
    }

    /// Output directory.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write every artifact, then the index.
    ///
    /// Returns the paths of all output files in write order.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Io`] if the directory cannot be created or a
    /// file cannot be read or written.
    pub fn write(&self, artifacts: &[GeneratedArtifact]) -> Result<Vec<PathBuf>, CodegenError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| CodegenError::Io {
            path: self.out_dir.clone(),
            source
        })?;

        let mut paths = Vec::with_capacity(artifacts.len() + 1);
        let mut written = 0;

        for artifact in artifacts {
            let path = self.out_dir.join(&artifact.hint_name);
            if write_if_changed(&path, &artifact.source)? {
                written += 1;
            }
            paths.push(path);
        }

        if let Some(index) = &self.index {
            let path = self.out_dir.join(index);
            if write_if_changed(&path, &render_index(artifacts))? {
                written += 1;
            }
            paths.push(path);
        }

        info!(
            dir = %self.out_dir.display(),
            files = paths.len(),
            written,
            "artifacts written"
        );
        Ok(paths)
    }
}

fn render_index(artifacts: &[GeneratedArtifact]) -> String {
    let mut text = String::from("// @generated by rowmap-codegen. Do not edit.\n");
    for artifact in artifacts {
        text.push_str(&format!("include!({:?});\n", artifact.hint_name));
    }
    text
}

/// Returns `true` if the file was (re)written.
fn write_if_changed(path: &Path, contents: &str) -> Result<bool, CodegenError> {
    let io_error = |source| CodegenError::Io {
        path: path.to_path_buf(),
        source
    };

    match fs::read_to_string(path) {
        Ok(existing) if existing == contents => {
            debug!(path = %path.display(), "unchanged");
            return Ok(false);
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(io_error(err))
    }

    fs::write(path, contents).map_err(io_error)?;
    debug!(path = %path.display(), "written");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;
    use crate::{
        compilation::{Compilation, SourceUnit},
        config::Config,
        pipeline::generate
    };

    fn artifacts() -> Vec<GeneratedArtifact> {
        let unit = SourceUnit::parse(
            "crate::crm",
            r#"
            #[derive(Default, rowmap::RowMapped)]
            pub struct Customer { pub id: i64 }

            #[derive(Default, rowmap::RowMapped)]
            pub struct Order { pub id: i64 }
            "#
        )
        .unwrap();
        generate(&Compilation::from(vec![unit]), &Config::default()).unwrap()
    }

    fn modified(path: &Path) -> SystemTime {
        fs::metadata(path).unwrap().modified().unwrap()
    }

    #[test]
    fn writes_artifacts_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = artifacts();
        let paths = Writer::new(dir.path()).write(&artifacts).unwrap();

        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["crm.Customer.rowmap.rs", "crm.Order.rowmap.rs", "rowmap.rs"]);

        let customer = fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(customer, artifacts[0].source);

        let index = fs::read_to_string(&paths[2]).unwrap();
        assert_eq!(
            index,
            "// @generated by rowmap-codegen. Do not edit.\n\
             include!(\"crm.Customer.rowmap.rs\");\n\
             include!(\"crm.Order.rowmap.rs\");\n"
        );
    }

    #[test]
    fn artifacts_without_index_keep_qualified_paths() {
        let unit = SourceUnit::parse(
            "crate::crm",
            r#"
            mod internal {
                #[derive(Default, rowmap::RowMapped)]
                struct Ledger { pub id: i64 }
            }
            "#
        )
        .unwrap();
        let artifacts = generate(&Compilation::from(vec![unit]), &Config::default()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let paths = Writer::new(dir.path()).without_index().write(&artifacts).unwrap();
        assert_eq!(paths, [dir.path().join("crm.internal.Ledger.rowmap.rs")]);
        assert!(!dir.path().join(INDEX_FILE).exists());

        let source = fs::read_to_string(&paths[0]).unwrap();
        assert!(source.contains("for crate::crm::internal::Ledger"));
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        Writer::new(&nested).without_index().write(&artifacts()).unwrap();
        assert!(nested.join("crm.Order.rowmap.rs").is_file());
        assert!(!nested.join(INDEX_FILE).exists());
    }

    #[test]
    fn custom_index_name() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Writer::new(dir.path()).with_index("mapped.rs").write(&[]).unwrap();
        assert_eq!(paths, [dir.path().join("mapped.rs")]);
    }

    #[test]
    fn unchanged_files_are_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let writer = Writer::new(dir.path());
        let artifacts = artifacts();
        let paths = writer.write(&artifacts).unwrap();

        let before = modified(&paths[0]);
        fs::write(&paths[1], "stale").unwrap();
        writer.write(&artifacts).unwrap();

        assert_eq!(modified(&paths[0]), before);
        assert_eq!(fs::read_to_string(&paths[1]).unwrap(), artifacts[1].source);
    }

    #[test]
    fn unwritable_target_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let err = Writer::new(blocker.join("out")).write(&artifacts()).unwrap_err();
        assert!(matches!(err, CodegenError::Io { .. }));
    }
}
