//! Temporary static roots populated with editor translation bundles.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A temporary static directory laid out like an editor distribution.
#[derive(Debug)]
pub struct StaticRoot {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl StaticRoot {
    /// Create a root with `UE/lang/<code>/<code>.js` for each of `codes`.
    pub fn with_translations(codes: &[&str]) -> Result<Self> {
        let dir = tempfile::tempdir().context("create static root")?;
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow::anyhow!("non UTF-8 temp path: {}", path.display()))?;
        let root = Self { _dir: dir, path };
        for code in codes {
            root.write(&format!("UE/lang/{code}/{code}.js"), "UE.I18N = {};")?;
        }
        Ok(root)
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        let target = self.path.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        fs::write(&target, contents).with_context(|| format!("write {target}"))?;
        Ok(target)
    }

    /// Root directory path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
