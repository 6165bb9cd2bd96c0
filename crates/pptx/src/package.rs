//! Access to the parts of an unpacked presentation package.

use crate::xml::XmlNode;
use pptmd_core::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

/// An unpacked package: a root directory plus the relative paths of its files.
///
/// A package created by [`Package::extract`] owns its temporary directory,
/// which is removed when the package is dropped.
#[derive(Debug)]
pub struct Package {
    root: PathBuf,
    files: Vec<String>,
    _temp: Option<TempDir>,
}

impl Package {
    /// Wrap a directory that was already extracted elsewhere.
    pub fn from_dir(root: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            root: root.into(),
            files,
            _temp: None,
        }
    }

    /// Wrap an extracted directory, listing its files.
    pub fn scan_dir(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let mut files = Vec::new();
        collect_files(&root, &root, &mut files)?;
        files.sort();
        Ok(Self::from_dir(root, files))
    }

    /// Open and extract a `.pptx` file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::extract(BufReader::new(file))
    }

    /// Extract a ZIP package into a temporary directory.
    pub fn extract<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;
        let temp = TempDir::new()?;
        let mut files = Vec::new();

        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| Error::ZipError(format!("Failed to read entry {}: {}", index, e)))?;

            let name = entry.name().to_string();
            let relative = entry
                .enclosed_name()
                .map(Path::to_path_buf)
                .ok_or_else(|| Error::CorruptedFile(format!("unsafe entry path '{}'", name)))?;
            let target = temp.path().join(&relative);

            if entry.is_dir() {
                fs::create_dir_all(&target)?;
                continue;
            }
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut out = File::create(&target)?;
            io::copy(&mut entry, &mut out)?;
            files.push(name);
        }

        log::debug!("Extracted {} files to {}", files.len(), temp.path().display());

        Ok(Self {
            root: temp.path().to_path_buf(),
            files,
            _temp: Some(temp),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative paths of every file in the package.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Read a part as text. A missing part is `Ok(None)`.
    pub fn read_part(&self, part: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.root.join(part)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Read and parse a part. A missing part is `Ok(None)`.
    pub fn parse_part(&self, part: &str) -> Result<Option<XmlNode>> {
        match self.read_part(part)? {
            Some(content) => XmlNode::parse(part, &content).map(Some),
            None => Ok(None),
        }
    }
}

/// Recursively list files under `dir` as `/`-separated paths relative to `root`.
fn collect_files(root: &Path, dir: &Path, files: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            let parts: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            files.push(parts.join("/"));
        }
    }
    Ok(())
}
