//! Dependency manifest (requirements.txt) handling for the web variant
//!
//! The manifest is a plain list of pip requirement specifiers. Only the
//! package names are of interest here; pip itself consumes the file as-is.

use std::path::Path;

use crate::error::{Result, SetupError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Package names in file order, specifiers stripped
    pub packages: Vec<String>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SetupError::ManifestNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SetupError::IoError {
                    message: format!("Failed to read {}: {e}", path.display()),
                    source: Some(Box::new(e)),
                }
            }
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let packages = content
            .lines()
            .filter_map(package_name)
            .collect();
        Self { packages }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Extract the bare package name from a requirement specifier line.
/// Comment lines, blank lines and pip options yield `None`.
fn package_name(line: &str) -> Option<String> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() || line.starts_with('-') {
        return None;
    }
    let end = line
        .find(|c: char| "=<>!~[; ".contains(c))
        .unwrap_or(line.len());
    let name = &line[..end];
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
