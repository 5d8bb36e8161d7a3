use crate::core::error::{Result, VenvMgrError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static MANIFEST_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^requirements.*\.txt$").unwrap());

/// A requirements manifest: raw requirement lines plus the bare package
/// names they refer to.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    entries: Vec<String>,
}

impl Manifest {
    /// Find a manifest in `dir`. An exact `requirements.txt` wins; otherwise
    /// the lexicographically first `requirements*.txt` keeps discovery
    /// deterministic.
    pub fn locate(dir: &Path) -> Result<Self> {
        let exact = dir.join("requirements.txt");
        if exact.is_file() {
            return Self::load(&exact);
        }

        let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| MANIFEST_NAME_RE.is_match(n))
            })
            .collect();
        candidates.sort();

        match candidates.first() {
            Some(path) => Self::load(path),
            None => Err(VenvMgrError::RequirementsNotFound),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            entries: parse_requirement_lines(&content),
        })
    }

    /// Raw requirement lines, as pip accepts them.
    pub fn requirements(&self) -> &[String] {
        &self.entries
    }

    /// Bare package names, with extras/specifiers/markers stripped.
    pub fn package_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| requirement_name(entry))
            .filter(|name| !name.is_empty())
            .collect()
    }

}

fn parse_requirement_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        // Skip blanks, comments, and pip option lines like `-r other.txt`.
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .map(|line| match line.split_once('#') {
            Some((req, _comment)) => req.trim().to_string(),
            None => line.to_string(),
        })
        .collect()
}

/// The package name is everything before the first extras bracket, version
/// specifier, or environment marker.
pub fn requirement_name(requirement: &str) -> String {
    let end = requirement
        .find(|c: char| matches!(c, '[' | '=' | '<' | '>' | '!' | '~' | ';' | ' '))
        .unwrap_or(requirement.len());
    requirement[..end].trim().to_string()
}
