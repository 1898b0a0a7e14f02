//! Include target resolution

use std::path::{Path, PathBuf};

/// Ordered auxiliary include directories.
///
/// The directory of the issuing file is always consulted first; these
/// directories follow in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

impl SearchPaths {
    pub fn new<P: AsRef<Path>>(dirs: impl IntoIterator<Item = P>) -> Self {
        let mut paths = Self::default();
        for dir in dirs {
            paths.push(dir);
        }
        paths
    }

    /// Append a directory, ignoring exact duplicates
    pub fn push<P: AsRef<Path>>(&mut self, dir: P) {
        let dir = dir.as_ref();
        if !self.dirs.iter().any(|d| d == dir) {
            self.dirs.push(dir.to_path_buf());
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Candidate directories for a directive issued by `issuing_file`
    pub fn candidates<'a>(&'a self, issuing_file: &'a Path) -> impl Iterator<Item = &'a Path> {
        issuing_file
            .parent()
            .into_iter()
            .chain(self.dirs.iter().map(PathBuf::as_path))
    }

    /// Resolve `target` against the candidate directories.
    ///
    /// Returns the first joined path that exists, or `None`. An empty target
    /// names the candidate directory itself.
    pub fn resolve(&self, issuing_file: &Path, target: &str) -> Option<PathBuf> {
        self.candidates(issuing_file)
            .map(|dir| dir.join(target))
            .find(|candidate| candidate.exists())
    }
}
