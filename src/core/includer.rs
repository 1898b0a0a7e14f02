//! Include flattening
//!
//! The [`Includer`] walks the inclusion graph depth-first, pre-order, writing
//! each file's lines to the output and replacing every resolvable directive
//! with the flattened content of its target. Per-run state (the visited set and
//! counters) lives in a [`Traversal`] that exists only for the duration of one
//! [`Includer::flatten`] call, so a single `Includer` can serve many runs.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::directive;
use crate::core::error::{IncludeError, IncludeResult};
use crate::core::search::SearchPaths;

/// Counters collected during one flattening run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Distinct files read and emitted
    pub files: usize,
    /// Directives replaced by the content of their target
    pub inlined: usize,
    /// Directives emitted verbatim because the target was not found
    pub passed_through: usize,
    /// Directives whose target had already been visited
    pub skipped: usize,
    /// Bytes written to the output
    pub bytes_written: u64,
}

/// Flattens `#include` directives against a fixed set of search paths
#[derive(Debug, Clone, Default)]
pub struct Includer {
    search: SearchPaths,
}

impl Includer {
    pub fn new(search: SearchPaths) -> Self {
        Self { search }
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search
    }

    /// Flatten `root` into `out`.
    ///
    /// On error, whatever was written before the failure stays in `out`.
    pub fn flatten<W: Write>(&self, root: &Path, out: &mut W) -> IncludeResult<FlattenStats> {
        let root = canonical(root)?;
        let mut traversal = Traversal::new(&self.search, out);
        traversal.process(&root)?;
        Ok(traversal.stats)
    }
}

/// Per-run traversal context
struct Traversal<'a, W> {
    search: &'a SearchPaths,
    visited: HashSet<PathBuf>,
    out: &'a mut W,
    stats: FlattenStats,
}

impl<'a, W: Write> Traversal<'a, W> {
    fn new(search: &'a SearchPaths, out: &'a mut W) -> Self {
        Self {
            search,
            visited: HashSet::new(),
            out,
            stats: FlattenStats::default(),
        }
    }

    /// Emit `file` with its directives expanded. `file` must be canonical.
    fn process(&mut self, file: &Path) -> IncludeResult<()> {
        if !self.visited.insert(file.to_path_buf()) {
            return Ok(());
        }

        let handle = File::open(file).map_err(|source| IncludeError::Open {
            path: file.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(handle);
        self.stats.files += 1;

        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| IncludeError::Read {
                    path: file.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }

            let Some(target) = directive::parse_target(&line) else {
                self.emit(&line)?;
                continue;
            };

            match self.search.resolve(file, &target) {
                Some(found) => {
                    let found = canonical(&found)?;
                    if self.visited.contains(&found) {
                        trace!(from = %file.display(), path = %found.display(), "already visited, skipping");
                        self.stats.skipped += 1;
                        continue;
                    }
                    debug!(
                        from = %file.display(),
                        target = %target,
                        resolved = %found.display(),
                        "inlining include"
                    );
                    self.stats.inlined += 1;
                    self.process(&found)?;
                }
                None => {
                    debug!(from = %file.display(), target = %target, "include not found, passing through");
                    self.stats.passed_through += 1;
                    self.emit(&line)?;
                }
            }
        }

        Ok(())
    }

    fn emit(&mut self, bytes: &[u8]) -> IncludeResult<()> {
        self.out.write_all(bytes)?;
        self.stats.bytes_written += bytes.len() as u64;
        Ok(())
    }
}

fn canonical(path: &Path) -> IncludeResult<PathBuf> {
    fs::canonicalize(path).map_err(|source| IncludeError::Open {
        path: path.to_path_buf(),
        source,
    })
}
