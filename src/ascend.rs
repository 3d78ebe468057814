//! Upward search for a file or directory.
//!
//! Starting at the working directory, each level is listed and checked for an
//! entry with the requested name, moving to the parent until the filesystem
//! root. The root itself is never listed.
//!
//! The kind check has two modes. [`MatchMode::Anchor`] is the long-standing
//! behavior: the kind predicate is evaluated on the bare entry name, which the
//! OS resolves against the working directory rather than against the
//! directory being listed. In practice that means a match is only ever found
//! in the anchor itself. [`MatchMode::Joined`] evaluates the predicate on
//! `dir/name`, which finds the entry at any level. Existing callers rely on
//! the anchored behavior, so it stays the default.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::SearchError;

/// What kind of entry to look for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Anything that exists.
    #[default]
    Any,
    /// A regular file.
    File,
    /// A directory.
    Dir,
}

impl TargetKind {
    /// Symlinks are followed, like `stat`.
    pub fn matches(self, path: &Path) -> bool {
        match self {
            Self::Any => path.exists(),
            Self::File => path.is_file(),
            Self::Dir => path.is_dir(),
        }
    }
}

/// Which path the kind predicate is evaluated on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The bare entry name, relative to the anchor.
    #[default]
    Anchor,
    /// The entry inside the directory being listed.
    Joined,
}

/// Search from the current working directory with [`MatchMode::Anchor`].
///
/// Returns the joined path of the directory the entry was found in and
/// `name`, or `None` once the root is reached.
///
/// # Errors
/// Fails if the working directory cannot be read or a directory on the way
/// up cannot be listed.
pub fn find_ancestor(name: &str, kind: TargetKind) -> Result<Option<PathBuf>, SearchError> {
    let cwd = std::env::current_dir().map_err(SearchError::CurrentDir)?;
    find_ancestor_from(&cwd, name, kind, MatchMode::Anchor)
}

/// Search upward from `start`, which acts as the anchor.
///
/// A relative `start` is made absolute against the working directory first.
/// Under [`MatchMode::Anchor`] the bare entry name is resolved against
/// `start`, not against the process working directory, so the result only
/// agrees with [`find_ancestor`] when `start` is the working directory.
///
/// # Errors
/// Fails if `start` cannot be made absolute or a directory on the way up
/// cannot be listed.
pub fn find_ancestor_from(
    start: &Path,
    name: &str,
    kind: TargetKind,
    mode: MatchMode,
) -> Result<Option<PathBuf>, SearchError> {
    let anchor = std::path::absolute(start).map_err(SearchError::CurrentDir)?;
    debug!(anchor = %anchor.display(), name, ?kind, ?mode, "searching ancestors");

    let mut dir = anchor.as_path();
    while let Some(parent) = dir.parent() {
        if dir_has_match(&anchor, dir, name, kind, mode)? {
            let found = dir.join(name);
            debug!(path = %found.display(), "found");
            return Ok(Some(found));
        }
        dir = parent;
    }
    debug!(name, "reached root");
    Ok(None)
}

fn dir_has_match(
    anchor: &Path,
    dir: &Path,
    name: &str,
    kind: TargetKind,
    mode: MatchMode,
) -> Result<bool, SearchError> {
    let read_err = |source| SearchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_name = entry.file_name();
        if file_name.as_os_str() != OsStr::new(name) {
            continue;
        }
        let candidate = match mode {
            MatchMode::Anchor => anchor.join(&file_name),
            MatchMode::Joined => dir.join(&file_name),
        };
        let hit = kind.matches(&candidate);
        trace!(dir = %dir.display(), candidate = %candidate.display(), hit, "entry");
        if hit {
            return Ok(true);
        }
    }
    Ok(false)
}
