// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. host::MemoryHost)
    clippy::module_name_repetitions
)]

//! # vimkit
//!
//! Helpers for Vim plugins written outside Vim script.
//!
//! - Turn values into Vim script literals and `:let` them into the editor
//! - Escape file names for Ex commands
//! - Find a file or directory in the working directory or its ancestors
//! - List the open buffers that are real files on disk
//!
//! ## Modules
//!
//! - [`value`]: The supported value types
//! - [`repr`]: Value to literal conversion
//! - [`escape`]: Ex command argument escaping
//! - [`ascend`]: Upward file search
//! - [`host`]: Editor interface, variable binding, buffer filtering

pub mod ascend;
pub mod error;
pub mod escape;
pub mod host;
pub mod repr;
pub mod value;

pub use error::{Error, HostError, Result, SearchError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::ascend::{MatchMode, TargetKind, find_ancestor, find_ancestor_from};
    pub use crate::escape::escape_for_command;
    pub use crate::host::{BufferInfo, Host, let_vim_repr, list_opened_files};
    pub use crate::repr::{repr_of, vim_repr};
    pub use crate::value::{Dict, Key, Value};
}
