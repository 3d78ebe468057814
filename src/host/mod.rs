//! The editor as seen from this crate.
//!
//! Everything that needs the running editor goes through [`Host`]: issuing Ex
//! commands and reading the buffer list. [`MemoryHost`] and [`WriterHost`]
//! are the two implementations shipped here.

mod memory;
mod writer;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{HostError, Result};
use crate::repr::vim_repr;
use crate::value::Value;

pub use memory::MemoryHost;
pub use writer::WriterHost;

/// Snapshot of one editor buffer.
///
/// `bufnr` and `name` follow `getbufinfo()`; unknown keys are ignored. A dump
/// with the options filled in can be produced with:
///
/// ```vim
/// echo json_encode(map(getbufinfo(), {_, b -> {
///       \ 'bufnr': b.bufnr, 'name': b.name,
///       \ 'options': {'buftype': getbufvar(b.bufnr, '&buftype')}}}))
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BufferInfo {
    #[serde(rename = "bufnr", default)]
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl BufferInfo {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            options: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

/// Capabilities of the host editor.
pub trait Host {
    /// Run an Ex command.
    ///
    /// # Errors
    /// Implementation defined; the command may be rejected or the transport
    /// may fail.
    fn command(&mut self, command: &str) -> std::result::Result<(), HostError>;

    /// Buffers in the editor's enumeration order.
    fn buffers(&self) -> Vec<BufferInfo>;

    /// A buffer-local option, `None` if the host does not know it.
    fn buffer_option(&self, buffer: &BufferInfo, name: &str) -> Option<String> {
        buffer.options.get(name).cloned()
    }
}

/// Assign `value` to the Vim variable `name` (`let name = <literal>`).
///
/// `name` is passed through verbatim, scope prefix included (`g:foo`,
/// `s:bar`).
///
/// # Errors
/// Returns [`crate::Error::Host`] if the host fails to run the command.
pub fn let_vim_repr(host: &mut dyn Host, name: &str, value: &Value) -> Result<()> {
    let command = format!("let {name} = {}", vim_repr(value));
    debug!(%command, "assigning");
    host.command(&command)?;
    Ok(())
}

/// Names of buffers backed by a real file on disk.
///
/// A buffer qualifies when its `buftype` is empty (a missing option counts
/// as empty) and its name is an existing regular file. Special buffers
/// (terminal, quickfix, `nofile` scratch) and buffers for deleted files are
/// skipped, not reported.
pub fn list_opened_files(host: &dyn Host) -> Vec<PathBuf> {
    host.buffers()
        .into_iter()
        .filter(|buffer| {
            host.buffer_option(buffer, "buftype")
                .is_none_or(|buftype| buftype.is_empty())
        })
        .filter(|buffer| Path::new(&buffer.name).is_file())
        .map(|buffer| PathBuf::from(buffer.name))
        .collect()
}
