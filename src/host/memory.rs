use std::path::Path;

use anyhow::Context;

use super::{BufferInfo, Host};
use crate::error::HostError;

/// In-memory host: a fixed buffer list and a log of issued commands.
///
/// Used by tests and by the CLI to work on a buffer list exported from a
/// running editor.
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    buffers: Vec<BufferInfo>,
    commands: Vec<String>,
    reject: Option<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the buffer list from a JSON array of [`BufferInfo`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a buffer list.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read buffer list {}", path.display()))?;
        let buffers: Vec<BufferInfo> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse buffer list {}", path.display()))?;
        Ok(Self {
            buffers,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_buffer(mut self, buffer: BufferInfo) -> Self {
        self.buffers.push(buffer);
        self
    }

    /// Make every subsequent command fail with `reason`.
    #[must_use]
    pub fn reject_commands(mut self, reason: impl Into<String>) -> Self {
        self.reject = Some(reason.into());
        self
    }

    /// Commands accepted so far, oldest first.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl Host for MemoryHost {
    fn command(&mut self, command: &str) -> Result<(), HostError> {
        if let Some(reason) = &self.reject {
            return Err(HostError::Rejected {
                command: command.to_string(),
                reason: reason.clone(),
            });
        }
        self.commands.push(command.to_string());
        Ok(())
    }

    fn buffers(&self) -> Vec<BufferInfo> {
        self.buffers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_records_commands_in_order() {
        let mut host = MemoryHost::new();
        host.command("let a = 1").unwrap();
        host.command("let b = 2").unwrap();
        assert_eq!(host.commands(), ["let a = 1", "let b = 2"]);
    }

    #[test]
    fn test_rejected_command_is_not_recorded() {
        let mut host = MemoryHost::new().reject_commands("nope");
        assert!(host.command("let a = 1").is_err());
        assert!(host.commands().is_empty());
    }

    #[test]
    fn test_from_json_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"[{"bufnr": 1, "name": "a.txt", "options": {"buftype": "nofile"}}]"#,
        )
        .unwrap();
        let host = MemoryHost::from_json_file(file.path()).unwrap();
        let buffers = host.buffers();
        assert_eq!(buffers.len(), 1);
        assert_eq!(
            host.buffer_option(&buffers[0], "buftype").as_deref(),
            Some("nofile")
        );
    }

    #[test]
    fn test_from_json_file_rejects_garbage() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{not json").unwrap();
        let err = MemoryHost::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse buffer list"));
    }
}
