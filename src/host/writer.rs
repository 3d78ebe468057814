use std::io::Write;

use super::{BufferInfo, Host};
use crate::error::HostError;

/// Host that writes each command as a line, e.g. to stdout for `:source`.
///
/// It has no buffers.
#[derive(Debug)]
pub struct WriterHost<W> {
    out: W,
}

impl<W: Write> WriterHost<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Host for WriterHost<W> {
    fn command(&mut self, command: &str) -> Result<(), HostError> {
        writeln!(self.out, "{command}")?;
        self.out.flush()?;
        Ok(())
    }

    fn buffers(&self) -> Vec<BufferInfo> {
        Vec::new()
    }
}
