//! A redacting `io::Write` adapter for sinks that receive formatted records.
//!
//! [`RedactingWriter`] sits between a formatter and its sink. Bytes are
//! buffered until a newline, so a secret split across several `write` calls
//! is still seen whole; each complete line is redacted and forwarded. Any
//! trailing partial line is redacted and forwarded on [`flush`](Write::flush)
//! or when the writer is dropped.
//!
//! Lines need not be valid UTF-8. Each valid run of a line is redacted on its
//! own and invalid bytes are forwarded untouched between the runs.
//!
//! It does not choose a sink, rotate files, or decide what gets logged.

use std::{
    io::{self, Write},
    sync::Arc,
};

use crate::policy::RedactionPolicy;

/// Wraps a writer so every line passes through a [`RedactionPolicy`] first.
///
/// ```rust
/// use std::io::Write;
///
/// use logscrub::RedactingWriter;
///
/// let mut output = Vec::new();
/// {
///     let mut writer = RedactingWriter::new(&mut output);
///     writeln!(writer, "login ok, password=hunter2").unwrap();
/// }
/// assert_eq!(String::from_utf8(output).unwrap(), "login ok, ***REDACTED***\n");
/// ```
#[derive(Debug)]
pub struct RedactingWriter<W: Write> {
    inner: W,
    buffer: Vec<u8>,
    policy: Arc<RedactionPolicy>,
}

impl<W: Write> RedactingWriter<W> {
    /// Redacts with the process-wide default policy.
    pub fn new(inner: W) -> Self {
        Self::with_policy(inner, RedactionPolicy::shared())
    }

    /// Redacts with `policy`.
    pub fn with_policy(inner: W, policy: Arc<RedactionPolicy>) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            policy,
        }
    }

    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutable access to the wrapped writer. Writing to it directly bypasses
    /// redaction.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    fn forward(&mut self, bytes: &[u8]) -> io::Result<()> {
        for chunk in bytes.utf8_chunks() {
            let redacted = self.policy.redact(chunk.valid());
            self.inner.write_all(redacted.as_bytes())?;
            self.inner.write_all(chunk.invalid())?;
        }
        Ok(())
    }

    fn forward_complete_lines(&mut self) -> io::Result<()> {
        while let Some(newline) = self.buffer.iter().position(|&byte| byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            self.forward(&line)?;
        }
        Ok(())
    }
}

impl<W: Write> Write for RedactingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        self.forward_complete_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            let remaining = std::mem::take(&mut self.buffer);
            self.forward(&remaining)?;
        }
        self.inner.flush()
    }
}

impl<W: Write> Drop for RedactingWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
