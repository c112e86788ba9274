//! Byte destinations that backends write formatted records into.
//!
//! A [`Destination`] is a cloneable handle onto one shared writer, so a root
//! logger and every entry derived from it write through the same sink and a
//! redirect is visible to all of them.

mod file;
mod memory;

pub use file::open_log_file;
pub use memory::MemoryBuffer;

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// What a destination writes into; mostly for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKind {
    Stderr,
    Stdout,
    File,
    Memory,
    /// Routed through `print!` so the test harness captures it.
    Test,
    Custom,
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Cloneable handle onto a shared writer.
#[derive(Clone)]
pub struct Destination {
    writer: SharedWriter,
    kind: DestinationKind,
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Destination {
    fn with_kind(writer: impl Write + Send + 'static, kind: DestinationKind) -> Self {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Self {
            writer: Arc::new(Mutex::new(writer)),
            kind,
        }
    }

    /// Console default for every backend.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_kind(io::stderr(), DestinationKind::Stderr)
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::with_kind(io::stdout(), DestinationKind::Stdout)
    }

    /// Holds the file open for as long as any clone of the destination lives.
    #[must_use]
    pub fn file(file: File) -> Self {
        Self::with_kind(file, DestinationKind::File)
    }

    /// In-memory sink plus a handle for reading back what was written.
    #[must_use]
    pub fn memory() -> (Self, MemoryBuffer) {
        let buffer = MemoryBuffer::new();
        (
            Self::with_kind(buffer.clone(), DestinationKind::Memory),
            buffer,
        )
    }

    /// Writes through `print!`, which the Rust test harness captures per test
    /// and only shows for failing tests.
    #[must_use]
    pub fn test() -> Self {
        Self::with_kind(TestWriter, DestinationKind::Test)
    }

    /// Any other writer, e.g. a socket or a pipe.
    #[must_use]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::with_kind(writer, DestinationKind::Custom)
    }

    #[must_use]
    pub const fn kind(&self) -> DestinationKind {
        self.kind
    }

    /// Identity comparison: true only for clones of the same handle.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Appends `line` plus a newline in a single locked write so concurrent
    /// records never interleave.
    ///
    /// # Errors
    /// I/O errors from the underlying writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(buf.as_bytes())
    }

    /// # Errors
    /// I/O errors from the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

struct TestWriter;

impl Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        print!("{}", String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Why file-target output could not be set up. Never surfaces from logger
/// construction; the factory downgrades to console output instead.
#[derive(Debug)]
pub enum OutputError {
    /// The log directory could not be created, even after the elevated retry.
    CreateDir { path: PathBuf, source: io::Error },
    /// The log file could not be opened for appending.
    OpenFile { path: PathBuf, source: io::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "cannot create log directory {}: {source}", path.display())
            }
            Self::OpenFile { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } | Self::OpenFile { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let (dest, _) = Destination::memory();
        let clone = dest.clone();
        assert!(dest.same_as(&clone));
        assert!(!dest.same_as(&Destination::stderr()));
    }

    #[test]
    fn write_line_appends_newline() {
        let (dest, buffer) = Destination::memory();
        dest.write_line("one").unwrap();
        dest.write_line("two").unwrap();
        assert_eq!(buffer.contents(), "one\ntwo\n");
    }
}
