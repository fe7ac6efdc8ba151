//! File system access used by the orchestrator.

use std::future::Future;
use std::io;
use std::path::Path;

/// Reads the source and persists the generated file.
///
/// Reading is the only asynchronous step of a run; directory creation and
/// writing happen synchronously after rendering completes.
pub trait FileStore {
    fn read_text(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send;

    /// Create `path` and any missing parents.
    ///
    /// # Errors
    /// Propagates the underlying I/O error.
    fn ensure_directory(&self, path: &Path) -> io::Result<()>;

    /// Write `content` to `path`, truncating any existing file.
    ///
    /// # Errors
    /// Propagates the underlying I/O error.
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// The local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    async fn read_text(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    fn ensure_directory(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}
