use crate::core::{Document, Storage};
use crate::utils::error::{Result, ScriptError};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Filesystem storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

async fn write_lines<W: AsyncWrite + Unpin>(sink: W, document: &Document) -> io::Result<()> {
    let mut writer = BufWriter::new(sink);
    for line in &document.lines {
        writer.write_all(line.as_bytes()).await?;
    }
    writer.flush().await
}

/// True when the path names a regular file, or nothing yet. Symlinks, FIFOs
/// and device nodes are never removed after a failed write.
async fn is_regular_or_absent(path: &Path) -> bool {
    match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata.file_type().is_file(),
        Err(e) => e.kind() == io::ErrorKind::NotFound,
    }
}

async fn is_regular_file(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .await
        .map(|metadata| metadata.file_type().is_file())
        .unwrap_or(false)
}

/// Creates or truncates `full_path` and hands the open file to `write`. A
/// failed write removes the partial output only when this run created or
/// truncated a regular file there.
async fn write_destination<F, Fut>(path: &Path, full_path: &Path, write: F) -> Result<()>
where
    F: FnOnce(fs::File) -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    let write_failure = |source| ScriptError::DestinationWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let owns_file = is_regular_or_absent(full_path).await;
    let file = fs::File::create(full_path).await.map_err(write_failure)?;

    if let Err(e) = write(file).await {
        if owns_file && is_regular_file(full_path).await {
            if let Err(cleanup) = fs::remove_file(full_path).await {
                tracing::warn!(
                    "Could not remove partial output {}: {}",
                    full_path.display(),
                    cleanup
                );
            }
        }
        return Err(write_failure(e));
    }
    Ok(())
}

impl Storage for LocalStorage {
    async fn read_text(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        let unreadable = |source| ScriptError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(&full_path).await.map_err(unreadable)?;
        if !metadata.is_file() {
            return Err(unreadable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let bytes = fs::read(&full_path).await.map_err(unreadable)?;
        String::from_utf8(bytes).map_err(|_| ScriptError::InvalidEncoding {
            path: path.to_path_buf(),
        })
    }

    async fn write_document(&self, path: &Path, document: &Document) -> Result<()> {
        let full_path = self.resolve(path);
        write_destination(path, &full_path, |file| write_lines(file, document)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trips_text_verbatim() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let doc = Document::from_text("a\r\nb\n\nc");

        storage.write_document(Path::new("out.txt"), &doc).await.unwrap();
        let text = storage.read_text(Path::new("out.txt")).await.unwrap();

        assert_eq!(text, "a\r\nb\n\nc");
    }

    #[tokio::test]
    async fn test_directory_is_not_a_source() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_text(Path::new(".")).await.unwrap_err();
        assert!(matches!(err, ScriptError::SourceUnreadable { .. }));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bin.dat"), [0xff, 0xfe, b'a']).unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_text(Path::new("bin.dat")).await.unwrap_err();
        assert!(matches!(err, ScriptError::InvalidEncoding { .. }));
    }

    #[tokio::test]
    async fn test_missing_parent_directory_fails_write() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage
            .write_document(Path::new("no/such/dir/out.txt"), &Document::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptError::DestinationWriteFailure { .. }));
        assert!(!dir.path().join("no").exists());
    }

    async fn write_then_fail(mut file: fs::File) -> io::Result<()> {
        file.write_all(b"partial line\n").await?;
        file.flush().await?;
        Err(io::Error::other("no space left on device"))
    }

    #[tokio::test]
    async fn test_failed_write_removes_partial_regular_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.txt");

        let err = write_destination(Path::new("out.txt"), &out, write_then_fail)
            .await
            .unwrap_err();

        assert!(matches!(err, ScriptError::DestinationWriteFailure { .. }));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_failed_write_removes_truncated_existing_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.txt");
        std::fs::write(&out, "previous content\n").unwrap();

        let result = write_destination(Path::new("out.txt"), &out, write_then_fail).await;

        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_write_keeps_symlink_destination() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target.txt");
        let link = dir.path().join("link.txt");
        std::fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = write_destination(Path::new("link.txt"), &link, write_then_fail).await;

        assert!(result.is_err());
        let metadata = std::fs::symlink_metadata(&link).unwrap();
        assert!(metadata.file_type().is_symlink());
        assert!(target.exists());
    }

    #[cfg(unix)]
    fn make_fifo(path: &Path) {
        let status = std::process::Command::new("mkfifo")
            .arg(path)
            .status()
            .expect("mkfifo must be available");
        assert!(status.success());
    }

    #[cfg(unix)]
    fn spawn_fifo_reader(path: &Path) -> std::thread::JoinHandle<String> {
        let path = path.to_path_buf();
        std::thread::spawn(move || {
            let mut text = String::new();
            let mut fifo = std::fs::File::open(path).unwrap();
            std::io::Read::read_to_string(&mut fifo, &mut text).unwrap();
            text
        })
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fifo_destination_receives_output() {
        use std::os::unix::fs::FileTypeExt;

        let dir = TempDir::new().unwrap();
        let fifo = dir.path().join("out.fifo");
        make_fifo(&fifo);
        let reader = spawn_fifo_reader(&fifo);

        let storage = LocalStorage::new(dir.path());
        let doc = Document::from_text("Uryyb, Jbeyq!\n");
        storage.write_document(Path::new("out.fifo"), &doc).await.unwrap();

        assert_eq!(reader.join().unwrap(), "Uryyb, Jbeyq!\n");
        assert!(std::fs::symlink_metadata(&fifo).unwrap().file_type().is_fifo());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_write_keeps_fifo_destination() {
        use std::os::unix::fs::FileTypeExt;

        let dir = TempDir::new().unwrap();
        let fifo = dir.path().join("out.fifo");
        make_fifo(&fifo);
        let reader = spawn_fifo_reader(&fifo);

        let result = write_destination(Path::new("out.fifo"), &fifo, write_then_fail).await;

        assert!(result.is_err());
        assert_eq!(reader.join().unwrap(), "partial line\n");
        assert!(std::fs::symlink_metadata(&fifo).unwrap().file_type().is_fifo());
    }
}
