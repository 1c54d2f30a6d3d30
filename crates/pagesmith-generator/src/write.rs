//! Generate-once file writes.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use tracing::warn;

/// What happened to a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was created.
    Written,

    /// The file already existed and was left untouched.
    Skipped,
}

impl WriteOutcome {
    /// Whether a new file was created.
    #[must_use]
    pub fn is_written(self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Write `contents` to `path` unless a file is already there.
///
/// Missing parent directories are created. The existence check and the
/// create happen in one `create_new` open, so a file that appears between
/// check and write is never overwritten. A write that fails part way removes
/// the new file, so a later run does not skip a truncated page.
pub fn write_if_absent(path: &Path, contents: &str) -> io::Result<WriteOutcome> {
    write_with(path, |file| {
        file.write_all(contents.as_bytes())?;
        file.flush()
    })
}

fn write_with(
    path: &Path,
    fill: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<WriteOutcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(WriteOutcome::Skipped),
        Err(e) => return Err(e),
    };

    if let Err(e) = fill(&mut file) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "failed to remove partial file");
        }
        return Err(e);
    }

    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("learn").join("xrp-wallets").join("page.tsx");

        let outcome = write_if_absent(&path, "export default 1;\n").unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert!(outcome.is_written());
        assert_eq!(fs::read_to_string(&path).unwrap(), "export default 1;\n");
    }

    #[test]
    fn test_existing_file_is_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "hand edited").unwrap();

        let outcome = write_if_absent(&path, "generated").unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited");
    }

    #[test]
    fn test_second_write_skips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("page.tsx");

        assert_eq!(write_if_absent(&path, "one").unwrap(), WriteOutcome::Written);
        assert_eq!(write_if_absent(&path, "two").unwrap(), WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("xrp-amm").join("page.tsx");

        let result = write_with(&path, |file| {
            file.write_all(b"export default funct")?;
            Err(io::Error::other("disk full"))
        });

        assert_eq!(result.unwrap_err().to_string(), "disk full");
        assert!(!path.exists());
        assert_eq!(
            write_if_absent(&path, "complete").unwrap(),
            WriteOutcome::Written
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "complete");
    }

    #[test]
    fn test_empty_existing_file_counts_as_present() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "").unwrap();

        assert_eq!(write_if_absent(&path, "x").unwrap(), WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
