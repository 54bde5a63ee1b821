use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{map_io_err, FixError, FixResult};

/// The target file held as an ordered line sequence.
///
/// Lines keep their terminators (`\n` or `\r\n`) so that untouched lines
/// round-trip byte-for-byte. The content hash taken at load time is checked
/// again before writing, so a concurrent edit to the file is rejected instead
/// of silently overwritten.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
    hash_on_load: String,
}

impl Document {
    /// Read the file into a line sequence, preserving line terminators
    pub fn load(path: impl AsRef<Path>) -> FixResult<Self> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());

        let content = fs::read_to_string(path).map_err(map_io_err(path))?;
        let lines = split_lines(&content);
        debug!("Read {} lines from {}", lines.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            lines,
            hash_on_load: content_hash(&content),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Replace the whole line sequence; there is no in-place line editing
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// Join the lines back into file content, exactly as stored
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Overwrite the file with the current line sequence.
    ///
    /// Fails with [`FixError::ConcurrentModification`] if the on-disk content
    /// no longer matches what was loaded.
    pub fn save(&self) -> FixResult<()> {
        let current = fs::read_to_string(&self.path).map_err(map_io_err(&self.path))?;
        if content_hash(&current) != self.hash_on_load {
            return Err(FixError::concurrent_modification(&self.path));
        }

        debug!("Writing {} lines to {}", self.lines.len(), self.path.display());
        fs::write(&self.path, self.render()).map_err(map_io_err(&self.path))
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Calculate a hash for file content
fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_preserves_terminators() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("mixed.tsx");
        fs::write(&file_path, "first\r\nsecond\nlast without newline").unwrap();

        let document = Document::load(&file_path).unwrap();
        assert_eq!(
            document.lines(),
            &["first\r\n", "second\n", "last without newline"]
        );
        assert_eq!(document.render(), "first\r\nsecond\nlast without newline");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Document::load(dir.path().join("absent.tsx")).unwrap_err();
        assert!(matches!(err, FixError::Io { .. }));
    }

    #[test]
    fn test_save_round_trips_unchanged_content() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.tsx");
        fs::write(&file_path, "a\r\nb\nc\n").unwrap();

        let document = Document::load(&file_path).unwrap();
        document.save().unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "a\r\nb\nc\n");
    }

    #[test]
    fn test_save_rejects_concurrent_modification() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.tsx");
        fs::write(&file_path, "original\n").unwrap();

        let mut document = Document::load(&file_path).unwrap();
        document.replace_lines(vec!["edited\n".to_string()]);

        // Another process writes the file while we hold our copy
        fs::write(&file_path, "changed underneath\n").unwrap();

        let err = document.save().unwrap_err();
        assert!(matches!(err, FixError::ConcurrentModification { .. }));
        assert_eq!(
            fs::read_to_string(&file_path).unwrap(),
            "changed underneath\n"
        );
    }
}
