//! Output files that only appear once fully written

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A temporary file in the target's directory, renamed over the target on commit
///
/// Dropping an uncommitted file removes it, so a failed run never leaves a
/// truncated output behind. The input may be the target itself: it is only
/// replaced after everything has been read.
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// Stage a new file for `target`
    pub fn create(target: &Path) -> Result<Self> {
        let parent_dir = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(parent_dir)
            .with_context(|| format!("Failed to create output file: {}", target.display()))?;

        Ok(Self {
            temp,
            target: target.to_path_buf(),
        })
    }

    /// Move the staged file into place
    pub fn commit(self) -> Result<()> {
        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write output file: {}", target.display()))?;
        Ok(())
    }
}

impl Write for StagedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}
