//! Buffered line source for quote files.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Longest path accepted before the open is rejected as invalid.
const MAX_PATH_BYTES: usize = 4096;

/// Lazy line iterator over a quote file.
///
/// Finite and not restartable. The file handle is released on drop, so the
/// stream is closed on every exit path, including mid-run aborts.
#[derive(Debug)]
pub struct QuoteFile {
    lines: Lines<BufReader<File>>,
}

impl QuoteFile {
    /// Open a quote file for line-by-line reading.
    ///
    /// Open failures are classified so the caller can report them:
    /// a missing file, denied access, and an invalid or overlong path are
    /// surfaced as distinct error kinds.
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() || path.as_os_str().len() > MAX_PATH_BYTES {
            return Err(Error::SourcePathInvalid {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::SourceNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Error::SourceAccessDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidInput => Error::SourcePathInvalid {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        debug!("opened quote file {}", path.display());
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for QuoteFile {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|r| r.map_err(Error::Io))
    }
}
