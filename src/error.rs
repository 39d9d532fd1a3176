use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by the read/sort/write pipeline.
///
/// Token parse failures are not represented here: the reader recovers from
/// them locally by logging the bad token and truncating the affected line.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    pub(crate) fn file_access(path: &Path, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
