use std::{io, path::PathBuf};

/// Failure to load a price or device file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("`{}` does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("`{}` has no `{column}` column", .path.display())]
    SchemaMismatch { path: PathBuf, column: String },

    #[error("failed to parse `{}` at line {line}: {reason}", .path.display())]
    Parse { path: PathBuf, line: u64, reason: String },

    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,

        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
