use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing SQL dump: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to execute SQL script: {0}")]
    Execution(#[from] rusqlite::Error),

    #[error(
        "DB generation failed or produced tiny output: {} ({}, need at least {min_size} bytes)",
        path.display(),
        describe_size(*size)
    )]
    BuildVerification {
        path: PathBuf,
        size: Option<u64>,
        min_size: u64,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

fn describe_size(size: Option<u64>) -> String {
    match size {
        Some(size) => format!("{size} bytes"),
        None => "no file".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
