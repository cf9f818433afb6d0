use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The compiler ran and exited unsuccessfully. `diagnostics` holds what it
    /// printed, byte for byte.
    #[error("failed to compile {}", .path.display())]
    CompileFailure {
        path: PathBuf,
        code: Option<i32>,
        diagnostics: Vec<u8>,
    },
    /// The compiler exited successfully but printed no binary.
    #[error("shader compiler produced no output for {}", .path.display())]
    EmptyOutput { path: PathBuf },
    #[error("failed to set up a shell to run `{program}` from")]
    Shell {
        program: String,
        #[source]
        source: xshell::Error,
    },
    #[error("failed to run shader compiler `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: xshell::Error,
    },
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
