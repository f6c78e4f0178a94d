use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by the demo library.
///
/// Failures that the demos *show off* (thrown payloads, the standard
/// hierarchy) are plain values in [`crate::failures`]; this type only covers
/// things that actually went wrong while running a demo.
#[derive(Debug, Error, Diagnostic)]
pub enum DemoError {
    #[error("IO Error: {0}")]
    #[diagnostic(code(idiom_lab::io))]
    IoError(#[from] std::io::Error),

    #[error("Could not open file {}", path.display())]
    #[diagnostic(
        code(idiom_lab::open),
        help("check that the file exists and the workspace directory is correct")
    )]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: expected {expected}, got {found:?}")]
    #[diagnostic(code(idiom_lab::input))]
    InvalidInput {
        expected: &'static str,
        found: String,
    },

    #[error("End of input")]
    #[diagnostic(code(idiom_lab::end_of_input))]
    EndOfInput,

    #[error("Record error: {0}")]
    #[diagnostic(code(idiom_lab::record))]
    RecordError(String),

    #[error("Menu error: {0}")]
    #[diagnostic(code(idiom_lab::menu))]
    MenuError(String),

    #[error("Handler `{later}` can never run: `{earlier}` is listed first and catches it")]
    #[diagnostic(
        code(idiom_lab::catch_order),
        help("list the more specific handler before the more general one")
    )]
    ShadowedHandler { earlier: String, later: String },
}

impl DemoError {
    /// Wraps a failed `File::open`/`OpenOptions::open` with the path that was tried.
    pub fn open_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenFailed {
            path: path.into(),
            source,
        }
    }
}
