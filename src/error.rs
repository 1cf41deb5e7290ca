//! Errors raised while scanning and extracting a source tree.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The directory walk itself failed (missing or unreadable directory)
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file did not produce a clean syntax tree
    #[error("failed to parse {path} at {line}:{column}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("failed to load the Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A field type outside the shapes the resolver understands
    #[error("{path}:{line}: unsupported type `{text}` ({kind}) for field {field}")]
    UnsupportedShape {
        path: PathBuf,
        line: usize,
        field: String,
        kind: String,
        text: String,
    },

    #[error("type {name} declared in both {first} and {second}")]
    DuplicateType {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}
