//! Error types for directive scanning and splicing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 1-based line and column of a byte offset in `text`. Columns count chars.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// A directive whose quoted path is absent or unterminated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}, col {column}: expected '\"' after #import")]
    MissingQuote {
        offset: usize,
        line: usize,
        column: usize,
    },
    #[error("line {line}, col {column}: unterminated import path, missing closing '\"'")]
    UnterminatedPath {
        offset: usize,
        line: usize,
        column: usize,
    },
}

impl FormatError {
    pub(crate) fn missing_quote(text: &str, offset: usize) -> Self {
        let (line, column) = line_col(text, offset);
        FormatError::MissingQuote {
            offset,
            line,
            column,
        }
    }

    pub(crate) fn unterminated_path(text: &str, offset: usize) -> Self {
        let (line, column) = line_col(text, offset);
        FormatError::UnterminatedPath {
            offset,
            line,
            column,
        }
    }

    /// Byte offset in the original document where the problem was detected
    pub fn offset(&self) -> usize {
        match self {
            FormatError::MissingQuote { offset, .. } | FormatError::UnterminatedPath { offset, .. } => {
                *offset
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("malformed import directive: {0}")]
    Format(#[from] FormatError),
    #[error("failed to import {path:?}: {source}")]
    Resolve {
        #[source]
        source: io::Error,
        path: String,
    },
    #[error("failed to read document {path:?}: {source}")]
    Read {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("failed to write document {path:?}: {source}")]
    Write {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
}
