//! Locating `#import "path"` directives in a document

use super::error::FormatError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Literal token that opens a directive
pub const IMPORT_TOKEN: &str = "#import";

/// Half-open byte range `[start, end)` into the original document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// One `#import "path"` occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    /// From the `#` of the token through the closing quote, inclusive
    pub span: Span,
    /// Text between the quotes, used verbatim
    pub path: String,
}

/// Find every directive in `text`, left to right.
///
/// Spans refer to `text` as given and never overlap, since each search
/// resumes right after the previous closing quote. Only plain spaces may sit
/// between the token and the opening quote.
pub fn scan(text: &str) -> Result<Vec<ImportDirective>, FormatError> {
    let bytes = text.as_bytes();
    let mut directives = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(IMPORT_TOKEN) {
        let start = cursor + found;
        let mut pos = start + IMPORT_TOKEN.len();

        while bytes.get(pos) == Some(&b' ') {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b'"') {
            return Err(FormatError::missing_quote(text, pos));
        }

        let path_start = pos + 1;
        let Some(path_len) = text[path_start..].find('"') else {
            return Err(FormatError::unterminated_path(text, pos));
        };
        let path_end = path_start + path_len;
        let end = path_end + 1;

        let directive = ImportDirective {
            span: Span::new(start, end),
            path: text[path_start..path_end].to_string(),
        };
        log::trace!("found import {:?} at {}..{}", directive.path, start, end);
        directives.push(directive);

        cursor = end;
    }

    log::debug!("scanned {} import directive(s)", directives.len());
    Ok(directives)
}
