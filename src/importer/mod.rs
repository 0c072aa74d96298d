//! `#import "path"` splicing
//!
//! A document is scanned once for directives of the form `#import "path"`.
//! Each directive is then replaced, left to right, with the full content of
//! the file it names. Replacement is a single pass: imported content is
//! inserted as-is and never scanned for further directives.

mod directive;
mod error;
mod report;
mod resolver;
mod splice;

pub use directive::{scan, ImportDirective, Span, IMPORT_TOKEN};
pub use error::{line_col, FormatError, ImportError};
pub use report::{DirectiveRecord, ReportFormat, SpliceReport, SpliceStatistics};
pub use resolver::{FsResolver, MemoryResolver, Resolver};
pub use splice::{Importer, SpliceResult};
