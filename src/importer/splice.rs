//! Replacing directives with imported content

use super::directive::{self, ImportDirective};
use super::error::{FormatError, ImportError};
use super::report::{DirectiveRecord, SpliceReport};
use super::resolver::{FsResolver, Resolver};
use std::time::Instant;

/// Result of splicing one document
#[derive(Debug)]
pub struct SpliceResult {
    /// Document with every directive replaced
    pub content: String,
    pub report: SpliceReport,
}

/// Scans a document for directives and splices in what they reference
pub struct Importer<R = FsResolver> {
    resolver: R,
}

impl Default for Importer<FsResolver> {
    fn default() -> Self {
        Self::new(FsResolver::default())
    }
}

impl<R: Resolver> Importer<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn scan(&self, document: &str) -> Result<Vec<ImportDirective>, FormatError> {
        directive::scan(document)
    }

    pub fn resolve(&self, path: &str) -> Result<String, ImportError> {
        self.resolver.resolve(path)
    }

    /// Replace each directive in `document` with its resolved content.
    ///
    /// `directives` must come from scanning this same `document`: spans are
    /// positions in the original text, ordered and disjoint. Inserted content
    /// is never scanned again.
    pub fn apply(
        &self,
        document: &str,
        directives: &[ImportDirective],
    ) -> Result<String, ImportError> {
        self.apply_inner(document, directives, None)
    }

    /// Scan and apply in one step, recording a report
    pub fn splice(
        &self,
        document: &str,
        input_name: &str,
        output_name: &str,
    ) -> Result<SpliceResult, ImportError> {
        let start_time = Instant::now();
        let mut report = SpliceReport::new(input_name, output_name);
        report.statistics.input_bytes = document.len();

        let directives = self.scan(document)?;
        let content = self.apply_inner(document, &directives, Some(&mut report))?;

        report.statistics.output_bytes = content.len();
        report.duration_ms = start_time.elapsed().as_millis() as u64;

        Ok(SpliceResult { content, report })
    }

    fn apply_inner(
        &self,
        document: &str,
        directives: &[ImportDirective],
        mut report: Option<&mut SpliceReport>,
    ) -> Result<String, ImportError> {
        let mut text = document.to_string();
        // original length minus current length, over all replacements so far
        let mut offset: isize = 0;

        for directive in directives {
            log::info!("Importing: {}", directive.path);
            let content = self.resolver.resolve(&directive.path)?;

            let start = shift(directive.span.start, offset);
            let end = shift(directive.span.end, offset);
            text.replace_range(start..end, &content);
            offset += directive.span.len() as isize - content.len() as isize;

            if let Some(report) = report.as_deref_mut() {
                report.add_directive(DirectiveRecord {
                    path: directive.path.clone(),
                    span: directive.span,
                    inserted_bytes: content.len(),
                });
            }
        }

        Ok(text)
    }
}

fn shift(position: usize, offset: isize) -> usize {
    (position as isize - offset) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::resolver::MemoryResolver;

    fn importer(files: &[(&str, &str)]) -> Importer<MemoryResolver> {
        let mut resolver = MemoryResolver::new();
        for (path, content) in files {
            resolver.insert(path, content);
        }
        Importer::new(resolver)
    }

    fn run(importer: &Importer<MemoryResolver>, document: &str) -> String {
        let directives = importer.scan(document).unwrap();
        importer.apply(document, &directives).unwrap()
    }

    #[test]
    fn test_identity_without_directives() {
        let importer = importer(&[]);
        let doc = "# Title\n\nNothing to import here.\n";
        assert_eq!(run(&importer, doc), doc);
        assert_eq!(run(&importer, ""), "");
    }

    #[test]
    fn test_single_replacement() {
        let importer = importer(&[("f", "X")]);
        assert_eq!(run(&importer, "A#import \"f\"B"), "AXB");
    }

    #[test]
    fn test_two_replacements_with_different_lengths() {
        let importer = importer(&[("a", "1"), ("b", "22")]);
        assert_eq!(run(&importer, "#import \"a\"-#import \"b\""), "1-22");
    }

    #[test]
    fn test_longer_content_keeps_later_positions() {
        let long = "a much longer piece of imported text";
        let importer = importer(&[("a", long), ("b", "B")]);
        assert_eq!(
            run(&importer, "[#import \"a\"][#import \"b\"]"),
            format!("[{}][B]", long)
        );
    }

    #[test]
    fn test_empty_content_removes_directive() {
        let importer = importer(&[("e", ""), ("b", "B")]);
        assert_eq!(run(&importer, "x#import \"e\"y#import \"b\"z"), "xyBz");
    }

    #[test]
    fn test_same_path_twice() {
        let importer = importer(&[("a", "AA")]);
        assert_eq!(
            run(&importer, "#import \"a\" and #import  \"a\""),
            "AA and AA"
        );
    }

    #[test]
    fn test_imported_content_not_rescanned() {
        let importer = importer(&[("outer", "before #import \"inner\" after")]);
        assert_eq!(
            run(&importer, "#import \"outer\"!"),
            "before #import \"inner\" after!"
        );
    }

    #[test]
    fn test_multibyte_content() {
        let importer = importer(&[("a", "ü"), ("b", "日本語")]);
        assert_eq!(
            run(&importer, "é#import \"a\"→#import \"b\"←"),
            "éü→日本語←"
        );
    }

    #[test]
    fn test_second_run_is_identity() {
        let importer = importer(&[("a", "1"), ("b", "22")]);
        let first = run(&importer, "#import \"a\"-#import \"b\"");
        assert_eq!(run(&importer, &first), first);
    }

    #[test]
    fn test_missing_import_aborts() {
        let importer = importer(&[("a", "1")]);
        let doc = "#import \"a\" #import \"nope\"";
        let directives = importer.scan(doc).unwrap();
        match importer.apply(doc, &directives) {
            Err(ImportError::Resolve { path, .. }) => assert_eq!(path, "nope"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_splice_reports_malformed_directive() {
        let importer = importer(&[]);
        let err = importer.splice("#import a", "in", "out").unwrap_err();
        assert!(matches!(
            err,
            ImportError::Format(FormatError::MissingQuote { .. })
        ));
    }

    #[test]
    fn test_splice_report() {
        let importer = importer(&[("a", "1"), ("b", "22")]);
        let doc = "#import \"a\"-#import \"b\"";
        let result = importer.splice(doc, "doc.md", "doc_gen.md").unwrap();

        assert_eq!(result.content, "1-22");
        let report = &result.report;
        assert_eq!(report.input_file, "doc.md");
        assert_eq!(report.statistics.directive_count, 2);
        assert_eq!(report.statistics.input_bytes, doc.len());
        assert_eq!(report.statistics.output_bytes, 4);
        assert_eq!(report.statistics.imported_bytes, 3);
        assert_eq!(report.directives[1].path, "b");
        assert_eq!(report.directives[1].span.start, 12);
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift(10, 0), 10);
        assert_eq!(shift(10, 4), 6);
        assert_eq!(shift(10, -4), 14);
    }
}
