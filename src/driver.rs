//! Fixed-path run: `doc.md` in, `doc_gen.md` out

use crate::config::SpliceConfig;
use crate::importer::{FsResolver, ImportError, Importer, SpliceReport};
use anyhow::Context;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const INPUT_FILE: &str = "doc.md";
pub const OUTPUT_FILE: &str = "doc_gen.md";

/// Splice `dir/doc.md` into `dir/doc_gen.md`, resolving imports against `dir`.
///
/// Nothing is written unless every directive was replaced.
pub fn run_in(dir: &Path, config: &SpliceConfig) -> anyhow::Result<SpliceReport> {
    let input_path = dir.join(INPUT_FILE);
    let output_path = dir.join(OUTPUT_FILE);

    let document = fs::read_to_string(&input_path).map_err(|source| ImportError::Read {
        source,
        path: input_path.clone(),
    })?;

    let importer = Importer::new(FsResolver::with_root(dir));
    let result = importer.splice(&document, INPUT_FILE, OUTPUT_FILE)?;

    write_document(&output_path, &result.content)?;
    log::debug!(
        "wrote {} bytes to {}",
        result.content.len(),
        output_path.display()
    );

    if let Some(report_path) = &config.report {
        let report_path = dir.join(report_path);
        let content = result
            .report
            .render(config.report_format)
            .context("failed to serialize report")?;
        fs::write(&report_path, content)
            .with_context(|| format!("failed to write report to {}", report_path.display()))?;
        log::info!("Report written to {}", report_path.display());
    }

    Ok(result.report)
}

fn write_document(path: &Path, content: &str) -> Result<(), ImportError> {
    let to_error = |source| ImportError::Write {
        source,
        path: path.to_path_buf(),
    };
    let mut writer = BufWriter::new(fs::File::create(path).map_err(to_error)?);
    writer.write_all(content.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)
}
