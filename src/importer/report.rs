//! Run report for a splice

use super::directive::Span;
use serde::{Deserialize, Serialize};

/// Output format of a written report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Text => write!(f, "text"),
        }
    }
}

/// One applied import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveRecord {
    /// Path as written in the directive
    pub path: String,
    /// Directive span in the original document
    pub span: Span,
    /// Length of the content that replaced the span
    pub inserted_bytes: usize,
}

impl std::fmt::Display for DirectiveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}..{}, {} bytes)",
            self.path, self.span.start, self.span.end, self.inserted_bytes
        )
    }
}

/// Size figures for the run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpliceStatistics {
    pub directive_count: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// Sum of all inserted content
    pub imported_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpliceReport {
    pub input_file: String,
    pub output_file: String,
    pub timestamp: String,
    pub duration_ms: u64,
    pub statistics: SpliceStatistics,
    pub directives: Vec<DirectiveRecord>,
}

impl SpliceReport {
    pub fn new(input: &str, output: &str) -> Self {
        Self {
            input_file: input.to_string(),
            output_file: output.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            statistics: SpliceStatistics::default(),
            directives: Vec::new(),
        }
    }

    pub fn add_directive(&mut self, record: DirectiveRecord) {
        self.statistics.directive_count += 1;
        self.statistics.imported_bytes += record.inserted_bytes;
        self.directives.push(record);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Import Report\n");
        output.push_str("=============\n");
        output.push_str(&format!("Input:  {}\n", self.input_file));
        output.push_str(&format!("Output: {}\n", self.output_file));
        output.push_str(&format!("Date:   {}\n", self.timestamp));
        output.push_str(&format!("Time:   {}ms\n\n", self.duration_ms));

        output.push_str("Statistics\n");
        output.push_str("----------\n");
        output.push_str(&format!(
            "Imports:         {}\n",
            self.statistics.directive_count
        ));
        output.push_str(&format!(
            "Input bytes:     {}\n",
            self.statistics.input_bytes
        ));
        output.push_str(&format!(
            "Imported bytes:  {}\n",
            self.statistics.imported_bytes
        ));
        output.push_str(&format!(
            "Output bytes:    {}\n",
            self.statistics.output_bytes
        ));

        if !self.directives.is_empty() {
            output.push_str("\nImports\n");
            output.push_str("-------\n");
            for record in &self.directives {
                output.push_str(&format!("✓ {}\n", record));
            }
        }

        output
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Text => Ok(self.to_text()),
        }
    }
}
