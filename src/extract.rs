//! Import command extractor
//!
//! Registry docs present import examples as shell command lines, e.g.:
//!
//! ```text
//! terraform import google_storage_bucket.default bucket-name
//! ```
//!
//! This module scans the rendered doc content for such lines and captures
//! the ID format that follows the command. It is a textual heuristic over
//! prose, not a structured parse.

use regex::Regex;

/// Extracts import ID formats from rendered documentation content
pub struct ImportFormatExtractor {
    import_pattern: Regex,
}

impl Default for ImportFormatExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormatExtractor {
    /// Create a new extractor with the compiled import-command pattern
    pub fn new() -> Self {
        Self {
            // Match lines like:
            // terraform import google_storage_bucket.default bucket-name
            // $ terraform import aws_instance.web i-12345678
            // The capture is everything after the command to end of line.
            import_pattern: Regex::new(r"terraform import (.*)")
                .expect("Invalid import pattern regex"),
        }
    }

    /// Extract every import ID format, in order of appearance.
    ///
    /// Duplicates are preserved; content with no import example yields an
    /// empty list.
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.import_pattern
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}
