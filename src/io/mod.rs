//! I/O utilities for CSV input handling.
//!
//! This module provides parsing of pasted or uploaded CSV text into preview
//! tables and the column headers offered for selection.

pub mod csv_preview;

// Re-export commonly used types and functions
pub use csv_preview::{csv_headers, parse_csv_preview, read_csv_file, CsvPreviewTable};
