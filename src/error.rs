// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Error types shared by the floorplan parsers and the renderer

use std::fmt;
use std::path::PathBuf;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Error types that can occur while parsing problem, result or block files
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Token stream ended before a declared structure was complete
    UnexpectedEof {
        expected: String,
        position: usize,
    },
    /// A token that should be numeric failed to convert
    InvalidNumber {
        token: String,
        expected: String,
        position: usize,
    },
    /// A section count that cannot be a count (negative, or more groups than tokens left)
    InvalidCount {
        section: &'static str,
        count: String,
        position: usize,
    },
    /// Missing or non-positive chip outline
    InvalidOutline(String),
    /// A line of a block layout file that does not match its format
    InvalidLine { line: usize, content: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof { expected, position } => {
                write!(
                    f,
                    "Unexpected end of input at token {position}: expected {expected}"
                )
            }
            ParseError::InvalidNumber {
                token,
                expected,
                position,
            } => {
                write!(
                    f,
                    "Invalid number '{token}' at token {position}: expected {expected}"
                )
            }
            ParseError::InvalidCount {
                section,
                count,
                position,
            } => {
                write!(
                    f,
                    "Invalid {section} count '{count}' at token {position}"
                )
            }
            ParseError::InvalidOutline(msg) => write!(f, "Invalid outline: {msg}"),
            ParseError::InvalidLine { line, content } => {
                write!(f, "Invalid block line {line}: '{content}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors surfaced by the file-level API
#[derive(Debug)]
pub enum FloorplanError {
    /// Input file missing or unreadable
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Input file read but its content is malformed
    Parse { path: PathBuf, source: ParseError },
    /// SVG scene could not be rasterized
    Render(String),
    /// Module table could not be written
    Export(csv::Error),
    /// Output file could not be written
    Io(std::io::Error),
}

impl fmt::Display for FloorplanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorplanError::FileAccess { path, source } => {
                write!(f, "Cannot read {}: {source}", path.display())
            }
            FloorplanError::Parse { path, source } => {
                write!(f, "Error parsing {}: {source}", path.display())
            }
            FloorplanError::Render(msg) => write!(f, "Render failed: {msg}"),
            FloorplanError::Export(e) => write!(f, "Export failed: {e}"),
            FloorplanError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for FloorplanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FloorplanError::FileAccess { source, .. } => Some(source),
            FloorplanError::Parse { source, .. } => Some(source),
            FloorplanError::Render(_) => None,
            FloorplanError::Export(e) => Some(e),
            FloorplanError::Io(e) => Some(e),
        }
    }
}

impl From<csv::Error> for FloorplanError {
    fn from(e: csv::Error) -> Self {
        FloorplanError::Export(e)
    }
}

impl From<std::io::Error> for FloorplanError {
    fn from(e: std::io::Error) -> Self {
        FloorplanError::Io(e)
    }
}
