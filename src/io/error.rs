use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A structurally malformed record: bad or missing counts, truncated
    /// atom or bond lines, unparseable numbers.
    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    /// An atom line named a symbol absent from the element table.
    #[error("unknown element symbol '{symbol}' (at line ~{line})")]
    UnknownElement { line: usize, symbol: String },

    #[error("failed to read target table: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
