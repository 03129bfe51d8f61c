//! Error types for decoding and reference-table loading.
//!
//! # Invariants
//! - Every decode failure is terminal for the call; no partial records.
//! - Errors carry the offending input, component or expected/got pair.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Birth-date component that failed numeric parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeComponent {
    Year,
    Day,
}

impl DecodeComponent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Day => "day",
        }
    }
}

impl Display for DecodeComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode-pipeline error, reported in pipeline order.
#[derive(Debug)]
pub enum DecodeError {
    /// Normalized input does not match the codice fiscale grammar.
    Shape { input: String },
    /// Year or day field is not an integer (or day out of range) after omocodia reversal.
    Format {
        component: DecodeComponent,
        value: String,
    },
    /// Canonical place code matches neither municipalities nor countries.
    PlaceUnknown { code: String },
    /// `compute_cin` input is not 15 or 16 characters long.
    Length { len: usize },
    /// `compute_cin` input holds a character outside `[0-9A-Z]`.
    InvalidCharacter { position: usize, found: char },
    Checksum { expected: char, got: char },
    /// Bundled reference tables could not be initialized.
    Tables(TableError),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape { input } => write!(f, "invalid codice fiscale: {input:?}"),
            Self::Format { component, value } => {
                write!(f, "can't convert '{component}' component: {value:?}")
            }
            Self::PlaceUnknown { code } => write!(f, "birth place code not found: {code}"),
            Self::Length { len } => {
                write!(f, "the code length must be 15 or 16, got {len}")
            }
            Self::InvalidCharacter { position, found } => {
                write!(f, "invalid character {found:?} at position {position}")
            }
            Self::Checksum { expected, got } => {
                write!(f, "wrong CIN (computed: '{expected}' found: '{got}')")
            }
            Self::Tables(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tables(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TableError> for DecodeError {
    fn from(value: TableError) -> Self {
        Self::Tables(value)
    }
}

/// Reference-table loading and indexing error.
#[derive(Debug)]
pub enum TableError {
    Json(serde_json::Error),
    Csv(csv::Error),
    Io(std::io::Error),
    Zip(zip::result::ZipError),
    /// Archive holds no `.csv` entry with country records.
    MissingCountryCsv,
    /// Country table has no `Italia` / `Italy` record.
    MissingItaly,
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid municipalities JSON: {err}"),
            Self::Csv(err) => write!(f, "invalid countries CSV: {err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Zip(err) => write!(f, "invalid countries archive: {err}"),
            Self::MissingCountryCsv => write!(f, "countries archive contains no CSV records"),
            Self::MissingItaly => write!(f, "countries table has no Italy record"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Zip(err) => Some(err),
            Self::MissingCountryCsv | Self::MissingItaly => None,
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<csv::Error> for TableError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<std::io::Error> for TableError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<zip::result::ZipError> for TableError {
    fn from(value: zip::result::ZipError) -> Self {
        Self::Zip(value)
    }
}
