//! Loading JSON documents from files or standard input

use crate::error::{ReportError, ReportResult};
use crate::report::ValidationReport;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Where a document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a path
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Read the whole source as text
    pub fn read_to_string(&self) -> ReportResult<String> {
        match self {
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| ReportError::ReadStdin { source })?;
                Ok(buf)
            }
            InputSource::File(path) => read_file(path),
        }
    }
}

impl FromStr for InputSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> ReportResult<String> {
    debug!("Reading JSON document: {:?}", path);
    std::fs::read_to_string(path).map_err(|source| ReportError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse text into any deserializable document, naming `origin` in errors
pub fn parse_document<T: DeserializeOwned>(text: &str, origin: &str) -> ReportResult<T> {
    serde_json::from_str(text).map_err(|source| ReportError::ParseJson {
        origin: origin.to_string(),
        source,
    })
}

/// Load an arbitrary JSON value
pub fn load_json(source: &InputSource) -> ReportResult<Value> {
    let text = source.read_to_string()?;
    parse_document(&text, &source.to_string())
}

/// Load a saved validation service response
pub fn load_report(source: &InputSource) -> ReportResult<ValidationReport> {
    let text = source.read_to_string()?;
    parse_document(&text, &source.to_string())
}
