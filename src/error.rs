//! Error types for the attribute extractor.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all extractor operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input document \"{0}\" is not a .docx file")]
    NotDocx(PathBuf),

    #[error("Document \"{0}\" has no word/document.xml part")]
    MissingDocumentXml(PathBuf),

    #[error("Error parsing document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
