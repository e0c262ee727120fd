//! # oneM2M attribute short-name extractor
//!
//! A library for extracting attribute definitions (short names, long names,
//! categories and the tables they occur in) from oneM2M specification
//! documents in `.docx` format.
//!
//! ## Example
//!
//! ```rust,no_run
//! use onem2m_attrs::{extractor, output, AttributeSet};
//! use std::path::Path;
//!
//! let mut attrs = AttributeSet::new();
//! extractor::extract_file(Path::new("TS-0004.docx"), &mut attrs).unwrap();
//!
//! output::write_json(&attrs, Path::new("attributes.json")).unwrap();
//! println!("{}", output::render_attribute_table(&attrs, true));
//! ```

pub mod attribute;
pub mod catalog;
pub mod docx;
pub mod error;
pub mod extractor;
pub mod output;

pub use attribute::{Attribute, AttributeSet};
pub use catalog::{find_layout, TableLayout, LAYOUTS};
pub use docx::{DocTable, Document};
pub use error::{Error, Result};
pub use extractor::{extract_document, extract_file};
pub use output::{render_attribute_table, render_summary, write_csv_files, write_json};
