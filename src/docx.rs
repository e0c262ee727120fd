//! Minimal `.docx` table reader.
//!
//! A `.docx` file is a ZIP archive whose main content lives in
//! `word/document.xml`. This module extracts just enough of it for the
//! extractor: the top-level tables, as rows of plain-text cells. Formatting,
//! sections, headers and everything else in the package is ignored.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// A table from the document body: rows of cell texts.
///
/// Cell text follows python-docx conventions: paragraphs within a cell are
/// joined with `\n`, tabs contribute `\t`, explicit breaks contribute `\n`.
/// A cell spanning N grid columns appears N times in its row.
#[derive(Debug, Clone, Default)]
pub struct DocTable {
    pub rows: Vec<Vec<String>>,
}

/// A parsed specification document: its name and top-level tables.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub tables: Vec<DocTable>,
}

impl Document {
    /// Open a `.docx` file and collect its top-level tables.
    pub fn open(path: &Path) -> Result<Document> {
        let file = std::fs::File::open(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut archive =
            ZipArchive::new(file).map_err(|_| Error::NotDocx(path.to_path_buf()))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|_| Error::MissingDocumentXml(path.to_path_buf()))?
            .read_to_string(&mut xml)
            .map_err(|e| Error::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Document {
            name: path.display().to_string(),
            tables: parse_tables(&xml)?,
        })
    }
}

/// Collect the top-level `w:tbl` elements of a document body.
///
/// Tables nested inside cells are skipped entirely, matching the behavior of
/// iterating `doc.tables` in python-docx.
pub fn parse_tables(xml: &str) -> Result<Vec<DocTable>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut tables = Vec::new();
    let mut table = DocTable::default();
    let mut row: Vec<String> = Vec::new();

    let mut tbl_depth = 0usize;
    let mut in_cell = false;
    let mut in_text = false;
    let mut paragraphs: Vec<String> = Vec::new();
    let mut paragraph = String::new();
    let mut grid_span = 1usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => {
                    tbl_depth += 1;
                    if tbl_depth == 1 {
                        table = DocTable::default();
                    }
                }
                b"tr" if tbl_depth == 1 => row = Vec::new(),
                b"tc" if tbl_depth == 1 => {
                    in_cell = true;
                    paragraphs = Vec::new();
                    paragraph = String::new();
                    grid_span = 1;
                }
                b"t" if in_cell && tbl_depth == 1 => in_text = true,
                _ => {}
            },
            Event::Empty(e) if in_cell && tbl_depth == 1 => {
                match e.local_name().as_ref() {
                    b"tab" => paragraph.push('\t'),
                    b"br" => paragraph.push('\n'),
                    b"gridSpan" => grid_span = span_value(&e),
                    _ => {}
                }
            }
            Event::Text(e) if in_text => {
                let text = e.unescape().map_err(quick_xml::Error::from)?;
                paragraph.push_str(&text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" => {
                    if tbl_depth == 1 {
                        tables.push(std::mem::take(&mut table));
                    }
                    tbl_depth = tbl_depth.saturating_sub(1);
                }
                b"tr" if tbl_depth == 1 => table.rows.push(std::mem::take(&mut row)),
                b"tc" if tbl_depth == 1 => {
                    in_cell = false;
                    let text = paragraphs.join("\n");
                    // A merged cell occupies one grid column per span.
                    for _ in 0..grid_span.max(1) {
                        row.push(text.clone());
                    }
                }
                b"p" if in_cell && tbl_depth == 1 => {
                    paragraphs.push(std::mem::take(&mut paragraph));
                }
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(tables)
}

/// Read the `w:val` of a `w:gridSpan` element; malformed spans count as 1.
fn span_value(e: &quick_xml::events::BytesStart) -> usize {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == b"val")
        .and_then(|a| String::from_utf8_lossy(&a.value).trim().parse().ok())
        .unwrap_or(1)
}
