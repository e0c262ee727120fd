//! Extract attribute rows from a document's tables.

use crate::attribute::AttributeSet;
use crate::catalog;
use crate::docx::Document;
use crate::error::Result;
use deunicode::deunicode;
use std::path::Path;
use tracing::debug;

/// Extract all attribute definitions from a `.docx` file into `attrs`.
/// Returns the number of rows recorded from this document.
pub fn extract_file(path: &Path, attrs: &mut AttributeSet) -> Result<usize> {
    let doc = Document::open(path)?;
    Ok(extract_document(&doc, attrs))
}

/// Scan a document's tables for known layouts and record their rows.
pub fn extract_document(doc: &Document, attrs: &mut AttributeSet) -> usize {
    let before = attrs.processed();

    for table in &doc.tables {
        let Some(header) = table.rows.first() else {
            continue;
        };
        let Some(layout) = catalog::find_layout(header) else {
            continue;
        };

        debug!(
            category = layout.category,
            rows = table.rows.len() - 1,
            document = %doc.name,
            "matched attribute table"
        );

        for row in &table.rows[1..] {
            // A row that lost or gained cells (merges, continuation rows)
            // cannot be mapped onto the layout columns.
            if row.len() != layout.headers.len() {
                continue;
            }
            if row[0].to_lowercase().starts_with("note:") {
                continue;
            }

            let attribute = deunicode(&row[layout.attribute]).trim().to_string();
            let shortname = deunicode(&row[layout.shortname].replace('*', "").to_lowercase());

            // An empty short name marks the end of the definitions in
            // this table.
            if shortname.is_empty() {
                break;
            }

            let occurs_in: Vec<String> = match layout.occurs_in {
                Some(col) => deunicode(&row[col])
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
                None => vec!["n/a".to_string()],
            };

            attrs.record(&shortname, &attribute, occurs_in, layout.category, &doc.name);
        }
    }

    attrs.processed() - before
}
