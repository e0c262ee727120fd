//! Write JSON/CSV outputs and render console reports.

use crate::attribute::{Attribute, AttributeSet};
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

/// Write the aggregated attributes as a pretty-printed JSON array (4-space
/// indent), sorted by short name. A missing `.json` extension is appended and
/// missing parent directories are created. Returns the path actually written.
pub fn write_json(attrs: &AttributeSet, outfile: &Path) -> Result<PathBuf> {
    let path = ensure_json_extension(outfile);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let entries: Vec<&Attribute> = attrs.iter().collect();
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    entries.serialize(&mut ser)?;
    std::fs::write(&path, buf)?;

    Ok(path)
}

/// Write one CSV file per input document, under the JSON output's directory.
///
/// Each file is named after the document path with the extension replaced by
/// `.csv`, keeping relative sub-directories so that inputs with the same file
/// name in different directories do not collide. It holds the
/// `(long name, short name)` pairs seen in that document, sorted
/// case-insensitively by long name. Returns the paths written.
pub fn write_csv_files(
    attrs: &AttributeSet,
    documents: &[String],
    outfile: &Path,
) -> Result<Vec<PathBuf>> {
    let out_dir = ensure_json_extension(outfile)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let mut written = Vec::with_capacity(documents.len());
    for document in documents {
        let path = out_dir.join(Path::new(document).with_extension("csv"));
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut rows: Vec<(&str, &str)> = attrs
            .iter()
            .filter(|a| a.documents.contains(document))
            .map(|a| (a.attribute.as_str(), a.shortname.as_str()))
            .collect();
        rows.sort_by_key(|(attribute, _)| attribute.to_lowercase());

        let mut writer = csv::Writer::from_path(&path)?;
        for (attribute, shortname) in rows {
            writer.write_record([attribute, shortname])?;
        }
        writer.flush()?;

        written.push(path);
    }

    Ok(written)
}

/// Render the attributes as a lined console table.
///
/// Duplicate entries show their document list in red. With `duplicates_only`
/// every single-definition entry is omitted.
pub fn render_attribute_table(attrs: &AttributeSet, duplicates_only: bool) -> String {
    let entries: Vec<&Attribute> = if duplicates_only {
        attrs.duplicates().collect()
    } else {
        attrs.iter().collect()
    };

    let mut widths = [9usize, 9, 8, 11]; // column header widths
    for a in &entries {
        widths[0] = widths[0].max(a.attribute.len());
        widths[1] = widths[1].max(a.shortname.len());
        widths[2] = widths[2].max(join(&a.categories).len());
        widths[3] = widths[3].max(join(&a.documents).len());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<w0$} | {:<w1$} | {:<w2$} | {:<w3$}\n",
        "attribute",
        "shortname",
        "category",
        "document(s)",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    ));
    out.push_str(&format!("{}\n", "-".repeat(widths.iter().sum::<usize>() + 9)));

    for a in entries {
        let documents = join(&a.documents);
        let documents = if a.is_duplicate() {
            format!("{:<w$}", documents, w = widths[3]).red().to_string()
        } else {
            format!("{:<w$}", documents, w = widths[3])
        };

        out.push_str(&format!(
            "{:<w0$} | {:<w1$} | {:<w2$} | {}\n",
            a.attribute,
            a.shortname,
            join(&a.categories),
            documents,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
    }

    out
}

/// Summary lines printed after processing.
pub fn render_summary(attrs: &AttributeSet) -> String {
    let mut out = format!("Processed short names:      {}\n", attrs.processed());
    let duplicates = attrs.duplicate_count();
    if duplicates > 0 {
        out.push_str(&format!("Duplicate definitions:      {}\n", duplicates));
    }
    out
}

fn join(set: &std::collections::BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

fn ensure_json_extension(path: &Path) -> PathBuf {
    if path.extension().map(|e| e == "json").unwrap_or(false) {
        path.to_path_buf()
    } else {
        let mut s = path.as_os_str().to_os_string();
        s.push(".json");
        PathBuf::from(s)
    }
}
