//! Catalog of known attribute-table layouts.
//!
//! The oneM2M specification documents define short names in tables with a
//! handful of recurring header shapes. Each catalog entry records the exact
//! header texts, the column offsets of the interesting cells and the category
//! assigned to rows extracted from a matching table.
//!
//! The catalog may need to be extended when new table shapes are added to
//! the specification documents.

/// Layout of one known attribute table shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Exact header cell texts of the first table row.
    pub headers: &'static [&'static str],
    /// Column of the attribute (long) name.
    pub attribute: usize,
    /// Column of the short name.
    pub shortname: usize,
    /// Column of the "Occurs in" cell, if the layout has one.
    pub occurs_in: Option<usize>,
    /// Category assigned to attributes from this table shape.
    pub category: &'static str,
}

/// All known table layouts, grouped by the specification that uses them.
pub const LAYOUTS: &[TableLayout] = &[
    // TS-0004
    TableLayout {
        headers: &["Parameter Name", "XSD long name", "Occurs in", "Short Name"],
        attribute: 1,
        shortname: 3,
        occurs_in: Some(2),
        category: "Primitive Parameters",
    },
    TableLayout {
        headers: &["Root Element Name", "Occurs in", "Short Name"],
        attribute: 0,
        shortname: 2,
        occurs_in: Some(1),
        category: "Primitive Root Elements",
    },
    TableLayout {
        headers: &["Attribute Name", "Occurs in", "Short Name"],
        attribute: 0,
        shortname: 2,
        occurs_in: Some(1),
        category: "Resource Attributes",
    },
    TableLayout {
        headers: &["Resource Type Name", "Short Name"],
        attribute: 0,
        shortname: 1,
        occurs_in: None,
        category: "Resource Types",
    },
    TableLayout {
        headers: &["Member Name", "Occurs in", "Short Name"],
        attribute: 0,
        shortname: 2,
        occurs_in: Some(1),
        category: "Complex Data Types",
    },
    TableLayout {
        headers: &["Member Name", "Short Name"],
        attribute: 0,
        shortname: 1,
        occurs_in: None,
        category: "Trigger Payload Fields",
    },
    // TS-0023
    TableLayout {
        headers: &["Argument Name", "Occurs in", "Short Name"],
        attribute: 0,
        shortname: 2,
        occurs_in: Some(1),
        category: "Action Arguments",
    },
    TableLayout {
        headers: &["Returned Value Name", "Occurs in", "Short Name"],
        attribute: 0,
        shortname: 2,
        occurs_in: Some(1),
        category: "Action Return Values",
    },
    // TS-0022
    TableLayout {
        headers: &["Attribute Name", "Occurs in", "Short Name", "Notes"],
        attribute: 0,
        shortname: 2,
        occurs_in: Some(1),
        category: "Common and Field Device Configuration",
    },
    TableLayout {
        headers: &["Member Name", "Occurs in", "Short Name", "Notes"],
        attribute: 0,
        shortname: 2,
        occurs_in: Some(1),
        category: "Complex Data Types",
    },
];

/// Find the layout matching a table's header row.
///
/// A table matches when its first row has the same number of cells as the
/// layout and every cell text equals the layout header verbatim. The first
/// matching entry wins; `None` means the table is not an attribute table.
pub fn find_layout(header_row: &[String]) -> Option<&'static TableLayout> {
    LAYOUTS.iter().find(|layout| {
        layout.headers.len() == header_row.len()
            && layout
                .headers
                .iter()
                .zip(header_row)
                .all(|(expected, cell)| cell == expected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_match_resource_attributes() {
        let layout =
            find_layout(&row(&["Attribute Name", "Occurs in", "Short Name"])).unwrap();
        assert_eq!(layout.category, "Resource Attributes");
        assert_eq!(layout.attribute, 0);
        assert_eq!(layout.shortname, 2);
        assert_eq!(layout.occurs_in, Some(1));
    }

    #[test]
    fn test_match_resource_types_without_occurs_in() {
        let layout = find_layout(&row(&["Resource Type Name", "Short Name"])).unwrap();
        assert_eq!(layout.category, "Resource Types");
        assert_eq!(layout.occurs_in, None);
    }

    #[test]
    fn test_notes_column_selects_ts0022_layout() {
        let layout = find_layout(&row(&[
            "Attribute Name",
            "Occurs in",
            "Short Name",
            "Notes",
        ]))
        .unwrap();
        assert_eq!(layout.category, "Common and Field Device Configuration");
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(find_layout(&row(&["Attribute Name", "Occurs in"])).is_none());
    }

    #[test]
    fn test_text_mismatch_rejected() {
        assert!(find_layout(&row(&["attribute name", "Occurs in", "Short Name"])).is_none());
    }

    #[test]
    fn test_empty_header_row_rejected() {
        assert!(find_layout(&[]).is_none());
    }
}
