//! Data structures for extracted attribute definitions.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One attribute definition aggregated across all processed documents.
///
/// The sets are ordered so that serialized output is sorted and stable
/// between runs over identical input.
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    pub shortname: String,
    pub attribute: String,
    #[serde(rename = "occursIn")]
    pub occurs_in: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub documents: BTreeSet<String>,
    /// How many table rows defined this short name.
    #[serde(skip)]
    pub occurrences: usize,
}

impl Attribute {
    /// A duplicate is a short name defined by more than one table row,
    /// within one document or across several.
    pub fn is_duplicate(&self) -> bool {
        self.occurrences > 1
    }
}

/// Aggregate of all extracted attributes, keyed by short name.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
    entries: BTreeMap<String, Attribute>,
    processed: usize,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one extracted table row.
    ///
    /// An existing entry for the short name is merged (sets extended,
    /// occurrence count bumped); a new short name inserts a fresh entry.
    pub fn record(
        &mut self,
        shortname: &str,
        attribute: &str,
        occurs_in: Vec<String>,
        category: &str,
        document: &str,
    ) {
        self.processed += 1;

        if let Some(entry) = self.entries.get_mut(shortname) {
            entry.occurs_in.extend(occurs_in);
            entry.categories.insert(category.to_string());
            entry.documents.insert(document.to_string());
            entry.occurrences += 1;
        } else {
            self.entries.insert(
                shortname.to_string(),
                Attribute {
                    shortname: shortname.to_string(),
                    attribute: attribute.to_string(),
                    occurs_in: occurs_in.into_iter().collect(),
                    categories: BTreeSet::from([category.to_string()]),
                    documents: BTreeSet::from([document.to_string()]),
                    occurrences: 1,
                },
            );
        }
    }

    /// Attributes in short-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    /// Entries recorded more than once.
    pub fn duplicates(&self) -> impl Iterator<Item = &Attribute> {
        self.iter().filter(|a| a.is_duplicate())
    }

    /// Number of distinct short names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of table rows recorded, duplicates included.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Number of short names with more than one definition.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_entry() {
        let mut attrs = AttributeSet::new();
        attrs.record(
            "acp",
            "accessControlPolicy",
            vec!["CREATE".into()],
            "Resource Types",
            "TS-0004.docx",
        );

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.processed(), 1);
        let entry = attrs.iter().next().unwrap();
        assert_eq!(entry.shortname, "acp");
        assert_eq!(entry.attribute, "accessControlPolicy");
        assert!(!entry.is_duplicate());
    }

    #[test]
    fn test_record_merges_existing_entry() {
        let mut attrs = AttributeSet::new();
        attrs.record(
            "ri",
            "resourceID",
            vec!["All".into()],
            "Resource Attributes",
            "TS-0004.docx",
        );
        attrs.record(
            "ri",
            "resourceIdentifier",
            vec!["Response".into()],
            "Primitive Parameters",
            "TS-0022.docx",
        );

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.processed(), 2);
        let entry = attrs.iter().next().unwrap();
        assert!(entry.is_duplicate());
        // First seen long name wins.
        assert_eq!(entry.attribute, "resourceID");
        assert_eq!(entry.occurs_in.len(), 2);
        assert_eq!(entry.categories.len(), 2);
        assert_eq!(entry.documents.len(), 2);
    }

    #[test]
    fn test_duplicates_only_multiply_defined() {
        let mut attrs = AttributeSet::new();
        attrs.record("a", "alpha", vec![], "C", "d1");
        attrs.record("b", "beta", vec![], "C", "d1");
        attrs.record("b", "beta", vec![], "C", "d2");

        assert_eq!(attrs.duplicate_count(), 1);
        let dups: Vec<_> = attrs.duplicates().map(|a| a.shortname.as_str()).collect();
        assert_eq!(dups, vec!["b"]);
    }

    #[test]
    fn test_serialized_shape() {
        let mut attrs = AttributeSet::new();
        attrs.record(
            "ty",
            "resourceType",
            vec!["CREATE".into(), "All".into()],
            "Resource Attributes",
            "TS-0004.docx",
        );

        let json = serde_json::to_value(attrs.iter().next().unwrap()).unwrap();
        assert_eq!(json["shortname"], "ty");
        assert_eq!(json["attribute"], "resourceType");
        // occurrences is internal bookkeeping, not part of the schema
        assert!(json.get("occurrences").is_none());
        // sets serialize sorted
        assert_eq!(json["occursIn"][0], "All");
        assert_eq!(json["occursIn"][1], "CREATE");
        assert!(json["categories"].is_array());
        assert!(json["documents"].is_array());
    }

    #[test]
    fn test_iteration_sorted_by_shortname() {
        let mut attrs = AttributeSet::new();
        attrs.record("zz", "z", vec![], "C", "d");
        attrs.record("aa", "a", vec![], "C", "d");
        let names: Vec<_> = attrs.iter().map(|a| a.shortname.as_str()).collect();
        assert_eq!(names, vec!["aa", "zz"]);
    }
}
