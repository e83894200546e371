//! Post-query filter/search composer.
//!
//! The store query for list endpoints is a single tenant-scoped round trip;
//! combining the join-based text predicate with the other filters in SQL is
//! not done. Instead the handler materializes the (already tenant-scoped,
//! already authorization-filtered) list and applies the remaining predicates
//! here, in memory.

use crate::types::DbId;

/// Optional predicates applied to a materialized list. All provided
/// predicates must match.
#[derive(Debug, Default, Clone)]
pub struct FilterSpec {
    pub employee_id: Option<DbId>,
    pub status: Option<String>,
    pub kind: Option<String>,
    /// Case-insensitive substring match against the item's display fields.
    pub search: Option<String>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none()
            && self.status.is_none()
            && self.kind.is_none()
            && self.search.is_none()
    }
}

/// Implemented by list-view rows so [`apply_filters`] stays generic over the
/// entity shape. Display fields come from joined rows (e.g. a document's
/// name plus its owner's name).
pub trait Filterable {
    fn employee_id(&self) -> DbId;
    fn status_label(&self) -> &str;
    fn kind_label(&self) -> Option<&str> {
        None
    }
    /// Up to two display fields searched by the text predicate.
    fn search_fields(&self) -> [Option<&str>; 2];
}

/// Return the subset of `items` matching every provided predicate.
pub fn apply_filters<T: Filterable>(items: Vec<T>, spec: &FilterSpec) -> Vec<T> {
    if spec.is_empty() {
        return items;
    }

    let needle = spec.search.as_ref().map(|s| s.to_lowercase());

    items
        .into_iter()
        .filter(|item| {
            if let Some(employee_id) = spec.employee_id {
                if item.employee_id() != employee_id {
                    return false;
                }
            }
            if let Some(status) = &spec.status {
                if item.status_label() != status {
                    return false;
                }
            }
            if let Some(kind) = &spec.kind {
                if item.kind_label() != Some(kind.as_str()) {
                    return false;
                }
            }
            if let Some(needle) = &needle {
                let hit = item
                    .search_fields()
                    .iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(needle));
                if !hit {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        employee_id: DbId,
        status: &'static str,
        kind: Option<&'static str>,
        name: &'static str,
        owner: &'static str,
    }

    impl Filterable for Row {
        fn employee_id(&self) -> DbId {
            self.employee_id
        }
        fn status_label(&self) -> &str {
            self.status
        }
        fn kind_label(&self) -> Option<&str> {
            self.kind
        }
        fn search_fields(&self) -> [Option<&str>; 2] {
            [Some(self.name), Some(self.owner)]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                employee_id: 1,
                status: "pending",
                kind: Some("vacation"),
                name: "Summer trip",
                owner: "Ada Lovelace",
            },
            Row {
                employee_id: 2,
                status: "approved",
                kind: Some("sick"),
                name: "Flu",
                owner: "Grace Hopper",
            },
            Row {
                employee_id: 1,
                status: "approved",
                kind: Some("vacation"),
                name: "Winter break",
                owner: "Ada Lovelace",
            },
        ]
    }

    #[test]
    fn empty_spec_returns_everything() {
        let out = apply_filters(rows(), &FilterSpec::default());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let spec = FilterSpec {
            employee_id: Some(1),
            status: Some("approved".into()),
            ..Default::default()
        };
        let out = apply_filters(rows(), &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Winter break");
    }

    #[test]
    fn kind_filter_matches_label() {
        let spec = FilterSpec {
            kind: Some("sick".into()),
            ..Default::default()
        };
        let out = apply_filters(rows(), &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].employee_id, 2);
    }

    #[test]
    fn search_is_case_insensitive_across_both_fields() {
        let spec = FilterSpec {
            search: Some("ADA".into()),
            ..Default::default()
        };
        assert_eq!(apply_filters(rows(), &spec).len(), 2);

        let spec = FilterSpec {
            search: Some("winter".into()),
            ..Default::default()
        };
        let out = apply_filters(rows(), &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Winter break");
    }

    #[test]
    fn search_miss_returns_empty() {
        let spec = FilterSpec {
            search: Some("nobody".into()),
            ..Default::default()
        };
        assert!(apply_filters(rows(), &spec).is_empty());
    }
}
