/// Sentinel filter value meaning "no constraint", matching the dropdowns
/// that offer an "All States" / "All Categories" entry.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// One categorical constraint: the named field must equal (or, for tag
/// fields, contain) the value.
#[derive(Debug, Clone)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

/// Everything the user typed or picked to narrow a list view
///
/// An empty criteria matches the whole collection in its original order.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    term: String,
    filters: Vec<Filter>,
    sort: Option<SortSpec>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search term. Empty matches every record.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Add a categorical filter. The `"all"` sentinel is dropped here so the
    /// engine only ever sees active constraints.
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.eq_ignore_ascii_case(FILTER_ALL) {
            self.filters.push(Filter {
                field: field.into(),
                value,
            });
        }
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// True when the criteria constrains nothing and imposes no order
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.filters.is_empty() && self.sort.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_is_dropped() {
        let criteria = Criteria::new()
            .with_filter("state", "all")
            .with_filter("category", "All")
            .with_filter("district", "Ludhiana");
        assert_eq!(criteria.filters().len(), 1);
        assert_eq!(criteria.filters()[0].field, "district");
    }

    #[test]
    fn empty_criteria_reports_empty() {
        assert!(Criteria::new().is_empty());
        assert!(Criteria::new().with_term("  ").is_empty());
        assert!(!Criteria::new().with_term("wheat").is_empty());
        assert!(!Criteria::new()
            .sorted_by("price", SortDirection::Descending)
            .is_empty());
    }
}
