//! Typed field access for query records.
//!
//! Instead of stringly-typed `record[field]` lookups, every record type
//! publishes a catalog of named extractors. Criteria that reference a field
//! missing from the catalog fail with a typed error before any filtering
//! happens.

/// A single field value pulled out of a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Tags(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Tags,
}

/// A named, typed extractor for one field of `R`
pub struct FieldDef<R> {
    name: &'static str,
    kind: FieldKind,
    searchable: bool,
    extract: fn(&R) -> FieldValue,
}

impl<R> FieldDef<R> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether free-text search looks at this field
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn value(&self, record: &R) -> FieldValue {
        (self.extract)(record)
    }
}

/// The full set of queryable fields for a record type
pub struct FieldCatalog<R> {
    fields: Vec<FieldDef<R>>,
}

impl<R> FieldCatalog<R> {
    pub fn builder() -> FieldCatalogBuilder<R> {
        FieldCatalogBuilder { fields: Vec::new() }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef<R>> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub(crate) fn searchable_fields(&self) -> impl Iterator<Item = &FieldDef<R>> {
        self.fields.iter().filter(|f| f.searchable)
    }
}

/// Builder so catalogs read as a flat declaration at the record type
pub struct FieldCatalogBuilder<R> {
    fields: Vec<FieldDef<R>>,
}

impl<R> FieldCatalogBuilder<R> {
    /// Text field used for filtering and sorting only
    pub fn text(self, name: &'static str, extract: fn(&R) -> FieldValue) -> Self {
        self.push(name, FieldKind::Text, false, extract)
    }

    /// Text field that free-text search also scans
    pub fn searchable_text(self, name: &'static str, extract: fn(&R) -> FieldValue) -> Self {
        self.push(name, FieldKind::Text, true, extract)
    }

    pub fn number(self, name: &'static str, extract: fn(&R) -> FieldValue) -> Self {
        self.push(name, FieldKind::Number, false, extract)
    }

    /// List-valued field; filters match when the list contains the value
    pub fn tags(self, name: &'static str, extract: fn(&R) -> FieldValue) -> Self {
        self.push(name, FieldKind::Tags, false, extract)
    }

    fn push(
        mut self,
        name: &'static str,
        kind: FieldKind,
        searchable: bool,
        extract: fn(&R) -> FieldValue,
    ) -> Self {
        debug_assert!(
            !self.fields.iter().any(|f| f.name == name),
            "duplicate field name in catalog: {name}"
        );
        self.fields.push(FieldDef {
            name,
            kind,
            searchable,
            extract,
        });
        self
    }

    pub fn build(self) -> FieldCatalog<R> {
        FieldCatalog {
            fields: self.fields,
        }
    }
}

/// Record types that can be driven through the query engine
pub trait Queryable: Sized {
    fn field_catalog() -> FieldCatalog<Self>;
}
