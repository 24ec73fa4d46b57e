//! The query engine: one pure projection from (records, criteria) to an
//! ordered result, shared by every list view instead of being reimplemented
//! per view.

mod criteria;
mod engine;
mod fields;

pub use criteria::{Criteria, Filter, SortDirection, SortSpec, FILTER_ALL};
pub use engine::{query, query_with_catalog};
pub use fields::{FieldCatalog, FieldCatalogBuilder, FieldDef, FieldKind, FieldValue, Queryable};
