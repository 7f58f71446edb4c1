//! Reusable query pipeline: request parameters, sorting, field shaping, pagination.

pub mod fields;
pub mod page;
pub mod params;
pub mod shape;
pub mod sort;

pub use fields::{field_def, EntityFields, FieldDef, FieldValue};
pub use page::{PagedList, PageMeta};
pub use params::{AccountParameters, OwnerParameters, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use shape::{shape_entities, shape_entity, ShapedEntity};
pub use sort::apply_sort;
