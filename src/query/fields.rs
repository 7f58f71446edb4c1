//! Static field registries: entities expose their attributes by name through
//! accessor tables instead of runtime reflection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use uuid::Uuid;

/// A single attribute value pulled out of an entity. Tagged so shaped
/// records and sort comparisons stay typed.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Uuid(Uuid),
}

impl FieldValue {
    /// Total order within the same variant. Mixed variants compare equal;
    /// one accessor always yields one variant, so that case never decides
    /// a sort.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Str(a), FieldValue::Str(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Int(n) => serializer.serialize_i64(*n),
            FieldValue::Str(s) => serializer.serialize_str(s),
            FieldValue::Date(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            FieldValue::DateTime(d) => serializer.serialize_str(&d.to_rfc3339()),
            FieldValue::Uuid(u) => serializer.serialize_str(&u.to_string()),
        }
    }
}

/// One entry of an entity's field registry.
pub struct FieldDef<T> {
    pub name: &'static str,
    pub get: fn(&T) -> FieldValue,
}

/// Entities whose fields can be addressed by name for sorting and shaping.
pub trait EntityFields: Sized {
    /// Registry in response order. The first entry must be the identifier.
    fn fields() -> &'static [FieldDef<Self>];
    fn entity_id(&self) -> Uuid;
}

/// Case-insensitive registry lookup. `None` for unknown names; callers skip
/// those rather than failing the request.
pub fn field_def<T: EntityFields>(name: &str) -> Option<&'static FieldDef<T>> {
    let name = name.trim();
    T::fields().iter().find(|d| d.name.eq_ignore_ascii_case(name))
}
