//! Field shaping: project an entity onto the subset of fields a client asked
//! for, by name, at request time.

use crate::query::fields::{EntityFields, FieldDef, FieldValue};
use serde::ser::{Serialize, SerializeMap, Serializer};
use uuid::Uuid;

/// An entity reduced to a chosen set of fields. Serializes as a JSON object
/// with keys in registry order; the source id is kept for link building.
#[derive(Debug)]
pub struct ShapedEntity {
    pub id: Uuid,
    pub fields: Vec<(&'static str, FieldValue)>,
}

impl Serialize for ShapedEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Empty selection means every field. Otherwise requested names are matched
/// case-insensitively, unknown names are skipped, and the identifier (first
/// registry entry) is always kept. Output follows registry order so shaped
/// records are deterministic regardless of how the client lists fields.
fn selected_defs<T: EntityFields + 'static>(fields: &str) -> Vec<&'static FieldDef<T>> {
    let all = T::fields();
    if fields.trim().is_empty() {
        return all.iter().collect();
    }
    let requested: Vec<&str> = fields
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    all.iter()
        .enumerate()
        .filter(|(i, d)| *i == 0 || requested.iter().any(|r| d.name.eq_ignore_ascii_case(r)))
        .map(|(_, d)| d)
        .collect()
}

fn shape_with<T: EntityFields + 'static>(entity: &T, defs: &[&'static FieldDef<T>]) -> ShapedEntity {
    ShapedEntity {
        id: entity.entity_id(),
        fields: defs.iter().map(|d| (d.name, (d.get)(entity))).collect(),
    }
}

pub fn shape_entity<T: EntityFields + 'static>(entity: &T, fields: &str) -> ShapedEntity {
    shape_with(entity, &selected_defs::<T>(fields))
}

pub fn shape_entities<T: EntityFields + 'static>(entities: &[T], fields: &str) -> Vec<ShapedEntity> {
    let defs = selected_defs::<T>(fields);
    entities.iter().map(|e| shape_with(e, &defs)).collect()
}
