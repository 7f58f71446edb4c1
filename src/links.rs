//! HATEOAS links attached to owner resources.

use crate::query::shape::ShapedEntity;
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: &'static str,
    pub method: &'static str,
}

impl Link {
    pub fn new(href: String, rel: &'static str, method: &'static str) -> Self {
        Link { href, rel, method }
    }
}

/// One shaped entity with its links flattened into the same JSON object.
#[derive(Debug, Serialize)]
pub struct LinkedEntity {
    #[serde(flatten)]
    pub entity: ShapedEntity,
    pub links: Vec<Link>,
}

/// Wraps a list payload with the collection's own navigation links.
#[derive(Debug, Serialize)]
pub struct LinkCollection<T> {
    pub value: Vec<T>,
    pub links: Vec<Link>,
}

/// Links for one owner: self (with the active field selection), delete, update.
pub fn links_for_owner(id: Uuid, fields: &str) -> Vec<Link> {
    let fields = fields.trim();
    let self_href = if fields.is_empty() {
        format!("/api/owner/{id}")
    } else {
        format!("/api/owner/{id}?fields={fields}")
    };
    vec![
        Link::new(self_href, "self", "GET"),
        Link::new(format!("/api/owner/{id}"), "delete_owner", "DELETE"),
        Link::new(format!("/api/owner/{id}"), "update_owner", "PUT"),
    ]
}

pub fn links_for_owner_list() -> Vec<Link> {
    vec![Link::new("/api/owner".to_string(), "self", "GET")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::owner::Owner;
    use crate::query::shape::shape_entity;
    use chrono::NaiveDate;

    #[test]
    fn owner_links_cover_self_delete_update() {
        let id = Uuid::nil();
        let links = links_for_owner(id, "");
        let rels: Vec<&str> = links.iter().map(|l| l.rel).collect();
        assert_eq!(rels, ["self", "delete_owner", "update_owner"]);
        assert_eq!(links[0].href, format!("/api/owner/{id}"));
        assert_eq!(links[1].method, "DELETE");
        assert_eq!(links[2].method, "PUT");
    }

    #[test]
    fn self_link_carries_field_selection() {
        let id = Uuid::nil();
        let links = links_for_owner(id, "name");
        assert_eq!(links[0].href, format!("/api/owner/{id}?fields=name"));
    }

    #[test]
    fn linked_entity_flattens_into_one_object() {
        let owner = Owner {
            id: Uuid::nil(),
            name: "Ann".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 14).unwrap(),
            address: "12 Main St".into(),
        };
        let linked = LinkedEntity {
            entity: shape_entity(&owner, "name"),
            links: links_for_owner(owner.id, "name"),
        };
        let json = serde_json::to_value(&linked).unwrap();
        assert_eq!(json["name"], "Ann");
        assert!(json["links"].is_array());
        assert_eq!(json["links"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn collection_wrapper_has_self_link() {
        let wrapper = LinkCollection::<u8> {
            value: Vec::new(),
            links: links_for_owner_list(),
        };
        let json = serde_json::to_value(&wrapper).unwrap();
        assert_eq!(json["links"][0]["href"], "/api/owner");
        assert_eq!(json["links"][0]["rel"], "self");
    }
}
