//! End-to-end checks of the list pipeline: sort, then shape, then paginate.

use account_owner_api::model::owner::Owner;
use account_owner_api::query::{apply_sort, shape_entities, PagedList};
use chrono::NaiveDate;
use uuid::Uuid;

fn owner(name: &str, year: i32) -> Owner {
    Owner {
        id: Uuid::new_v4(),
        name: name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        address: "12 Main St".to_string(),
    }
}

#[test]
fn sorted_second_page_of_two() {
    let mut owners = vec![owner("Bob", 1990), owner("Ann", 1995)];
    apply_sort(&mut owners, "name");
    let names: Vec<&str> = owners.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["Ann", "Bob"]);

    let shaped = shape_entities(&owners, "");
    let page = PagedList::from_items(shaped, 2, 1);
    assert_eq!(page.items.len(), 1);
    let json = serde_json::to_value(&page.items[0]).unwrap();
    assert_eq!(json["name"], "Bob");
    assert_eq!(page.meta.total_pages, 2);
    assert!(page.meta.has_previous);
    assert!(!page.meta.has_next);
}

#[test]
fn shaping_after_sort_keeps_row_identity() {
    let mut owners = vec![owner("Cara", 1988), owner("Ann", 1995), owner("Bob", 1990)];
    apply_sort(&mut owners, "dateOfBirth:desc");
    let shaped = shape_entities(&owners, "name");
    let ids: Vec<Uuid> = owners.iter().map(|o| o.id).collect();
    let shaped_ids: Vec<Uuid> = shaped.iter().map(|s| s.id).collect();
    assert_eq!(ids, shaped_ids);
    let json = serde_json::to_value(&shaped[0]).unwrap();
    assert_eq!(json["name"], "Ann");
}

#[test]
fn default_order_with_oversized_page() {
    let mut owners: Vec<Owner> = ["Dee", "Ann", "Cara", "Bob"]
        .iter()
        .map(|n| owner(n, 1990))
        .collect();
    apply_sort(&mut owners, "name");
    let page = PagedList::from_items(owners, 1, 10);
    assert_eq!(page.items.len(), 4);
    assert_eq!(page.meta.total_pages, 1);
    assert_eq!(page.items[0].name, "Ann");
    assert_eq!(page.items[3].name, "Dee");
}
