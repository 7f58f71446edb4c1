//! Order-by parsing and stable multi-key sorting over field registries.

use crate::query::fields::{field_def, EntityFields, FieldDef};
use std::cmp::Ordering;

struct SortTerm<T: 'static> {
    def: &'static FieldDef<T>,
    descending: bool,
}

/// Tokens are comma-separated, each `field`, `field:desc`, or `field desc`.
/// Unknown field names are skipped so a typo never fails the request.
fn parse_terms<T: EntityFields + 'static>(order_by: &str) -> Vec<SortTerm<T>> {
    let mut terms = Vec::new();
    for raw in order_by.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        let (name, direction) = match token.split_once([':', ' ']) {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (token, ""),
        };
        let Some(def) = field_def::<T>(name) else {
            continue;
        };
        let descending =
            direction.eq_ignore_ascii_case("desc") || direction.eq_ignore_ascii_case("descending");
        terms.push(SortTerm { def, descending });
    }
    terms
}

/// Stable sort by the order-by expression: the first resolved token is the
/// primary key, later tokens break ties in listed order. When no token
/// resolves the input order is left untouched.
pub fn apply_sort<T: EntityFields + 'static>(items: &mut [T], order_by: &str) {
    let terms = parse_terms::<T>(order_by);
    if terms.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        for term in &terms {
            let va = (term.def.get)(a);
            let vb = (term.def.get)(b);
            let ord = if term.descending {
                vb.compare(&va)
            } else {
                va.compare(&vb)
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::owner::Owner;
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

    fn names(owners: &[Owner]) -> Vec<&str> {
        owners.iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_by_default() {
        let mut owners = vec![owner("Bob", 1990), owner("Ann", 1995)];
        apply_sort(&mut owners, "name");
        assert_eq!(names(&owners), ["Ann", "Bob"]);
    }

    #[test]
    fn descending_marker_colon_and_space() {
        let mut owners = vec![owner("Ann", 1995), owner("Bob", 1990)];
        apply_sort(&mut owners, "name:desc");
        assert_eq!(names(&owners), ["Bob", "Ann"]);

        let mut owners = vec![owner("Ann", 1995), owner("Bob", 1990)];
        apply_sort(&mut owners, "name desc");
        assert_eq!(names(&owners), ["Bob", "Ann"]);

        let mut owners = vec![owner("Ann", 1995), owner("Bob", 1990)];
        apply_sort(&mut owners, "name descending");
        assert_eq!(names(&owners), ["Bob", "Ann"]);
    }

    #[test]
    fn unknown_field_preserves_input_order() {
        let mut owners = vec![owner("Bob", 1990), owner("Ann", 1995)];
        apply_sort(&mut owners, "salary");
        assert_eq!(names(&owners), ["Bob", "Ann"]);
    }

    #[test]
    fn unknown_tokens_are_skipped_not_fatal() {
        let mut owners = vec![owner("Bob", 1990), owner("Ann", 1995)];
        apply_sort(&mut owners, "salary, name, height:desc");
        assert_eq!(names(&owners), ["Ann", "Bob"]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let mut owners = vec![owner("Ann", 1995), owner("Bob", 1990), owner("Ann", 1985)];
        apply_sort(&mut owners, "name, dateOfBirth:desc");
        let got: Vec<(String, i32)> = owners
            .iter()
            .map(|o| (o.name.clone(), chrono::Datelike::year(&o.date_of_birth)))
            .collect();
        assert_eq!(
            got,
            [
                ("Ann".to_string(), 1995),
                ("Ann".to_string(), 1985),
                ("Bob".to_string(), 1990)
            ]
        );
    }

    #[test]
    fn empty_order_by_is_a_no_op() {
        let mut owners = vec![owner("Bob", 1990), owner("Ann", 1995)];
        apply_sort(&mut owners, "");
        assert_eq!(names(&owners), ["Bob", "Ann"]);
        apply_sort(&mut owners, " , ,");
        assert_eq!(names(&owners), ["Bob", "Ann"]);
    }

    #[test]
    fn field_name_match_is_case_insensitive() {
        let mut owners = vec![owner("Bob", 1990), owner("Ann", 1995)];
        apply_sort(&mut owners, "Name");
        assert_eq!(names(&owners), ["Ann", "Bob"]);
    }
}
