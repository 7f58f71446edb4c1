//! Query-string parameters for the list endpoints.

use chrono::{Datelike, Utc};
use serde::Deserialize;

pub const MAX_PAGE_SIZE: usize = 50;
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_number() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_owner_order() -> String {
    "name".to_string()
}

fn default_account_order() -> String {
    "dateCreated".to_string()
}

fn current_year() -> i32 {
    Utc::now().year()
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerParameters {
    #[serde(default = "default_page_number")]
    pub page_number: usize,
    #[serde(default = "default_page_size")]
    page_size: usize,
    #[serde(default = "default_owner_order")]
    pub order_by: String,
    #[serde(default)]
    pub fields: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub min_year_of_birth: i32,
    #[serde(default = "current_year")]
    pub max_year_of_birth: i32,
}

impl OwnerParameters {
    /// Requested size capped at [`MAX_PAGE_SIZE`]; zero falls back to one.
    pub fn page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Inclusive bounds; the handler rejects an inverted range before the
    /// repository runs.
    pub fn valid_year_range(&self) -> bool {
        self.max_year_of_birth >= self.min_year_of_birth
    }
}

impl Default for OwnerParameters {
    fn default() -> Self {
        OwnerParameters {
            page_number: default_page_number(),
            page_size: default_page_size(),
            order_by: default_owner_order(),
            fields: String::new(),
            name: None,
            min_year_of_birth: 0,
            max_year_of_birth: current_year(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountParameters {
    #[serde(default = "default_page_number")]
    pub page_number: usize,
    #[serde(default = "default_page_size")]
    page_size: usize,
    #[serde(default = "default_account_order")]
    pub order_by: String,
    #[serde(default)]
    pub fields: String,
}

impl AccountParameters {
    pub fn page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for AccountParameters {
    fn default() -> Self {
        AccountParameters {
            page_number: default_page_number(),
            page_size: default_page_size(),
            order_by: default_account_order(),
            fields: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn owner_defaults() {
        let p: OwnerParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.page_number, 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.order_by, "name");
        assert_eq!(p.fields, "");
        assert_eq!(p.name, None);
        assert_eq!(p.min_year_of_birth, 0);
        assert_eq!(p.max_year_of_birth, Utc::now().year());
        assert!(p.valid_year_range());
    }

    #[test]
    fn page_size_is_capped() {
        let p: OwnerParameters = serde_json::from_value(json!({"pageSize": 200})).unwrap();
        assert_eq!(p.page_size(), MAX_PAGE_SIZE);
        let p: OwnerParameters = serde_json::from_value(json!({"pageSize": 0})).unwrap();
        assert_eq!(p.page_size(), 1);
        let p: OwnerParameters = serde_json::from_value(json!({"pageSize": 25})).unwrap();
        assert_eq!(p.page_size(), 25);
    }

    #[test]
    fn inverted_year_range_is_invalid() {
        let p: OwnerParameters =
            serde_json::from_value(json!({"minYearOfBirth": 2000, "maxYearOfBirth": 1990}))
                .unwrap();
        assert!(!p.valid_year_range());
    }

    #[test]
    fn equal_year_bounds_are_valid() {
        let p: OwnerParameters =
            serde_json::from_value(json!({"minYearOfBirth": 1990, "maxYearOfBirth": 1990}))
                .unwrap();
        assert!(p.valid_year_range());
    }

    #[test]
    fn account_defaults() {
        let p: AccountParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.page_number, 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.order_by, "dateCreated");
    }

    #[test]
    fn camel_case_query_keys() {
        let p: OwnerParameters = serde_json::from_value(
            json!({"pageNumber": 3, "orderBy": "name:desc", "fields": "name"}),
        )
        .unwrap();
        assert_eq!(p.page_number, 3);
        assert_eq!(p.order_by, "name:desc");
        assert_eq!(p.fields, "name");
    }
}
