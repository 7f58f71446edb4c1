//! Owner entity and DTOs.

use crate::error::AppError;
use crate::query::fields::{EntityFields, FieldDef, FieldValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
}

impl Owner {
    const FIELDS: &'static [FieldDef<Owner>] = &[
        FieldDef { name: "id", get: |o| FieldValue::Uuid(o.id) },
        FieldDef { name: "name", get: |o| FieldValue::Str(o.name.clone()) },
        FieldDef { name: "dateOfBirth", get: |o| FieldValue::Date(o.date_of_birth) },
        FieldDef { name: "address", get: |o| FieldValue::Str(o.address.clone()) },
    ];
}

impl EntityFields for Owner {
    fn fields() -> &'static [FieldDef<Self>] {
        Self::FIELDS
    }

    fn entity_id(&self) -> Uuid {
        self.id
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
}

impl From<Owner> for OwnerDto {
    fn from(o: Owner) -> Self {
        OwnerDto {
            id: o.id,
            name: o.name,
            date_of_birth: o.date_of_birth,
            address: o.address,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerForCreation {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
}

impl OwnerForCreation {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        if self.address.trim().is_empty() {
            return Err(AppError::Validation("address must not be empty".into()));
        }
        Ok(())
    }
}

/// Updates carry the same shape as creations.
pub type OwnerForUpdate = OwnerForCreation;
