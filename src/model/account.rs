//! Account entity and DTOs.

use crate::error::AppError;
use crate::query::fields::{EntityFields, FieldDef, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub date_created: DateTime<Utc>,
    pub account_type: String,
    pub owner_id: Uuid,
}

impl Account {
    const FIELDS: &'static [FieldDef<Account>] = &[
        FieldDef { name: "id", get: |a| FieldValue::Uuid(a.id) },
        FieldDef { name: "dateCreated", get: |a| FieldValue::DateTime(a.date_created) },
        FieldDef { name: "accountType", get: |a| FieldValue::Str(a.account_type.clone()) },
        FieldDef { name: "ownerId", get: |a| FieldValue::Uuid(a.owner_id) },
    ];
}

impl EntityFields for Account {
    fn fields() -> &'static [FieldDef<Self>] {
        Self::FIELDS
    }

    fn entity_id(&self) -> Uuid {
        self.id
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: Uuid,
    pub date_created: DateTime<Utc>,
    pub account_type: String,
    pub owner_id: Uuid,
}

impl From<Account> for AccountDto {
    fn from(a: Account) -> Self {
        AccountDto {
            id: a.id,
            date_created: a.date_created,
            account_type: a.account_type,
            owner_id: a.owner_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountForCreation {
    pub date_created: DateTime<Utc>,
    pub account_type: String,
    pub owner_id: Uuid,
}

impl AccountForCreation {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.account_type.trim().is_empty() {
            return Err(AppError::Validation("accountType must not be empty".into()));
        }
        Ok(())
    }
}
