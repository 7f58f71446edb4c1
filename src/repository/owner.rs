//! Owner persistence and the paged/shaped owner queries.

use crate::error::AppError;
use crate::model::owner::{Owner, OwnerForCreation, OwnerForUpdate};
use crate::query::page::PagedList;
use crate::query::params::OwnerParameters;
use crate::query::shape::{shape_entities, shape_entity, ShapedEntity};
use crate::query::sort::apply_sort;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        OwnerRepository { pool }
    }

    /// Filtered, sorted, shaped, paged owner listing. Filters run in SQL;
    /// ordering and shaping run over the materialized rows so any registered
    /// field works, not just indexed columns.
    pub async fn get_owners(
        &self,
        params: &OwnerParameters,
    ) -> Result<PagedList<ShapedEntity>, AppError> {
        let name_filter = params
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let mut sql = String::from(
            "SELECT id, name, date_of_birth, address FROM owners \
             WHERE EXTRACT(YEAR FROM date_of_birth)::int BETWEEN $1 AND $2",
        );
        if name_filter.is_some() {
            sql.push_str(" AND name ILIKE '%' || $3 || '%'");
        }
        tracing::debug!(sql = %sql, "query");

        let mut query = sqlx::query_as::<_, Owner>(&sql)
            .bind(params.min_year_of_birth)
            .bind(params.max_year_of_birth);
        if let Some(name) = name_filter {
            query = query.bind(name);
        }
        let mut owners = query.fetch_all(&self.pool).await?;

        apply_sort(&mut owners, &params.order_by);
        let shaped = shape_entities(&owners, &params.fields);
        Ok(PagedList::from_items(
            shaped,
            params.page_number,
            params.page_size(),
        ))
    }

    pub async fn get_owner_shaped(
        &self,
        id: Uuid,
        fields: &str,
    ) -> Result<Option<ShapedEntity>, AppError> {
        let owner = self.get_owner_by_id(id).await?;
        Ok(owner.map(|o| shape_entity(&o, fields)))
    }

    pub async fn get_owner_by_id(&self, id: Uuid) -> Result<Option<Owner>, AppError> {
        let owner = sqlx::query_as::<_, Owner>(
            "SELECT id, name, date_of_birth, address FROM owners WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(owner)
    }

    pub async fn create_owner(&self, dto: &OwnerForCreation) -> Result<Owner, AppError> {
        let owner = sqlx::query_as::<_, Owner>(
            "INSERT INTO owners (id, name, date_of_birth, address) VALUES ($1, $2, $3, $4) \
             RETURNING id, name, date_of_birth, address",
        )
        .bind(Uuid::new_v4())
        .bind(&dto.name)
        .bind(dto.date_of_birth)
        .bind(&dto.address)
        .fetch_one(&self.pool)
        .await?;
        Ok(owner)
    }

    pub async fn update_owner(
        &self,
        id: Uuid,
        dto: &OwnerForUpdate,
    ) -> Result<Option<Owner>, AppError> {
        let owner = sqlx::query_as::<_, Owner>(
            "UPDATE owners SET name = $2, date_of_birth = $3, address = $4 WHERE id = $1 \
             RETURNING id, name, date_of_birth, address",
        )
        .bind(id)
        .bind(&dto.name)
        .bind(dto.date_of_birth)
        .bind(&dto.address)
        .fetch_optional(&self.pool)
        .await?;
        Ok(owner)
    }

    /// Returns whether a row was deleted.
    pub async fn delete_owner(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
