//! PostgreSQL-backed [`CalculationRepository`].
//!
//! All variants share the `calculations` table; the `type` column carries the
//! discriminator and `inputs` holds the operands as a JSON array. Rows are
//! decoded through the same input check the entity applies, so a corrupt
//! `inputs` value is reported instead of coerced.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{CalculationPersistenceError, CalculationRepository};
use crate::domain::{
    Calculation, CalculationId, CalculationKind, UserId, decode_inputs, encode_inputs,
};

use super::diesel_basic_error_mapping::{
    log_database_error, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{CalculationRow, CalculationUpdate, NewCalculationRow};
use super::pool::{DbPool, PoolError};
use super::schema::{calculations, users};

/// Diesel implementation of the calculation repository port.
#[derive(Clone)]
pub struct DieselCalculationRepository {
    pool: DbPool,
}

impl DieselCalculationRepository {
    /// Create a repository drawing connections from `pool`.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CalculationPersistenceError {
    map_basic_pool_error(error, CalculationPersistenceError::connection)
}

fn map_diesel_error(error: DieselError, user_id: &UserId) -> CalculationPersistenceError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            log_database_error(&DatabaseErrorKind::ForeignKeyViolation, info.as_ref());
            CalculationPersistenceError::user_not_found(user_id.to_string())
        }
        other => map_basic_diesel_error(
            other,
            CalculationPersistenceError::query,
            CalculationPersistenceError::connection,
        ),
    }
}

fn map_statement_error(error: DieselError) -> CalculationPersistenceError {
    map_basic_diesel_error(
        error,
        CalculationPersistenceError::query,
        CalculationPersistenceError::connection,
    )
}

fn row_to_calculation(row: CalculationRow) -> Result<Calculation, CalculationPersistenceError> {
    let CalculationRow {
        id,
        user_id,
        kind,
        inputs,
        result,
        created_at,
        updated_at,
    } = row;
    let invalid = |message: String| CalculationPersistenceError::invalid_record(id.to_string(), message);
    let kind = CalculationKind::parse_tag(&kind).map_err(|err| invalid(err.to_string()))?;
    let inputs = decode_inputs(&inputs).map_err(|err| invalid(err.to_string()))?;
    Ok(Calculation::from_parts(
        CalculationId::from_uuid(id),
        UserId::from_uuid(user_id),
        kind,
        inputs,
        result,
        created_at,
        updated_at,
    ))
}

#[async_trait]
impl CalculationRepository for DieselCalculationRepository {
    async fn insert(&self, calculation: &Calculation) -> Result<(), CalculationPersistenceError> {
        let owner = *calculation.user_id().as_uuid();
        let inputs = encode_inputs(calculation.inputs());
        let row = NewCalculationRow {
            id: *calculation.id().as_uuid(),
            user_id: owner,
            kind: calculation.kind().as_str(),
            inputs: &inputs,
            result: calculation.result(),
            created_at: calculation.created_at(),
            updated_at: calculation.updated_at(),
        };
        // Checked out last so the pooled connection drops before `inputs`.
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let owner_exists = conn
            .transaction::<_, DieselError, _>(|conn| {
                async move {
                    let owner_row = users::table
                        .find(owner)
                        .select(users::id)
                        .for_key_share()
                        .first::<uuid::Uuid>(conn)
                        .await
                        .optional()?;
                    if owner_row.is_none() {
                        return Ok(false);
                    }
                    diesel::insert_into(calculations::table)
                        .values(&row)
                        .execute(conn)
                        .await?;
                    Ok(true)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_diesel_error(err, calculation.user_id()))?;

        if owner_exists {
            Ok(())
        } else {
            debug!(user_id = %calculation.user_id(), "calculation owner missing");
            Err(CalculationPersistenceError::user_not_found(
                calculation.user_id().to_string(),
            ))
        }
    }

    async fn find_by_id(
        &self,
        id: &CalculationId,
    ) -> Result<Option<Calculation>, CalculationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = calculations::table
            .find(id.as_uuid())
            .select(CalculationRow::as_select())
            .first::<CalculationRow>(&mut conn)
            .await
            .optional()
            .map_err(map_statement_error)?;
        row.map(row_to_calculation).transpose()
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Calculation>, CalculationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CalculationRow> = calculations::table
            .filter(calculations::user_id.eq(user_id.as_uuid()))
            .order((calculations::created_at.desc(), calculations::id.desc()))
            .select(CalculationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_statement_error)?;
        rows.into_iter().map(row_to_calculation).collect()
    }

    async fn update(&self, calculation: &Calculation) -> Result<bool, CalculationPersistenceError> {
        let inputs = encode_inputs(calculation.inputs());
        let changes = CalculationUpdate {
            inputs: &inputs,
            result: calculation.result(),
            updated_at: calculation.updated_at(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::update(calculations::table.find(calculation.id().as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_statement_error)?;
        Ok(affected > 0)
    }

    async fn delete(&self, id: &CalculationId) -> Result<bool, CalculationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::delete(calculations::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_statement_error)?;
        Ok(affected > 0)
    }
}
