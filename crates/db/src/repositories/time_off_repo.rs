//! Repository for the `time_off_requests` table.

use kadro_core::types::DbId;
use kadro_core::workflow::TimeOffOutcome;
use sqlx::PgPool;

use crate::models::time_off::{CreateTimeOff, TimeOffDetail, TimeOffRequest};

/// Column list for the `time_off_requests` table.
const COLUMNS: &str = "id, employee_id, kind, start_date, end_date, reason, status, \
                       approved_by, approved_at, created_at, updated_at";

/// Column list for owner-joined queries.
const JOINED_COLUMNS: &str = "r.id, r.employee_id, e.company_id, e.name AS employee_name, \
     r.kind, r.start_date, r.end_date, r.reason, r.status, r.approved_by, r.approved_at, \
     r.created_at, r.updated_at";

/// Provides CRUD operations for time-off requests.
pub struct TimeOffRepo;

impl TimeOffRepo {
    /// Insert a new pending request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTimeOff,
    ) -> Result<TimeOffRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO time_off_requests (employee_id, kind, start_date, end_date, reason)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeOffRequest>(&query)
            .bind(input.employee_id)
            .bind(&input.kind)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.reason)
            .fetch_one(pool)
            .await
    }

    /// Find a request with its resolved owner and company.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TimeOffDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM time_off_requests r
             JOIN employees e ON e.id = r.employee_id
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, TimeOffDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every request in a company, newest first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<TimeOffDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM time_off_requests r
             JOIN employees e ON e.id = r.employee_id
             WHERE e.company_id = $1
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, TimeOffDetail>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// List one employee's requests, newest first.
    pub async fn list_by_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<TimeOffDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM time_off_requests r
             JOIN employees e ON e.id = r.employee_id
             WHERE r.employee_id = $1
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, TimeOffDetail>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Persist a decision and its cross-aggregate side effect atomically.
    ///
    /// The request stamp and the optional employee status flip commit in one
    /// transaction, so a failure on either statement leaves neither applied.
    pub async fn apply_decision(
        pool: &PgPool,
        id: DbId,
        employee_id: DbId,
        outcome: &TimeOffOutcome,
    ) -> Result<Option<TimeOffRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE time_off_requests SET
                status = $2,
                approved_by = $3,
                approved_at = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let request = sqlx::query_as::<_, TimeOffRequest>(&update_query)
            .bind(id)
            .bind(outcome.status.as_str())
            .bind(outcome.approved_by)
            .bind(outcome.approved_at)
            .fetch_optional(&mut *tx)
            .await?;

        if request.is_some() {
            if let Some(employee_status) = outcome.employee_status {
                sqlx::query("UPDATE employees SET status = $2, updated_at = NOW() WHERE id = $1")
                    .bind(employee_id)
                    .bind(employee_status.as_str())
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(request)
    }
}
