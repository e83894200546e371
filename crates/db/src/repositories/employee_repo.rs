//! Repository for the `employees` table.

use kadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_id, user_id, name, email, job_title, is_admin, \
                       status, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (company_id, user_id, name, email, job_title, is_admin)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(input.company_id)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.job_title)
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a credential to its employee row, if any. This is the tenant
    /// context resolution step: no row means no context.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE user_id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's employees, most recently created first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees WHERE company_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                job_title = COALESCE($4, job_title),
                is_admin = COALESCE($5, is_admin),
                status = COALESCE($6, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.job_title)
            .bind(input.is_admin)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee. Dependent rows (documents, assignments, time-off,
    /// memberships, profile rows) cascade via foreign keys.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
