//! Repository for singular per-employee profile rows (address, photo).
//!
//! Both tables are natural-keyed by `employee_id`; writes upsert via
//! `ON CONFLICT ... DO UPDATE`.

use kadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{EmployeeAddress, EmployeePhoto, UpsertAddress};

/// Column list for the `employee_addresses` table.
const ADDRESS_COLUMNS: &str =
    "id, employee_id, street, city, state, zip, country, created_at, updated_at";

/// Column list for the `employee_photos` table.
const PHOTO_COLUMNS: &str = "id, employee_id, file_path, created_at, updated_at";

/// Provides upsert/read operations for employee profile rows.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert or overwrite an employee's address.
    pub async fn upsert_address(
        pool: &PgPool,
        employee_id: DbId,
        input: &UpsertAddress,
    ) -> Result<EmployeeAddress, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_addresses (employee_id, street, city, state, zip, country)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (employee_id) DO UPDATE SET
                street = EXCLUDED.street,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                zip = EXCLUDED.zip,
                country = EXCLUDED.country,
                updated_at = NOW()
             RETURNING {ADDRESS_COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeAddress>(&query)
            .bind(employee_id)
            .bind(&input.street)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    /// Fetch an employee's address, if one has been stored.
    pub async fn find_address(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Option<EmployeeAddress>, sqlx::Error> {
        let query = format!(
            "SELECT {ADDRESS_COLUMNS} FROM employee_addresses WHERE employee_id = $1"
        );
        sqlx::query_as::<_, EmployeeAddress>(&query)
            .bind(employee_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or overwrite an employee's photo key.
    pub async fn upsert_photo(
        pool: &PgPool,
        employee_id: DbId,
        file_path: &str,
    ) -> Result<EmployeePhoto, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_photos (employee_id, file_path)
             VALUES ($1, $2)
             ON CONFLICT (employee_id) DO UPDATE SET
                file_path = EXCLUDED.file_path,
                updated_at = NOW()
             RETURNING {PHOTO_COLUMNS}"
        );
        sqlx::query_as::<_, EmployeePhoto>(&query)
            .bind(employee_id)
            .bind(file_path)
            .fetch_one(pool)
            .await
    }

    /// Fetch an employee's photo, if one has been stored.
    pub async fn find_photo(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Option<EmployeePhoto>, sqlx::Error> {
        let query = format!("SELECT {PHOTO_COLUMNS} FROM employee_photos WHERE employee_id = $1");
        sqlx::query_as::<_, EmployeePhoto>(&query)
            .bind(employee_id)
            .fetch_optional(pool)
            .await
    }
}
