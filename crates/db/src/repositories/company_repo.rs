//! Repository for the `companies` table and tenant registration.

use sqlx::PgPool;

use crate::models::company::Company;
use crate::models::employee::Employee;
use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides tenant registration for the `companies` table.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Register a new tenant: company, admin credential, and admin employee
    /// in one transaction. A duplicate email aborts the whole registration.
    pub async fn register_tenant(
        pool: &PgPool,
        company_name: &str,
        admin_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(Company, User, Employee), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let company_query = format!("INSERT INTO companies (name) VALUES ($1) RETURNING {COLUMNS}");
        let company = sqlx::query_as::<_, Company>(&company_query)
            .bind(company_name)
            .fetch_one(&mut *tx)
            .await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2)
             RETURNING id, email, password_hash, created_at, updated_at",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await?;

        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (company_id, user_id, name, email, is_admin)
             VALUES ($1, $2, $3, $4, TRUE)
             RETURNING id, company_id, user_id, name, email, job_title, is_admin,
                       status, created_at, updated_at",
        )
        .bind(company.id)
        .bind(user.id)
        .bind(admin_name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((company, user, employee))
    }
}
