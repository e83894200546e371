//! Repository for the `documents` table.

use kadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{CreateDocument, Document, DocumentWithOwner};

/// Column list for the `documents` table.
const COLUMNS: &str = "id, employee_id, name, file_path, status, expires_at, \
                       created_at, updated_at";

/// Column list for owner-joined queries. The employee join resolves the
/// chain document → employee → company.
const JOINED_COLUMNS: &str = "d.id, d.employee_id, e.company_id, e.name AS employee_name, \
     d.name, d.file_path, d.status, d.expires_at, d.created_at, d.updated_at";

/// Provides CRUD operations for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (employee_id, name, file_path, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.employee_id)
            .bind(&input.name)
            .bind(&input.file_path)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a document with its resolved owner and company.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DocumentWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM documents d
             JOIN employees e ON e.id = d.employee_id
             WHERE d.id = $1"
        );
        sqlx::query_as::<_, DocumentWithOwner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every document in a company, newest first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<DocumentWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM documents d
             JOIN employees e ON e.id = d.employee_id
             WHERE e.company_id = $1
             ORDER BY d.created_at DESC"
        );
        sqlx::query_as::<_, DocumentWithOwner>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// List one employee's documents, newest first.
    pub async fn list_by_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<DocumentWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM documents d
             JOIN employees e ON e.id = d.employee_id
             WHERE d.employee_id = $1
             ORDER BY d.created_at DESC"
        );
        sqlx::query_as::<_, DocumentWithOwner>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Set a document's review status. Returns `None` if the row is gone.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a document row. The stored file is an opaque key; its cleanup
    /// is the storage layer's concern, not ours.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
