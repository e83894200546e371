//! Repository for the `roles` aggregate and its five child collections.
//!
//! Updates use replace-all semantics: each submitted collection fully
//! replaces the stored one (delete-then-insert), and all five replacements
//! plus the parent update run inside a single transaction. A failed child
//! insert therefore aborts the whole update instead of leaving a collection
//! deleted without replacement.

use kadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::{Role, RoleItem, RolePayload, RoleWithChildren};

/// Column list for the `roles` table.
const COLUMNS: &str = "id, company_id, title, description, salary_range, created_at, updated_at";

/// The five child tables, in a fixed order for deterministic write patterns.
const CHILD_TABLES: [&str; 5] = [
    "role_courses",
    "role_complementary_courses",
    "role_technical_skills",
    "role_behavioral_skills",
    "role_languages",
];

/// Provides CRUD operations for role aggregates.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new role with all five child collections, transactionally.
    pub async fn create(
        pool: &PgPool,
        company_id: DbId,
        input: &RolePayload,
    ) -> Result<Role, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO roles (company_id, title, description, salary_range)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let role = sqlx::query_as::<_, Role>(&insert_query)
            .bind(company_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.salary_range)
            .fetch_one(&mut *tx)
            .await?;

        Self::replace_children_inner(&mut tx, role.id, input).await?;

        tx.commit().await?;
        Ok(role)
    }

    /// Find a role row without children.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a role by ID, enriched with all five child collections.
    pub async fn find_by_id_with_children(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RoleWithChildren>, sqlx::Error> {
        let role = Self::find_by_id(pool, id).await?;
        match role {
            Some(role) => {
                let role_id = role.id;
                Ok(Some(RoleWithChildren {
                    role,
                    courses: Self::list_children(pool, "role_courses", role_id).await?,
                    complementary_courses: Self::list_children(
                        pool,
                        "role_complementary_courses",
                        role_id,
                    )
                    .await?,
                    technical_skills: Self::list_children(pool, "role_technical_skills", role_id)
                        .await?,
                    behavioral_skills: Self::list_children(pool, "role_behavioral_skills", role_id)
                        .await?,
                    languages: Self::list_children(pool, "role_languages", role_id).await?,
                }))
            }
            None => Ok(None),
        }
    }

    /// List a company's roles (parent rows only), oldest first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE company_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Role>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Replace-all update: rewrite the parent row and substitute every child
    /// collection with the submitted set, in one transaction.
    ///
    /// After a successful return, reading the role yields exactly the
    /// submitted children, including empty sets.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &RolePayload,
    ) -> Result<Option<Role>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE roles SET
                title = $2,
                description = $3,
                salary_range = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let role = sqlx::query_as::<_, Role>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.salary_range)
            .fetch_optional(&mut *tx)
            .await?;

        if role.is_some() {
            Self::replace_children_inner(&mut tx, id, input).await?;
        }

        tx.commit().await?;

        if role.is_some() {
            tracing::debug!(
                role_id = id,
                courses = input.courses.len(),
                complementary_courses = input.complementary_courses.len(),
                technical_skills = input.technical_skills.len(),
                behavioral_skills = input.behavioral_skills.len(),
                languages = input.languages.len(),
                "Role children replaced"
            );
        }
        Ok(role)
    }

    /// Delete a role; child rows cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List one child collection for a role.
    async fn list_children(
        pool: &PgPool,
        table: &str,
        role_id: DbId,
    ) -> Result<Vec<RoleItem>, sqlx::Error> {
        let query = format!("SELECT id, name FROM {table} WHERE role_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, RoleItem>(&query)
            .bind(role_id)
            .fetch_all(pool)
            .await
    }

    /// Delete-then-insert each child collection inside the caller's
    /// transaction.
    async fn replace_children_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        role_id: DbId,
        input: &RolePayload,
    ) -> Result<(), sqlx::Error> {
        let collections: [(&str, &[String]); 5] = [
            (CHILD_TABLES[0], &input.courses),
            (CHILD_TABLES[1], &input.complementary_courses),
            (CHILD_TABLES[2], &input.technical_skills),
            (CHILD_TABLES[3], &input.behavioral_skills),
            (CHILD_TABLES[4], &input.languages),
        ];

        for (table, names) in collections {
            sqlx::query(&format!("DELETE FROM {table} WHERE role_id = $1"))
                .bind(role_id)
                .execute(&mut **tx)
                .await?;

            for name in names {
                sqlx::query(&format!(
                    "INSERT INTO {table} (role_id, name) VALUES ($1, $2)"
                ))
                .bind(role_id)
                .bind(name)
                .execute(&mut **tx)
                .await?;
            }
        }

        Ok(())
    }
}
