//! Repository for teams, subteams, and membership join rows.

use kadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::team::{CreateTeam, MemberInfo, Subteam, Team, UpdateTeam};

/// Column list for the `teams` table.
const TEAM_COLUMNS: &str = "id, company_id, name, created_at, updated_at";

/// Column list for subteam queries. The team join resolves the chain
/// subteam → team → company.
const SUBTEAM_COLUMNS: &str =
    "s.id, s.team_id, t.company_id, s.name, s.created_at, s.updated_at";

/// Provides CRUD operations for teams and subteams.
pub struct TeamRepo;

impl TeamRepo {
    // -- Teams -------------------------------------------------------------

    /// Insert a new team, returning the created row.
    pub async fn create(
        pool: &PgPool,
        company_id: DbId,
        input: &CreateTeam,
    ) -> Result<Team, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams (company_id, name) VALUES ($1, $2) RETURNING {TEAM_COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(company_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a team by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's teams, oldest first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Team>, sqlx::Error> {
        let query =
            format!("SELECT {TEAM_COLUMNS} FROM teams WHERE company_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Team>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a team. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeam,
    ) -> Result<Option<Team>, sqlx::Error> {
        let query = format!(
            "UPDATE teams SET name = COALESCE($2, name), updated_at = NOW()
             WHERE id = $1
             RETURNING {TEAM_COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team; subteams and membership rows cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a team's members with display names.
    pub async fn list_members(pool: &PgPool, team_id: DbId) -> Result<Vec<MemberInfo>, sqlx::Error> {
        sqlx::query_as::<_, MemberInfo>(
            "SELECT m.employee_id, e.name AS employee_name
             FROM team_members m
             JOIN employees e ON e.id = m.employee_id
             WHERE m.team_id = $1
             ORDER BY e.name ASC",
        )
        .bind(team_id)
        .fetch_all(pool)
        .await
    }

    /// Add an employee to a team. The unique constraint makes re-adding a
    /// member surface as a conflict.
    pub async fn add_member(
        pool: &PgPool,
        team_id: DbId,
        employee_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO team_members (team_id, employee_id) VALUES ($1, $2)")
            .bind(team_id)
            .bind(employee_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove an employee from a team. Returns `true` if a row was removed.
    pub async fn remove_member(
        pool: &PgPool,
        team_id: DbId,
        employee_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM team_members WHERE team_id = $1 AND employee_id = $2")
                .bind(team_id)
                .bind(employee_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- Subteams ----------------------------------------------------------

    /// Insert a new subteam under a team, returning the created row with its
    /// resolved company id.
    pub async fn create_subteam(
        pool: &PgPool,
        team_id: DbId,
        input: &CreateTeam,
    ) -> Result<Subteam, sqlx::Error> {
        let subteam_id: DbId = sqlx::query_scalar(
            "INSERT INTO subteams (team_id, name) VALUES ($1, $2) RETURNING id",
        )
        .bind(team_id)
        .bind(&input.name)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {SUBTEAM_COLUMNS} FROM subteams s
             JOIN teams t ON t.id = s.team_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, Subteam>(&query)
            .bind(subteam_id)
            .fetch_one(pool)
            .await
    }

    /// Find a subteam with its resolved company.
    pub async fn find_subteam_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Subteam>, sqlx::Error> {
        let query = format!(
            "SELECT {SUBTEAM_COLUMNS} FROM subteams s
             JOIN teams t ON t.id = s.team_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, Subteam>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a team's subteams, oldest first.
    pub async fn list_subteams(pool: &PgPool, team_id: DbId) -> Result<Vec<Subteam>, sqlx::Error> {
        let query = format!(
            "SELECT {SUBTEAM_COLUMNS} FROM subteams s
             JOIN teams t ON t.id = s.team_id
             WHERE s.team_id = $1
             ORDER BY s.id ASC"
        );
        sqlx::query_as::<_, Subteam>(&query)
            .bind(team_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a subteam.
    pub async fn update_subteam(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeam,
    ) -> Result<Option<Subteam>, sqlx::Error> {
        sqlx::query("UPDATE subteams SET name = COALESCE($2, name), updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(&input.name)
            .execute(pool)
            .await?;
        Self::find_subteam_by_id(pool, id).await
    }

    /// Delete a subteam; membership rows cascade.
    pub async fn delete_subteam(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subteams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a subteam's members with display names.
    pub async fn list_subteam_members(
        pool: &PgPool,
        subteam_id: DbId,
    ) -> Result<Vec<MemberInfo>, sqlx::Error> {
        sqlx::query_as::<_, MemberInfo>(
            "SELECT m.employee_id, e.name AS employee_name
             FROM subteam_members m
             JOIN employees e ON e.id = m.employee_id
             WHERE m.subteam_id = $1
             ORDER BY e.name ASC",
        )
        .bind(subteam_id)
        .fetch_all(pool)
        .await
    }

    /// Add an employee to a subteam.
    pub async fn add_subteam_member(
        pool: &PgPool,
        subteam_id: DbId,
        employee_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO subteam_members (subteam_id, employee_id) VALUES ($1, $2)")
            .bind(subteam_id)
            .bind(employee_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove an employee from a subteam. Returns `true` if a row was removed.
    pub async fn remove_subteam_member(
        pool: &PgPool,
        subteam_id: DbId,
        employee_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM subteam_members WHERE subteam_id = $1 AND employee_id = $2")
                .bind(subteam_id)
                .bind(employee_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
