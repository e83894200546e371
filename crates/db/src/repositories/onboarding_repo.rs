//! Repository for `onboarding_tasks` and `employee_onboardings`.

use kadro_core::types::DbId;
use kadro_core::workflow::OnboardingState;
use sqlx::PgPool;

use crate::models::onboarding::{
    AssignmentDetail, CreateAssignment, CreateOnboardingTask, EmployeeOnboarding, OnboardingTask,
    UpdateOnboardingTask,
};

/// Column list for the `onboarding_tasks` table.
const TASK_COLUMNS: &str = "id, company_id, title, description, created_at, updated_at";

/// Column list for the `employee_onboardings` table.
const ASSIGNMENT_COLUMNS: &str = "id, task_id, employee_id, status, completed_at, \
                                  completed_by, notes, created_at, updated_at";

/// Column list for detail queries joining task and employee. The employee
/// join resolves the chain assignment → employee → company.
const DETAIL_COLUMNS: &str = "a.id, a.task_id, a.employee_id, e.company_id, \
     t.title AS task_title, e.name AS employee_name, a.status, a.completed_at, \
     a.completed_by, a.notes, a.created_at, a.updated_at";

/// Provides CRUD operations for onboarding templates and assignments.
pub struct OnboardingRepo;

impl OnboardingRepo {
    // -- Task templates ----------------------------------------------------

    /// Insert a new task template, returning the created row.
    pub async fn create_task(
        pool: &PgPool,
        input: &CreateOnboardingTask,
    ) -> Result<OnboardingTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO onboarding_tasks (company_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, OnboardingTask>(&query)
            .bind(input.company_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a task template by internal ID.
    pub async fn find_task_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OnboardingTask>, sqlx::Error> {
        let query = format!("SELECT {TASK_COLUMNS} FROM onboarding_tasks WHERE id = $1");
        sqlx::query_as::<_, OnboardingTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's task templates, oldest first.
    pub async fn list_tasks(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<OnboardingTask>, sqlx::Error> {
        let query = format!(
            "SELECT {TASK_COLUMNS} FROM onboarding_tasks WHERE company_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, OnboardingTask>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task template. Only non-`None` fields are applied.
    pub async fn update_task(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOnboardingTask,
    ) -> Result<Option<OnboardingTask>, sqlx::Error> {
        let query = format!(
            "UPDATE onboarding_tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, OnboardingTask>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task template; its assignments cascade.
    pub async fn delete_task(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM onboarding_tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- Assignments -------------------------------------------------------

    /// Assign a task to an employee, returning the created row.
    pub async fn create_assignment(
        pool: &PgPool,
        input: &CreateAssignment,
    ) -> Result<EmployeeOnboarding, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_onboardings (task_id, employee_id)
             VALUES ($1, $2)
             RETURNING {ASSIGNMENT_COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeOnboarding>(&query)
            .bind(input.task_id)
            .bind(input.employee_id)
            .fetch_one(pool)
            .await
    }

    /// Find an assignment with its resolved task, employee, and company.
    pub async fn find_assignment_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AssignmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM employee_onboardings a
             JOIN onboarding_tasks t ON t.id = a.task_id
             JOIN employees e ON e.id = a.employee_id
             WHERE a.id = $1"
        );
        sqlx::query_as::<_, AssignmentDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every assignment in a company, newest first.
    pub async fn list_assignments_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<AssignmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM employee_onboardings a
             JOIN onboarding_tasks t ON t.id = a.task_id
             JOIN employees e ON e.id = a.employee_id
             WHERE e.company_id = $1
             ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, AssignmentDetail>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// List one employee's assignments, newest first.
    pub async fn list_assignments_by_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<AssignmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM employee_onboardings a
             JOIN onboarding_tasks t ON t.id = a.task_id
             JOIN employees e ON e.id = a.employee_id
             WHERE a.employee_id = $1
             ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, AssignmentDetail>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Persist the workflow engine's computed state verbatim. The engine is
    /// the only place the completed_at/completed_by invariant is enforced.
    pub async fn save_assignment_state(
        pool: &PgPool,
        id: DbId,
        state: &OnboardingState,
    ) -> Result<Option<EmployeeOnboarding>, sqlx::Error> {
        let query = format!(
            "UPDATE employee_onboardings SET
                status = $2,
                completed_at = $3,
                completed_by = $4,
                notes = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {ASSIGNMENT_COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeOnboarding>(&query)
            .bind(id)
            .bind(state.status.as_str())
            .bind(state.completed_at)
            .bind(state.completed_by)
            .bind(&state.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assignment.
    pub async fn delete_assignment(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employee_onboardings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
