use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::employee::{Employee, EmployeeChanges, NewEmployee, Pagination};
use crate::domain::repositories::{EmployeePage, EmployeeRepository, RepositoryError};

/// SQLite implementation of EmployeeRepository
///
/// Every call runs as an independent statement on the shared pool. `list`
/// issues its row fetch and its count separately, so a concurrent write can
/// make the two disagree.
#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Creates a new SqliteEmployeeRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool with the `employees` schema applied
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, RepositoryError> {
        let created = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, team_name)
            VALUES (?, ?)
            RETURNING id, name, team_name
            "#,
        )
        .bind(employee.name)
        .bind(employee.team_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Employee, RepositoryError> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, team_name
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound(id))
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<EmployeePage, RepositoryError> {
        // SQLite reads a negative LIMIT as "no limit"
        let limit = if page_size > 0 { page_size } else { -1 };
        let offset = page.max(0);

        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, team_name
            FROM employees
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        Ok(EmployeePage {
            employees,
            pagination: Pagination::new(total, page, page_size),
        })
    }

    async fn update(&self, changes: EmployeeChanges) -> Result<(), RepositoryError> {
        let assignments = changes.assignments();
        if assignments.is_empty() {
            tracing::debug!(id = changes.id, "Update carries no fields, skipping");
            return Ok(());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE employees SET ");
        {
            let mut set = builder.separated(", ");
            for (column, value) in assignments {
                set.push(column);
                set.push_unseparated(" = ");
                set.push_bind_unseparated(value.to_string());
            }
        }
        builder.push(" WHERE id = ").push_bind(changes.id);

        let result = builder.build().execute(&self.pool).await?;
        tracing::debug!(id = changes.id, rows = result.rows_affected(), "Employee updated");

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, rows = result.rows_affected(), "Employee deleted");

        Ok(())
    }
}
