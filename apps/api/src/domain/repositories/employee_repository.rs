use async_trait::async_trait;
use thiserror::Error;

use crate::domain::employee::{Employee, EmployeeChanges, NewEmployee, Pagination};

/// Errors surfaced by employee persistence
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("employee not found: {0}")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// A window of employees plus pagination over the whole table
#[derive(Debug, Clone)]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    pub pagination: Pagination,
}

/// Repository trait for the Employee entity
///
/// Defines the contract for persisting and retrieving employees.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee and return it with its generated id
    async fn create(&self, employee: NewEmployee) -> Result<Employee, RepositoryError>;

    /// Find an employee by its id
    async fn get(&self, id: i64) -> Result<Employee, RepositoryError>;

    /// List employees skipping `page` rows and returning at most `page_size`
    async fn list(&self, page: i64, page_size: i64) -> Result<EmployeePage, RepositoryError>;

    /// Write the non-empty fields of `changes` to the row with `changes.id`
    ///
    /// Succeeds without writing anything when no row has that id.
    async fn update(&self, changes: EmployeeChanges) -> Result<(), RepositoryError>;

    /// Delete an employee by id
    ///
    /// Deleting an id that does not exist is not an error.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
