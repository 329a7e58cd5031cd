use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::response::{ApiResponse, Operation};
use crate::api::state::AppState;
use crate::domain::employee::{Employee, EmployeeChanges, NewEmployee};

const DEFAULT_PAGE: i64 = -1;
const DEFAULT_PAGE_SIZE: i64 = 10;

const CREATE: Operation = Operation {
    title: "Create Employee",
    success: "Employee created",
    failure: "Failed to create employee",
};

const UPDATE: Operation = Operation {
    title: "Update Employee",
    success: "Employee updated",
    failure: "Failed to update employee",
};

const GET: Operation = Operation {
    title: "Get Employee",
    success: "Get employee successful",
    failure: "Failed to get employee",
};

const LIST: Operation = Operation {
    title: "Get Employees",
    success: "Get employees successful",
    failure: "Failed to get employees",
};

const DELETE: Operation = Operation {
    title: "Delete Employee",
    success: "Employee deleted",
    failure: "Failed to delete employee",
};

/// Query parameters for listing employees
///
/// Values are kept as raw strings so that malformed numbers fall back to
/// their defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListEmployeesQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ListEmployeesQuery {
    /// Number of rows to skip
    pub fn page(&self) -> i64 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    /// Maximum number of rows to return
    pub fn page_size(&self) -> i64 {
        parse_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Create a new employee
///
/// The body is decoded as JSON whatever its `Content-Type` header says.
///
/// POST /employee
pub async fn create_employee(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiResponse<Employee>, ApiError> {
    let employee: NewEmployee = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(CREATE.failed(), e.to_string()))?;

    let created = state
        .employees
        .create(employee)
        .await
        .map_err(|e| ApiError::internal_server_error(CREATE.failed(), e.to_string()))?;

    tracing::info!(id = created.id, "Employee created");
    Ok(CREATE.succeeded().with_data(created))
}

/// Partially update an existing employee
///
/// PATCH /employee
pub async fn update_employee(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiResponse<()>, ApiError> {
    let changes: EmployeeChanges = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(UPDATE.failed(), e.to_string()))?;
    let id = changes.id;

    state
        .employees
        .update(changes)
        .await
        .map_err(|e| ApiError::internal_server_error(UPDATE.failed(), e.to_string()))?;

    tracing::info!(id, "Employee updated");
    Ok(UPDATE.succeeded())
}

/// Get an employee by ID
///
/// GET /employee/:id
pub async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ApiResponse<Employee>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(GET.failed(), e.body_text()))?;

    // Any lookup failure reads as "not found" to the caller
    let employee = state
        .employees
        .get(id)
        .await
        .map_err(|e| ApiError::not_found(GET.failed(), e.to_string()))?;

    Ok(GET.succeeded().with_data(employee))
}

/// List employees with row-offset pagination
///
/// GET /employee?page=&page_size=
pub async fn get_employees(
    State(state): State<AppState>,
    query: Result<Query<ListEmployeesQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<Employee>>, ApiError> {
    let params = query.map(|Query(params)| params).unwrap_or_default();

    let page = state
        .employees
        .list(params.page(), params.page_size())
        .await
        .map_err(|e| ApiError::not_found(LIST.failed(), e.to_string()))?;

    Ok(LIST
        .succeeded()
        .with_data(page.employees)
        .with_pagination(page.pagination))
}

/// Delete an employee
///
/// DELETE /employee/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(DELETE.failed(), e.body_text()))?;

    state
        .employees
        .delete(id)
        .await
        .map_err(|e| ApiError::internal_server_error(DELETE.failed(), e.to_string()))?;

    tracing::info!(id, "Employee deleted");
    Ok(DELETE.succeeded())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, page_size: Option<&str>) -> ListEmployeesQuery {
        ListEmployeesQuery {
            page: page.map(str::to_string),
            page_size: page_size.map(str::to_string),
        }
    }

    #[test]
    fn list_query_defaults() {
        let params = query(None, None);
        assert_eq!(params.page(), -1);
        assert_eq!(params.page_size(), 10);
    }

    #[test]
    fn list_query_parses_numbers() {
        let params = query(Some("5"), Some("20"));
        assert_eq!(params.page(), 5);
        assert_eq!(params.page_size(), 20);
    }

    #[test]
    fn list_query_falls_back_on_garbage() {
        let params = query(Some("first"), Some("lots"));
        assert_eq!(params.page(), -1);
        assert_eq!(params.page_size(), 10);
    }
}
