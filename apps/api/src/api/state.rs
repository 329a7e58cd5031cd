use std::sync::Arc;

use crate::domain::repositories::EmployeeRepository;

/// Shared handler state
///
/// Holds the one repository instance (and through it the one storage handle)
/// that every request uses.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(employees: impl EmployeeRepository + 'static) -> Self {
        Self {
            employees: Arc::new(employees),
        }
    }
}
