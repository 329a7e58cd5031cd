// Repository contracts (ports) implemented by the infrastructure layer

pub mod employee_repository;

pub use employee_repository::{EmployeePage, EmployeeRepository, RepositoryError};
