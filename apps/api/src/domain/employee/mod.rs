// Employee domain module
// Contains the employee entity, its write models, and list pagination

#![allow(clippy::module_inception)]

pub mod employee;
pub mod pagination;

// Re-export main types for convenience
pub use employee::{Employee, EmployeeChanges, NewEmployee};
pub use pagination::Pagination;
