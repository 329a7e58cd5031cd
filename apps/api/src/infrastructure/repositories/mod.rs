// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_employee_repository;

pub use sqlite_employee_repository::SqliteEmployeeRepository;
