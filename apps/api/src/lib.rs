//! Employee Service API Library
//!
//! This library provides the core functionality for the employee service,
//! including the domain model, the SQLite repository, and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
