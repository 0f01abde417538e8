//! Database access layer

pub mod employees;
