//! staff-api — employee records service
//!
//! A small CRUD service over a single `employees` table:
//!
//! - **HTTP API** (`api`): route table and request handlers
//! - **Store** (`db`): one query function per operation, over a sqlx pool
//! - **Errors** (`error`): service error taxonomy mapped to HTTP statuses
//! - **Config/State** (`config`, `state`): env-driven config, shared pool

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::AppState;
