//! Employee store
//!
//! One query function per operation, each a single statement and therefore
//! atomic under the datastore's default transaction behavior. The store owns
//! `id` and `created_at`; callers never supply either.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// Persisted employee record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
}

/// Validated mutable field set for create/update
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a new employee; the store assigns `id` and stamps `created_at`.
pub async fn create(
    pool: &SqlitePool,
    fields: &NewEmployee,
    now: DateTime<Utc>,
) -> Result<Employee, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO employees (first_name, last_name, email, position, department, salary, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(&fields.email)
    .bind(&fields.position)
    .bind(&fields.department)
    .bind(fields.salary)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Overwrite every mutable field; `id` and `created_at` stay untouched.
/// Returns `None` when no row has that id.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    fields: &NewEmployee,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE employees
         SET first_name = ?, last_name = ?, email = ?, position = ?, department = ?, salary = ?
         WHERE id = ?
         RETURNING *",
    )
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(&fields.email)
    .bind(&fields.position)
    .bind(&fields.department)
    .bind(fields.salary)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Hard delete. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
