//! Employee API handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::db;
use crate::db::employees::{Employee, NewEmployee};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Incoming employee payload. Every field is required; presence is checked in
/// one pass so the error names all missing fields at once. `id` and
/// `created_at` sent by the caller are simply not bound.
#[derive(Debug, serde::Deserialize)]
pub struct EmployeePayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeePayload {
    fn into_fields(self) -> ApiResult<NewEmployee> {
        let mut missing = Vec::new();
        let mut require = |present: bool, name: &'static str| {
            if !present {
                missing.push(name);
            }
        };
        require(self.first_name.is_some(), "first_name");
        require(self.last_name.is_some(), "last_name");
        require(self.email.is_some(), "email");
        require(self.position.is_some(), "position");
        require(self.department.is_some(), "department");
        require(self.salary.is_some(), "salary");

        match (
            self.first_name,
            self.last_name,
            self.email,
            self.position,
            self.department,
            self.salary,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(position),
                Some(department),
                Some(salary),
            ) => Ok(NewEmployee {
                first_name,
                last_name,
                email,
                position,
                department,
                salary,
            }),
            _ => Err(ApiError::validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

/// List all employees
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = db::employees::list(&state.pool).await?;
    Ok(Json(employees))
}

/// Create a new employee
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let fields = payload.into_fields()?;
    let employee = db::employees::create(&state.pool, &fields, chrono::Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    let employee = db::employees::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("employee {id}")))?;
    Ok(Json(employee))
}

/// Replace every mutable field of an employee
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> ApiResult<Json<Employee>> {
    let fields = payload.into_fields()?;
    let employee = db::employees::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("employee {id}")))?;
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    let removed = db::employees::delete(&state.pool, id).await?;
    if !removed {
        return Err(ApiError::not_found(format!("employee {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_with_all_fields_converts() {
        let payload: EmployeePayload = serde_json::from_value(serde_json::json!({
            "first_name": "Ana",
            "last_name": "Li",
            "email": "ana@x.com",
            "position": "Eng",
            "department": "R&D",
            "salary": 90000.0,
        }))
        .unwrap();

        let fields = payload.into_fields().unwrap();
        assert_eq!(fields.email, "ana@x.com");
        assert_eq!(fields.salary, 90000.0);
    }

    #[test]
    fn missing_fields_are_all_named() {
        let payload: EmployeePayload =
            serde_json::from_value(serde_json::json!({ "first_name": "Ana" })).unwrap();

        let err = payload.into_fields().unwrap_err();
        let message = err.to_string();
        for name in ["last_name", "email", "position", "department", "salary"] {
            assert!(message.contains(name), "{message} should name {name}");
        }
        assert!(!message.contains("first_name"));
    }

    #[test]
    fn read_only_fields_are_ignored() {
        // Callers may echo back `id` and `created_at`; neither is bound.
        let payload: EmployeePayload = serde_json::from_value(serde_json::json!({
            "id": 7,
            "created_at": "2024-01-01T00:00:00Z",
            "first_name": "Ana",
            "last_name": "Li",
            "email": "ana@x.com",
            "position": "Eng",
            "department": "R&D",
            "salary": 90000.0,
        }))
        .unwrap();
        assert!(payload.into_fields().is_ok());
    }
}
