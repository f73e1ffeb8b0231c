//! Employee API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::validation::{
    validate_email, validate_phone, validate_required_text, MAX_ADDRESS_LEN, MAX_NAME_LEN,
    MAX_SHORT_TEXT_LEN,
};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

fn validate_basic_salary(value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(AppError::validation("basic_salary must not be negative"));
    }
    Ok(())
}

fn validate_create(data: &EmployeeCreate) -> AppResult<()> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_email(&data.email)?;
    validate_required_text(&data.position, "position", MAX_SHORT_TEXT_LEN)?;
    validate_phone(&data.phone)?;
    validate_required_text(&data.address, "address", MAX_ADDRESS_LEN)?;
    validate_basic_salary(data.basic_salary)?;
    Ok(())
}

fn validate_update(data: &EmployeeUpdate) -> AppResult<()> {
    if let Some(ref name) = data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref email) = data.email {
        validate_email(email)?;
    }
    if let Some(ref position) = data.position {
        validate_required_text(position, "position", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(ref phone) = data.phone {
        validate_phone(phone)?;
    }
    if let Some(ref address) = data.address {
        validate_required_text(address, "address", MAX_ADDRESS_LEN)?;
    }
    if let Some(basic_salary) = data.basic_salary {
        validate_basic_salary(basic_salary)?;
    }
    Ok(())
}

/// GET /api/employees - 获取所有员工
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<Employee>>>> {
    let employees = EmployeeRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(employees))
}

/// GET /api/employees/:id - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Employee>>> {
    let employee = EmployeeRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(ok(employee))
}

/// POST /api/employees - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<AppResponse<Employee>>> {
    validate_create(&payload)?;
    let employee = EmployeeRepository::new(&state.get_db())
        .create(payload)
        .await?;
    Ok(ok_with_message(employee, "Employee created successfully"))
}

/// PUT /api/employees/:id - 更新员工
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<AppResponse<Employee>>> {
    validate_update(&payload)?;
    let employee = EmployeeRepository::new(&state.get_db())
        .update(&id, payload)
        .await?;
    Ok(ok_with_message(employee, "Employee updated successfully"))
}

/// DELETE /api/employees/:id - 删除员工
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = EmployeeRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Employee {} not found", id)));
    }
    Ok(ok_with_message((), "Employee deleted successfully"))
}
