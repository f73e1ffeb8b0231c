//! Salary API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;

use crate::core::ServerState;
use crate::db::models::{Salary, SalaryCreate, SalaryUpdate};
use crate::db::repository::{EmployeeRepository, SalaryRepository};
use crate::payroll::{self, SalaryBreakdown, SalaryComponents};
use crate::utils::validation::{validate_required_text, MAX_SHORT_TEXT_LEN};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

fn validate_components(
    ot_rate: Decimal,
    ot_hours: Decimal,
    daily_rate: Decimal,
) -> AppResult<()> {
    if ot_rate < Decimal::ZERO || ot_hours < Decimal::ZERO || daily_rate < Decimal::ZERO {
        return Err(AppError::validation(
            "Salary components must not be negative",
        ));
    }
    Ok(())
}

fn validate_create(data: &SalaryCreate) -> AppResult<()> {
    validate_required_text(&data.employee, "employee", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.month, "month", MAX_SHORT_TEXT_LEN)?;
    validate_components(data.ot_rate, data.ot_hours, data.daily_rate)
}

fn validate_update(data: &SalaryUpdate) -> AppResult<()> {
    if let Some(ref month) = data.month {
        validate_required_text(month, "month", MAX_SHORT_TEXT_LEN)?;
    }
    validate_components(
        data.ot_rate.unwrap_or(Decimal::ZERO),
        data.ot_hours.unwrap_or(Decimal::ZERO),
        data.daily_rate.unwrap_or(Decimal::ZERO),
    )
}

/// GET /api/salaries - 获取所有工资单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Salary>>>> {
    let salaries = SalaryRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(salaries))
}

/// GET /api/salaries/:id - 获取单个工资单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Salary>>> {
    let salary = SalaryRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Salary {} not found", id)))?;
    Ok(ok(salary))
}

/// POST /api/salaries - 创建工资单 (总额由服务器计算)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SalaryCreate>,
) -> AppResult<Json<AppResponse<Salary>>> {
    validate_create(&payload)?;
    let salary = SalaryRepository::new(&state.get_db()).create(payload).await?;
    Ok(ok_with_message(salary, "Salary record created successfully"))
}

/// POST /api/salaries/calculate - 试算工资明细 (不落库)
///
/// 返回完整拆解 (含公司 EPF/ETF 缴纳部分)，供行政端报表预览。
pub async fn calculate(
    State(state): State<ServerState>,
    Json(payload): Json<SalaryCreate>,
) -> AppResult<Json<AppResponse<SalaryBreakdown>>> {
    validate_create(&payload)?;

    let employee = EmployeeRepository::new(&state.get_db())
        .find_by_id(&payload.employee)
        .await?
        .ok_or_else(|| {
            AppError::validation(format!("Employee {} not found", payload.employee))
        })?;

    let breakdown = payroll::breakdown(&SalaryComponents {
        basic: employee.basic_salary,
        ot_rate: payload.ot_rate,
        ot_hours: payload.ot_hours,
        leave_days: payload.leave_days,
        daily_rate: payload.daily_rate,
    });

    Ok(ok(breakdown))
}

/// PUT /api/salaries/:id - 更新工资单 (组成项变更触发重算)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SalaryUpdate>,
) -> AppResult<Json<AppResponse<Salary>>> {
    validate_update(&payload)?;
    let salary = SalaryRepository::new(&state.get_db())
        .update(&id, payload)
        .await?;
    Ok(ok_with_message(salary, "Salary record updated successfully"))
}

/// DELETE /api/salaries/:id - 删除工资单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = SalaryRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Salary {} not found", id)));
    }
    Ok(ok_with_message((), "Salary record deleted successfully"))
}
