//! Salary Model

use super::serde_helpers;
use super::EmployeeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Salary ID type
pub type SalaryId = RecordId;

/// Salary record matching the `salary` table
///
/// `total_salary` 由服务器按工资公式计算 (见 [`crate::payroll`])，
/// 客户端提交的总额一律忽略。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salary {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<SalaryId>,
    /// 展示编号 (S001)
    pub display_id: String,
    /// 员工记录引用
    #[serde(with = "serde_helpers::record_id")]
    pub employee: EmployeeId,
    /// 工资月份，如 "2026-08"
    pub month: String,
    pub workdays: u32,
    pub ot_rate: Decimal,
    pub ot_hours: Decimal,
    pub leave_days: u32,
    pub daily_rate: Decimal,
    pub total_salary: Decimal,
}

/// Salary for creation — employee 为 "employee:xxx" 或裸 key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCreate {
    pub employee: String,
    pub month: String,
    pub workdays: u32,
    pub ot_rate: Decimal,
    pub ot_hours: Decimal,
    #[serde(default)]
    pub leave_days: u32,
    #[serde(default)]
    pub daily_rate: Decimal,
}

/// Salary for update — 任何组成项变更都会触发总额重算
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdays: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ot_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ot_hours: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<Decimal>,
}
