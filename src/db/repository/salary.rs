//! Salary Repository
//!
//! 工资单创建/更新时在服务器端重算总额 (见 [`crate::payroll`])。

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, Salary, SalaryCreate, SalaryUpdate};
use crate::db::{sequence, DbService};
use crate::payroll::{self, SalaryComponents};

const TABLE: &str = "salary";
const PREFIX: char = 'S';

#[derive(Clone)]
pub struct SalaryRepository {
    base: BaseRepository,
}

impl SalaryRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            base: BaseRepository::new(service),
        }
    }

    /// Find all salary records ordered by display id
    pub async fn find_all(&self) -> RepoResult<Vec<Salary>> {
        let salaries: Vec<Salary> = self
            .base
            .db()
            .query("SELECT * FROM salary ORDER BY display_id")
            .await?
            .take(0)?;
        Ok(salaries)
    }

    /// Find salary record by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Salary>> {
        let thing = parse_record_id(TABLE, id)?;
        let salary: Option<Salary> = self.base.db().select(thing).await?;
        Ok(salary)
    }

    /// Create a salary record; total is computed from the components and the
    /// employee's stored basic salary.
    pub async fn create(&self, data: SalaryCreate) -> RepoResult<Salary> {
        let employee_id = parse_record_id("employee", &data.employee)?;
        let employee: Option<Employee> = self.base.db().select(employee_id.clone()).await?;
        let employee = employee.ok_or_else(|| {
            RepoError::Validation(format!("Employee {} not found", data.employee))
        })?;

        let total = payroll::breakdown(&SalaryComponents {
            basic: employee.basic_salary,
            ot_rate: data.ot_rate,
            ot_hours: data.ot_hours,
            leave_days: data.leave_days,
            daily_rate: data.daily_rate,
        })
        .total;

        let _guard = self.base.sequences().lock(TABLE).await;
        let display_id = sequence::next_id(self.base.db(), TABLE, PREFIX).await?;

        let salary = Salary {
            id: None,
            display_id,
            employee: employee_id,
            month: data.month,
            workdays: data.workdays,
            ot_rate: data.ot_rate,
            ot_hours: data.ot_hours,
            leave_days: data.leave_days,
            daily_rate: data.daily_rate,
            total_salary: total,
        };

        let created: Option<Salary> = self.base.db().create(TABLE).content(salary).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create salary record".to_string()))
    }

    /// Update a salary record (display_id 与员工引用不可变)
    ///
    /// 任何组成项变化都会按合并后的值重算 total_salary。
    pub async fn update(&self, id: &str, data: SalaryUpdate) -> RepoResult<Salary> {
        let thing = parse_record_id(TABLE, id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Salary {} not found", id)))?;

        let employee: Option<Employee> =
            self.base.db().select(existing.employee.clone()).await?;
        let employee = employee.ok_or_else(|| {
            RepoError::Database(format!(
                "Employee {} referenced by salary {} is missing",
                existing.employee, id
            ))
        })?;

        // 合并后的组成项 (id / display_id / employee 不在其中，保持不变)
        #[derive(serde::Serialize)]
        struct SalaryMerge {
            month: String,
            workdays: u32,
            ot_rate: rust_decimal::Decimal,
            ot_hours: rust_decimal::Decimal,
            leave_days: u32,
            daily_rate: rust_decimal::Decimal,
            total_salary: rust_decimal::Decimal,
        }

        let mut merged = SalaryMerge {
            month: data.month.unwrap_or(existing.month),
            workdays: data.workdays.unwrap_or(existing.workdays),
            ot_rate: data.ot_rate.unwrap_or(existing.ot_rate),
            ot_hours: data.ot_hours.unwrap_or(existing.ot_hours),
            leave_days: data.leave_days.unwrap_or(existing.leave_days),
            daily_rate: data.daily_rate.unwrap_or(existing.daily_rate),
            total_salary: existing.total_salary,
        };

        merged.total_salary = payroll::breakdown(&SalaryComponents {
            basic: employee.basic_salary,
            ot_rate: merged.ot_rate,
            ot_hours: merged.ot_hours,
            leave_days: merged.leave_days,
            daily_rate: merged.daily_rate,
        })
        .total;

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", merged))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Salary {} not found", id)))
    }

    /// Hard delete a salary record; false when the record did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        let deleted: Option<Salary> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
