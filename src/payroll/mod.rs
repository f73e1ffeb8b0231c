//! Payroll calculation
//!
//! 工资公式来自行政端的工资单逻辑，移到服务器端执行，存储的总额
//! 不再依赖客户端算术：
//!
//! ```text
//! overtime        = ot_rate × ot_hours
//! leave_deduction = leave_days × daily_rate
//! gross           = basic + overtime
//! epf_employee    = basic × 8%          (从工资中扣除)
//! total           = gross − leave_deduction − epf_employee
//! ```
//!
//! 公司缴纳部分 (EPF 12%, ETF 3%) 只出现在报表里，不从工资扣除。

use rust_decimal::Decimal;
use serde::Serialize;

/// 员工自缴 EPF 比例 (%)
pub const EPF_EMPLOYEE_RATE: u32 = 8;
/// 公司缴纳 EPF 比例 (%)
pub const EPF_COMPANY_RATE: u32 = 12;
/// 公司缴纳 ETF 比例 (%)
pub const ETF_RATE: u32 = 3;

/// Inputs of one month's salary computation
#[derive(Debug, Clone)]
pub struct SalaryComponents {
    pub basic: Decimal,
    pub ot_rate: Decimal,
    pub ot_hours: Decimal,
    pub leave_days: u32,
    pub daily_rate: Decimal,
}

/// Full breakdown, as shown on the summary report
#[derive(Debug, Clone, Serialize)]
pub struct SalaryBreakdown {
    pub basic: Decimal,
    pub overtime: Decimal,
    pub gross: Decimal,
    pub leave_deduction: Decimal,
    pub epf_employee: Decimal,
    pub epf_company: Decimal,
    pub etf: Decimal,
    /// 实发工资
    pub total: Decimal,
}

/// Compute the salary breakdown; all figures rounded to 2 decimal places.
pub fn breakdown(c: &SalaryComponents) -> SalaryBreakdown {
    let hundred = Decimal::from(100);

    let overtime = (c.ot_rate * c.ot_hours).round_dp(2);
    let leave_deduction = (c.daily_rate * Decimal::from(c.leave_days)).round_dp(2);
    let gross = (c.basic + overtime).round_dp(2);
    let epf_employee = (c.basic * Decimal::from(EPF_EMPLOYEE_RATE) / hundred).round_dp(2);
    let epf_company = (c.basic * Decimal::from(EPF_COMPANY_RATE) / hundred).round_dp(2);
    let etf = (c.basic * Decimal::from(ETF_RATE) / hundred).round_dp(2);
    let total = (gross - leave_deduction - epf_employee).round_dp(2);

    SalaryBreakdown {
        basic: c.basic,
        overtime,
        gross,
        leave_deduction,
        epf_employee,
        epf_company,
        etf,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_breakdown_matches_report_formula() {
        // basic 60000, OT 500×10, 2 leave days at 2000/day
        let b = breakdown(&SalaryComponents {
            basic: dec!(60000),
            ot_rate: dec!(500),
            ot_hours: dec!(10),
            leave_days: 2,
            daily_rate: dec!(2000),
        });

        assert_eq!(b.overtime, dec!(5000.00));
        assert_eq!(b.gross, dec!(65000.00));
        assert_eq!(b.leave_deduction, dec!(4000.00));
        assert_eq!(b.epf_employee, dec!(4800.00));
        assert_eq!(b.epf_company, dec!(7200.00));
        assert_eq!(b.etf, dec!(1800.00));
        // 65000 - 4000 - 4800
        assert_eq!(b.total, dec!(56200.00));
    }

    #[test]
    fn test_no_overtime_no_leave() {
        let b = breakdown(&SalaryComponents {
            basic: dec!(45000),
            ot_rate: Decimal::ZERO,
            ot_hours: Decimal::ZERO,
            leave_days: 0,
            daily_rate: dec!(1500),
        });

        assert_eq!(b.overtime, Decimal::ZERO.round_dp(2));
        assert_eq!(b.leave_deduction, Decimal::ZERO.round_dp(2));
        assert_eq!(b.total, dec!(41400.00)); // 45000 - 8%
    }

    #[test]
    fn test_company_contributions_not_deducted() {
        let b = breakdown(&SalaryComponents {
            basic: dec!(10000),
            ot_rate: Decimal::ZERO,
            ot_hours: Decimal::ZERO,
            leave_days: 0,
            daily_rate: Decimal::ZERO,
        });

        // total 只扣员工自缴 8%，不含公司 EPF/ETF
        assert_eq!(b.total, dec!(9200.00));
        assert_eq!(b.epf_company, dec!(1200.00));
        assert_eq!(b.etf, dec!(300.00));
    }
}
