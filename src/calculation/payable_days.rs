//! Payable day calculation.
//!
//! The payroll basis for a month is
//! `present + 0.5 * half_days + 0.25 * partial_days + leave used`,
//! where leave used sums the EL, CL, SL and CompOff counts.

use rust_decimal::Decimal;

use crate::models::{DayStatus, LeaveUsage};

/// Calculates the fractional payable days for a month.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::total_payable_days;
/// use attendance_engine::models::{LeaveType, LeaveUsage};
/// use rust_decimal::Decimal;
///
/// let mut leave = LeaveUsage::new();
/// leave.insert(LeaveType::Casual, 1);
///
/// // 18 + 2 * 0.5 + 1 * 0.25 + 1
/// assert_eq!(total_payable_days(18, 2, 1, &leave), Decimal::new(2025, 2));
/// ```
pub fn total_payable_days(
    present_days: u32,
    half_days: u32,
    partial_days: u32,
    leave_usage: &LeaveUsage,
) -> Decimal {
    let worked = Decimal::from(present_days) * DayStatus::Present.pay_weight()
        + Decimal::from(half_days) * DayStatus::HalfDayPresent.pay_weight()
        + Decimal::from(partial_days) * DayStatus::PartialPresent.pay_weight();

    let leave: Decimal = leave_usage.values().map(|used| Decimal::from(*used)).sum();

    (worked + leave).normalize()
}
