//! Day status and day kind enumerations.
//!
//! [`DayStatus`] is the derived attendance outcome of a single day and
//! [`DayKind`] tells whether the day is a scheduled workday, a week-off or a
//! holiday.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attendance outcome for one employee on one day.
///
/// Derived from a punch pair on demand; never stored.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayStatus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(DayStatus::HalfDayPresent.pay_weight(), Decimal::new(5, 1));
/// assert_eq!(DayStatus::PartialPresent.code(), "PP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Worked 8 hours or more.
    Present,
    /// Worked more than 4.5 but less than 8 hours.
    HalfDayPresent,
    /// Worked more than 1 and up to 4.5 hours.
    PartialPresent,
    /// No usable punch pair, or 1 hour or less worked.
    Absent,
}

impl DayStatus {
    /// Every status, in report column order.
    pub const ALL: [DayStatus; 4] = [
        DayStatus::Present,
        DayStatus::HalfDayPresent,
        DayStatus::PartialPresent,
        DayStatus::Absent,
    ];

    /// Fraction of a payable day this status earns.
    pub fn pay_weight(&self) -> Decimal {
        match self {
            DayStatus::Present => Decimal::ONE,
            DayStatus::HalfDayPresent => Decimal::new(5, 1),
            DayStatus::PartialPresent => Decimal::new(25, 2),
            DayStatus::Absent => Decimal::ZERO,
        }
    }

    /// Short code painted in monthly grid cells.
    pub fn code(&self) -> &'static str {
        match self {
            DayStatus::Present => "P",
            DayStatus::HalfDayPresent => "HD",
            DayStatus::PartialPresent => "PP",
            DayStatus::Absent => "A",
        }
    }

    /// Returns true for every status other than Absent.
    pub fn is_worked(&self) -> bool {
        !matches!(self, DayStatus::Absent)
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Present => write!(f, "Present"),
            DayStatus::HalfDayPresent => write!(f, "Half Day Present"),
            DayStatus::PartialPresent => write!(f, "Partial Present"),
            DayStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// Whether a calendar day is a scheduled workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday.
    Workday,
    /// Saturday or Sunday.
    WeekOff,
    /// A dated holiday from the holiday calendar.
    Holiday,
}

impl DayKind {
    /// Returns true when a day without attendance is not a loss of pay.
    pub fn is_off(&self) -> bool {
        !matches!(self, DayKind::Workday)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Workday => write!(f, "Workday"),
            DayKind::WeekOff => write!(f, "Week Off"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}
