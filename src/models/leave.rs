//! Leave type and leave balance models.
//!
//! Leave balances are supplied per employee by the external leave service as a
//! map from leave-type code to `{allocated, used, remaining, pending}`.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Leave categories that count towards payable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeaveType {
    /// Earned Leave.
    #[serde(rename = "EL")]
    Earned,
    /// Sick Leave.
    #[serde(rename = "SL")]
    Sick,
    /// Casual Leave.
    #[serde(rename = "CL")]
    Casual,
    /// Compensatory Off.
    #[serde(rename = "CompOff")]
    CompOff,
}

impl LeaveType {
    /// Every leave type, in report column order.
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Earned,
        LeaveType::Casual,
        LeaveType::Sick,
        LeaveType::CompOff,
    ];

    /// The wire code used by the leave service.
    pub fn code(&self) -> &'static str {
        match self {
            LeaveType::Earned => "EL",
            LeaveType::Sick => "SL",
            LeaveType::Casual => "CL",
            LeaveType::CompOff => "CompOff",
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LeaveType {
    type Err = String;

    /// Parses a leave code, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use attendance_engine::models::LeaveType;
    ///
    /// assert_eq!("EL".parse::<LeaveType>(), Ok(LeaveType::Earned));
    /// assert_eq!("compoff".parse::<LeaveType>(), Ok(LeaveType::CompOff));
    /// assert!("LWP".parse::<LeaveType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "el" => Ok(LeaveType::Earned),
            "sl" => Ok(LeaveType::Sick),
            "cl" => Ok(LeaveType::Casual),
            "compoff" => Ok(LeaveType::CompOff),
            _ => Err(format!("Unknown leave type: {}", s)),
        }
    }
}

/// Leave days used per leave type for one employee.
pub type LeaveUsage = BTreeMap<LeaveType, u32>;

/// Balance of one leave type for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Days granted for the leave year.
    #[serde(default)]
    pub allocated: u32,
    /// Days already taken.
    #[serde(default)]
    pub used: u32,
    /// Days still available.
    #[serde(default)]
    pub remaining: u32,
    /// Days requested but not yet approved.
    #[serde(default)]
    pub pending: u32,
}

/// Snapshot of all leave balances for one employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveBalance, LeaveSnapshot, LeaveType};
///
/// let (snapshot, ignored) = LeaveSnapshot::from_codes(vec![
///     ("EL".to_string(), LeaveBalance { allocated: 12, used: 2, remaining: 10, pending: 0 }),
///     ("LWP".to_string(), LeaveBalance::default()),
/// ]);
/// assert_eq!(snapshot.used_by_type().get(&LeaveType::Earned), Some(&2));
/// assert_eq!(ignored, vec!["LWP".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveSnapshot {
    balances: BTreeMap<LeaveType, LeaveBalance>,
}

impl LeaveSnapshot {
    /// Builds a snapshot from raw `(code, balance)` pairs.
    ///
    /// Unknown codes are not counted towards payable days; they are returned
    /// alongside the snapshot so the caller can report them.
    pub fn from_codes<I>(entries: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (String, LeaveBalance)>,
    {
        let mut balances = BTreeMap::new();
        let mut ignored = Vec::new();

        for (code, balance) in entries {
            match code.parse::<LeaveType>() {
                Ok(leave_type) => {
                    balances.insert(leave_type, balance);
                }
                Err(_) => ignored.push(code),
            }
        }

        (Self { balances }, ignored)
    }

    /// Returns the balance for a leave type, if present.
    pub fn get(&self, leave_type: LeaveType) -> Option<&LeaveBalance> {
        self.balances.get(&leave_type)
    }

    /// Returns the `used` count per leave type.
    pub fn used_by_type(&self) -> LeaveUsage {
        self.balances
            .iter()
            .map(|(leave_type, balance)| (*leave_type, balance.used))
            .collect()
    }
}

impl FromIterator<(LeaveType, LeaveBalance)> for LeaveSnapshot {
    fn from_iter<T: IntoIterator<Item = (LeaveType, LeaveBalance)>>(iter: T) -> Self {
        Self {
            balances: iter.into_iter().collect(),
        }
    }
}
