//! Filterable, paginated report table.
//!
//! One parametrised table replaces per-page search / filter / paginate state:
//! configure it with columns and a data source, then apply a [`ReportQuery`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayStatus, MonthlySummary};

use super::column::ReportColumn;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Upper bound on rows per page.
pub const MAX_PAGE_SIZE: u32 = 500;

/// A predicate over monthly summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFilter {
    /// Case-insensitive substring match on the employee id.
    Search(String),
    /// At least this many loss-of-pay days.
    MinLossOfPay(u32),
    /// At least one day of the month has this status.
    ///
    /// Absent matches on loss-of-pay days, so un-punched days already covered
    /// by a holiday count do not match.
    HasStatus(DayStatus),
}

impl ReportFilter {
    /// Returns true if `summary` passes this filter.
    pub fn matches(&self, summary: &MonthlySummary) -> bool {
        match self {
            ReportFilter::Search(needle) => summary
                .employee_id
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            ReportFilter::MinLossOfPay(min) => summary.loss_of_pay_days >= *min,
            ReportFilter::HasStatus(DayStatus::Absent) => summary.loss_of_pay_days > 0,
            ReportFilter::HasStatus(status) => summary.count_status(*status) > 0,
        }
    }
}

/// Search, filter and pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// Free-text search on employee id.
    #[serde(default)]
    pub search: Option<String>,
    /// Only employees with at least this many LOP days.
    #[serde(default)]
    pub min_loss_of_pay: Option<u32>,
    /// Only employees with at least one day of this status.
    #[serde(default)]
    pub status: Option<DayStatus>,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            search: None,
            min_loss_of_pay: None,
            status: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ReportQuery {
    /// The filters this query implies. An empty or blank search is no filter.
    pub fn filters(&self) -> Vec<ReportFilter> {
        let mut filters = Vec::new();

        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                filters.push(ReportFilter::Search(search.to_string()));
            }
        }
        if let Some(min) = self.min_loss_of_pay {
            filters.push(ReportFilter::MinLossOfPay(min));
        }
        if let Some(status) = self.status {
            filters.push(ReportFilter::HasStatus(status));
        }

        filters
    }

    fn validate(&self) -> EngineResult<()> {
        if self.page == 0 {
            return Err(EngineError::InvalidQuery {
                message: "page numbers start at 1".to_string(),
            });
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(EngineError::InvalidQuery {
                message: format!("page size must be between 1 and {}", MAX_PAGE_SIZE),
            });
        }
        Ok(())
    }
}

/// One page of rendered report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPage {
    /// Header labels, one per column.
    pub headers: Vec<String>,
    /// Rendered rows for this page.
    pub rows: Vec<Vec<String>>,
    /// 1-based page number.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
    /// Rows matching the filters, across all pages.
    pub total_rows: usize,
    /// Number of pages for `total_rows`.
    pub total_pages: u32,
}

/// A report table over monthly summaries.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summarize;
/// use attendance_engine::models::LeaveUsage;
/// use attendance_engine::report::{ReportColumn, ReportQuery, ReportTable};
///
/// let summaries = ["EMP-001", "EMP-002", "OPS-010"]
///     .iter()
///     .map(|id| summarize(id, 9, 2025, &[], &LeaveUsage::new(), 0).unwrap())
///     .collect();
///
/// let table = ReportTable::new(ReportColumn::summary_columns(), summaries);
/// let query = ReportQuery { search: Some("emp".to_string()), ..Default::default() };
/// let page = table.apply(&query).unwrap();
///
/// assert_eq!(page.total_rows, 2);
/// assert_eq!(page.rows[0][0], "EMP-001");
/// ```
#[derive(Debug, Clone)]
pub struct ReportTable {
    columns: Vec<ReportColumn>,
    summaries: Vec<MonthlySummary>,
}

impl ReportTable {
    /// Creates a table from its columns and data source.
    pub fn new(columns: Vec<ReportColumn>, summaries: Vec<MonthlySummary>) -> Self {
        Self { columns, summaries }
    }

    /// The configured columns.
    pub fn columns(&self) -> &[ReportColumn] {
        &self.columns
    }

    /// Header labels for the configured columns.
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(ReportColumn::header).collect()
    }

    /// Summaries passing every filter of `query`, in data source order.
    pub fn filtered(&self, query: &ReportQuery) -> Vec<&MonthlySummary> {
        let filters = query.filters();
        self.summaries
            .iter()
            .filter(|summary| filters.iter().all(|filter| filter.matches(summary)))
            .collect()
    }

    /// Renders one row.
    pub fn render_row(&self, summary: &MonthlySummary) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.cell(summary))
            .collect()
    }

    /// Renders every row passing the query filters, ignoring pagination.
    ///
    /// Used by exporters that write the whole filtered table.
    pub fn export_rows(&self, query: &ReportQuery) -> Vec<Vec<String>> {
        self.filtered(query)
            .into_iter()
            .map(|summary| self.render_row(summary))
            .collect()
    }

    /// Filters and paginates the table.
    ///
    /// A page past the end yields no rows.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidQuery`] for page 0 or a page size outside
    /// `1..=MAX_PAGE_SIZE`.
    pub fn apply(&self, query: &ReportQuery) -> EngineResult<ReportPage> {
        query.validate()?;

        let matching = self.filtered(query);
        let total_rows = matching.len();
        let page_size = query.page_size as usize;
        let total_pages = total_rows.div_ceil(page_size) as u32;

        let rows: Vec<Vec<String>> = matching
            .into_iter()
            .skip((query.page as usize - 1) * page_size)
            .take(page_size)
            .map(|summary| self.render_row(summary))
            .collect();

        debug!(
            total_rows,
            page = query.page,
            returned = rows.len(),
            "Report page rendered"
        );

        Ok(ReportPage {
            headers: self.headers(),
            rows,
            page: query.page,
            page_size: query.page_size,
            total_rows,
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{get_day_kind, summarize};
    use crate::models::{AttendanceRecord, DayKind, LeaveUsage, ReportPeriod, parse_timestamp};
    use chrono::NaiveDate;

    fn summary_with_present_days(employee_id: &str, present: u32) -> MonthlySummary {
        // September 2025: workdays start on Monday the 1st
        let records: Vec<AttendanceRecord> = (1..=present)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(2025, 9, day).unwrap();
                AttendanceRecord {
                    employee_id: employee_id.to_string(),
                    date,
                    punch_in_time: parse_timestamp(&format!("{}T09:00:00Z", date)),
                    punch_out_time: parse_timestamp(&format!("{}T18:00:00Z", date)),
                }
            })
            .collect();
        summarize(employee_id, 9, 2025, &records, &LeaveUsage::new(), 0).unwrap()
    }

    fn create_table(count: usize) -> ReportTable {
        let summaries = (0..count)
            .map(|i| summary_with_present_days(&format!("EMP-{:03}", i + 1), (i % 5) as u32))
            .collect();
        ReportTable::new(ReportColumn::summary_columns(), summaries)
    }

    #[test]
    fn test_default_query_returns_first_page() {
        let table = create_table(30);
        let page = table.apply(&ReportQuery::default()).unwrap();
        assert_eq!(page.rows.len(), 25);
        assert_eq!(page.total_rows, 30);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.headers.len(), table.columns().len());
    }

    #[test]
    fn test_second_page_holds_remainder() {
        let table = create_table(30);
        let query = ReportQuery {
            page: 2,
            ..Default::default()
        };
        let page = table.apply(&query).unwrap();
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.rows[0][0], "EMP-026");
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let table = create_table(3);
        let query = ReportQuery {
            page: 4,
            page_size: 2,
            ..Default::default()
        };
        let page = table.apply(&query).unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_empty_table() {
        let table = create_table(0);
        let page = table.apply(&ReportQuery::default()).unwrap();
        assert_eq!(page.total_rows, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_invalid_pagination_is_rejected() {
        let table = create_table(3);
        for query in [
            ReportQuery {
                page: 0,
                ..Default::default()
            },
            ReportQuery {
                page_size: 0,
                ..Default::default()
            },
            ReportQuery {
                page_size: MAX_PAGE_SIZE + 1,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                table.apply(&query),
                Err(EngineError::InvalidQuery { .. })
            ));
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let table = create_table(12);
        let query = ReportQuery {
            search: Some("  emp-01 ".to_string()),
            ..Default::default()
        };
        let page = table.apply(&query).unwrap();
        // EMP-010, EMP-011, EMP-012
        assert_eq!(page.total_rows, 3);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let query = ReportQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(query.filters().is_empty());
    }

    #[test]
    fn test_min_loss_of_pay_filter() {
        let table = create_table(5);
        // present days 0..=4, so LOP 22, 21, 20, 19, 18
        let query = ReportQuery {
            min_loss_of_pay: Some(21),
            ..Default::default()
        };
        let rows = table.export_rows(&query);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_status_filter() {
        let table = create_table(5);
        let query = ReportQuery {
            status: Some(DayStatus::Present),
            ..Default::default()
        };
        assert_eq!(table.filtered(&query).len(), 4);
    }

    #[test]
    fn test_absent_filter_follows_loss_of_pay() {
        let workdays: Vec<NaiveDate> = ReportPeriod::new(9, 2025)
            .unwrap()
            .days()
            .filter(|date| get_day_kind(*date) == DayKind::Workday)
            .collect();
        // Present on all but the last two workdays
        let records: Vec<AttendanceRecord> = workdays[..workdays.len() - 2]
            .iter()
            .map(|date| AttendanceRecord {
                employee_id: "EMP-001".to_string(),
                date: *date,
                punch_in_time: parse_timestamp(&format!("{}T09:00:00Z", date)),
                punch_out_time: parse_timestamp(&format!("{}T18:00:00Z", date)),
            })
            .collect();

        let covered = summarize("EMP-001", 9, 2025, &records, &LeaveUsage::new(), 2).unwrap();
        let uncovered = summarize("EMP-001", 9, 2025, &records, &LeaveUsage::new(), 1).unwrap();
        assert_eq!(covered.count_status(DayStatus::Absent), 2);
        assert_eq!(covered.loss_of_pay_days, 0);

        let absent = ReportFilter::HasStatus(DayStatus::Absent);
        assert!(!absent.matches(&covered));
        assert!(absent.matches(&uncovered));
    }

    #[test]
    fn test_filters_combine() {
        let table = create_table(10);
        let query = ReportQuery {
            search: Some("EMP-00".to_string()),
            status: Some(DayStatus::Present),
            min_loss_of_pay: Some(20),
            ..Default::default()
        };
        // EMP-001..EMP-009 with present 1..=2 (LOP >= 20) and present > 0
        // i=1 (p1), i=2 (p2), i=6 (p1), i=7 (p2)
        assert_eq!(table.filtered(&query).len(), 4);
    }

    #[test]
    fn test_query_deserialization_defaults() {
        let query: ReportQuery = serde_json::from_str(r#"{"search": "ops"}"#).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.search.as_deref(), Some("ops"));
    }
}
