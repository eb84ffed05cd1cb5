//! Tabular attendance reports.
//!
//! Turns monthly summaries into header + row string tables, with search,
//! filtering and pagination, for on-screen tables and spreadsheet/PDF export.

mod column;
mod table;

pub use column::{ReportColumn, ReportLayout};
pub use table::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, ReportFilter, ReportPage, ReportQuery, ReportTable,
};
