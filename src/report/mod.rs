//! Monthly attendance CSV report and its table view

mod table;
mod writer;

pub(crate) use table::print_report_table;
pub(crate) use writer::{Report, ReportRow};
