//! Output rendering (console report, JSON report)

pub mod report;
pub mod summary;

pub use report::{build_report, write_report, ReportInput};
pub use summary::render_console_report;
