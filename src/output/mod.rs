//! Interview reports and their output formats

pub mod report;
pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::InterviewReport;
