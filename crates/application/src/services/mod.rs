pub mod summary_report;

pub use summary_report::SummaryReport;
