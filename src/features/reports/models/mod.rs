pub mod report;

pub use report::{NewReport, Report, ReportStatus, ReportType};
