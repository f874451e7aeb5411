pub mod report_handler;

pub use report_handler::{get_report, list_my_reports, submit_report};
