/// Maximum upload size in bytes (10MB)
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Report reason length bounds, chars. Kept in sync with the database
/// CHECK constraint on reports.reason.
pub const REPORT_REASON_MIN_LEN: usize = 10;
pub const REPORT_REASON_MAX_LEN: usize = 500;
