pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::ReportService;
pub use stores::{PgPostLookup, PgReportStore};
