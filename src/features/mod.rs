pub mod auth;
pub mod dashboard;
pub mod files;
pub mod posts;
pub mod profiles;
pub mod reports;
