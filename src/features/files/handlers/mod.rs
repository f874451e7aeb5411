pub mod file_handler;

pub use file_handler::{delete_file_by_url, presign_file, upload_file};
