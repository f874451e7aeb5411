pub mod file;

pub use file::StoredFile;
