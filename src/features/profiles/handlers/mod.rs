pub mod profile_handler;

pub use profile_handler::{get_my_profile, get_profile_by_username, update_my_profile};
