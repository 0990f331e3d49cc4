// Shared utils

pub mod constants;
pub mod cookies;
pub mod query;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use cookies::{delete_cookie, get_cookie, set_cookie};
pub use storage::{load_raw, load_from_storage, remove_from_storage, save_raw, save_to_storage};
