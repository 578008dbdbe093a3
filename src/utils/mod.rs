// Utils compartidos

pub mod constants;
pub mod input;
pub mod sanitize;
pub mod storage;

pub use constants::*;
pub use input::{normalize_email, parse_rental_days};
pub use sanitize::sanitize;
pub use storage::{KeyValueStore, LocalStore};
