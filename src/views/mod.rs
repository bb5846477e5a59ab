pub mod home;
pub mod not_found;

pub use home::render_home;
pub use not_found::{render_not_found, NOT_FOUND_TEXT};
