//! UI Components

pub mod field;
pub mod navbar;
pub mod toasts;

pub use field::{NumberField, TextField};
pub use navbar::Navbar;
pub use toasts::Toasts;
