//! Page modules

pub mod about;
pub mod console;
pub mod sign;

pub use about::AboutPage;
pub use console::ConsolePage;
pub use sign::SignPage;
