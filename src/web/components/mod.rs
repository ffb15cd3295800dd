//! Storefront UI Components

mod home;
mod login;

pub use home::Home;
pub use login::LoginForm;
