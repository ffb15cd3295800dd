mod api;
mod app;
mod components;
mod cookie;
mod navigate;

pub use api::GlooAuthClient;
pub use app::App;
pub use components::{Home, LoginForm};
pub use cookie::DocumentCookieStore;
pub use navigate::RouterNavigator;
