//! Nxt Trendz login - Client-Side Rendered (WASM)

use leptos::*;
use trendz_login::web::App;

fn main() {
  console_error_panic_hook::set_once();
  mount_to_body(|| view! { <App/> });
}
