use std::rc::Rc;

use leptos::*;
use leptos_router::Redirect;

use crate::login::constants::{LOGIN_ROUTE, LOGO_URL};
use crate::login::SessionStore;

/// Placeholder landing page; only reachable with a session
#[component]
pub fn Home(session: Rc<dyn SessionStore>) -> impl IntoView {
  if !session.is_authenticated() {
    return view! { <Redirect path=LOGIN_ROUTE/> }.into_view();
  }

  view! {
    <div class="home-container">
      <img src=LOGO_URL class="home-website-logo" alt="website logo"/>
      <h1 class="home-heading">"Clothes That Get YOU Noticed"</h1>
    </div>
  }
  .into_view()
}
