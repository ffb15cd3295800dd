use std::rc::Rc;

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use super::components::{Home, LoginForm};
use super::{DocumentCookieStore, GlooAuthClient, RouterNavigator};
use crate::login::constants::{HOME_ROUTE, LOGIN_ROUTE};
use crate::login::{AuthClient, Navigator, SessionStore};

/// Storefront shell: the login route and the home route it leads to
#[component]
pub fn App() -> impl IntoView {
  provide_meta_context();

  let session: Rc<dyn SessionStore> = Rc::new(DocumentCookieStore::new());
  let client: Rc<dyn AuthClient> = Rc::new(GlooAuthClient::new());

  let login_session = session.clone();
  let login_view = move || {
    // The navigator needs the router context, so build it per mount
    let navigator: Rc<dyn Navigator> = Rc::new(RouterNavigator::from_context());
    view! { <LoginForm client=client.clone() session=login_session.clone() navigator=navigator/> }
  };
  let home_view = move || view! { <Home session=session.clone()/> };

  view! {
    <Title text="Nxt Trendz"/>
    <Router>
      <main>
        <Routes>
          <Route path=LOGIN_ROUTE view=login_view/>
          <Route path=HOME_ROUTE view=home_view/>
        </Routes>
      </main>
    </Router>
  }
}
