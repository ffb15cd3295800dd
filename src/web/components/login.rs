//! Login form component

use std::rc::Rc;

use leptos::*;
use leptos_router::{NavigateOptions, Redirect};

use crate::login::constants::{HOME_ROUTE, LOGIN_IMAGE_URL, LOGO_URL};
use crate::login::{
  render, submit_login, AuthClient, FormState, LoginView, Navigator, SessionStore,
};

/// Username/password form for the storefront
///
/// Shows a redirect home instead of the form whenever `session` holds a
/// token; the cookie is read again on every form state change. Submissions
/// are not de-duplicated and the last reply to arrive wins.
#[component]
pub fn LoginForm(
  client: Rc<dyn AuthClient>,
  session: Rc<dyn SessionStore>,
  navigator: Rc<dyn Navigator>,
) -> impl IntoView {
  let form = create_rw_signal(FormState::new());

  let guard_session = session.clone();
  let show_form = move || {
    form.with(|state| {
      matches!(
        render(guard_session.is_authenticated(), state),
        LoginView::Form(_)
      )
    })
  };

  let on_submit = move |ev: ev::SubmitEvent| {
    ev.prevent_default();

    let credentials = form.with_untracked(FormState::credentials);
    let client = client.clone();
    let session = session.clone();
    let navigator = navigator.clone();

    spawn_local(async move {
      // Session write and navigation happen even if the form is gone by now
      let rejection = submit_login(&*client, &*session, &*navigator, &credentials).await;
      if let Some(message) = rejection {
        form.try_update(|state| state.reject(message));
      }
    });
  };

  let home = move || {
    let options = NavigateOptions {
      replace: true,
      ..Default::default()
    };
    view! { <Redirect path=HOME_ROUTE options=options/> }
  };

  view! {
    <Show when=show_form fallback=home>
      <div class="login-form-container">
        <img src=LOGO_URL class="login-website-logo-mobile-image" alt="website logo"/>
        <img src=LOGIN_IMAGE_URL class="login-image" alt="website login"/>
        <form class="form-container" on:submit=on_submit.clone()>
          <img src=LOGO_URL class="login-website-logo-desktop-image" alt="website logo"/>

          <div class="input-container">
            <label class="input-label" for="username">"USERNAME"</label>
            <input
              type="text"
              id="username"
              class="username-input-field"
              placeholder="Username"
              prop:value=move || form.with(|s| s.username.clone())
              on:input=move |ev| form.update(|s| s.set_username(event_target_value(&ev)))
            />
          </div>

          <div class="input-container">
            <label class="input-label" for="password">"PASSWORD"</label>
            <input
              type="password"
              id="password"
              class="password-input-field"
              placeholder="Password"
              prop:value=move || form.with(|s| s.password.clone())
              on:input=move |ev| form.update(|s| s.set_password(event_target_value(&ev)))
            />
          </div>

          <button type="submit" class="login-button">"Login"</button>
          {move || {
            form
              .with(FormState::error_banner)
              .map(|banner| view! { <p class="error-message">{banner}</p> })
          }}
        </form>
      </div>
    </Show>
  }
}
