use std::rc::Rc;

use leptos_router::{use_navigate, NavigateOptions};

use crate::login::Navigator;

/// [`Navigator`] backed by the Leptos router
///
/// Must be created inside a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
  navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
  pub fn from_context() -> Self {
    Self {
      navigate: Rc::new(use_navigate()),
    }
  }
}

impl Navigator for RouterNavigator {
  fn replace(&self, path: &str) {
    (self.navigate)(
      path,
      NavigateOptions {
        replace: true,
        ..Default::default()
      },
    );
  }
}
