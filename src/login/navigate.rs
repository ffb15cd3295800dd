/// Navigation capability handed to the login form by its host
pub trait Navigator {
  /// Replace the current history entry with `path`
  fn replace(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for std::rc::Rc<N> {
  fn replace(&self, path: &str) {
    (**self).replace(path)
  }
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
  fn replace(&self, path: &str) {
    (**self).replace(path)
  }
}
