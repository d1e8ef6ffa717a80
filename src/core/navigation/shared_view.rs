use crate::core::navigation::view::View;
use std::sync::{Arc, PoisonError, RwLock};

/// A `View` shared between the input side, which mutates it, and the
/// scheduler, which reads it every time a row is handed out.
#[derive(Debug, Clone)]
pub struct SharedView {
    inner: Arc<RwLock<View>>,
}

impl SharedView {
    #[must_use]
    pub fn new(view: View) -> Self {
        Self {
            inner: Arc::new(RwLock::new(view)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> View {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the view and returns its result.
    pub fn update<T>(&self, f: impl FnOnce(&mut View) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
