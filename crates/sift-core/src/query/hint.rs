use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Out-of-band metadata attached to a query object, not part of its SQL
/// text. Later processing stages read hints back by name and downcast them.
#[derive(Clone)]
pub struct Hint(Arc<dyn Any + Send + Sync>);

impl Hint {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self(value)
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hint(..)")
    }
}
