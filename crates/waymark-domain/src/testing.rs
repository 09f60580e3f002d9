use std::sync::{Arc, Mutex};

use waymark_core::DataSource;

use crate::category::Category;

/// Category source whose value tests can mutate mid-scenario, the way the
/// real provider changes underneath the list between reads.
#[derive(Clone)]
pub(crate) struct SharedCategory {
    inner: Arc<Mutex<Category>>,
}

impl SharedCategory {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            inner: Arc::new(Mutex::new(category)),
        }
    }

    pub(crate) fn update(&self, apply: impl FnOnce(&mut Category)) {
        apply(&mut self.inner.lock().unwrap());
    }
}

impl DataSource<Category> for SharedCategory {
    fn data(&self) -> Category {
        self.inner.lock().unwrap().clone()
    }
}
