use std::sync::Arc;

use crate::model::{CourseStore, ModelManager};

#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<dyn CourseStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    pub fn from_model_manager(mm: ModelManager) -> Self {
        Self::new(Arc::new(mm))
    }

    pub fn store(&self) -> &dyn CourseStore {
        self.store.as_ref()
    }
}
