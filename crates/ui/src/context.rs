use std::sync::Arc;

use services::{CatalogService, ProgressService};

/// UI-facing application surface, implemented by the composition root.
///
/// Handlers receive services through this context instead of closing over
/// globals; the view owns no authoritative data of its own.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn progress(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
