use std::sync::Arc;

use grammar_core::Catalog;

/// Host-facing surface the UI needs from the composition root.
///
/// The desktop binary implements this with the loaded catalog; tests inject a
/// small catalog of their own.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &dyn UiApp) -> Self {
        Self {
            catalog: app.catalog(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &dyn UiApp) -> AppContext {
    AppContext::new(app)
}
