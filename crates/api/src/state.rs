use std::sync::Arc;

use wedcard_core::catalog::PresetCatalog;
use wedcard_core::editor::EditorSession;
use wedcard_core::ports::ImageGenerator;
use wedcard_core::viewer::GuestViewer;
use wedcard_db::PgCardStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wedcard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Card store and wedding facts source over `pool`.
    pub store: Arc<PgCardStore>,
    /// Background presets offered to editors.
    pub catalog: Arc<PresetCatalog>,
    /// Image-generation collaborator.
    pub generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    pub fn new(
        pool: wedcard_db::DbPool,
        config: ServerConfig,
        catalog: PresetCatalog,
        generator: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            store: Arc::new(PgCardStore::new(pool.clone())),
            pool,
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            generator,
        }
    }

    /// Hydrate an editor session for `owner`.
    pub async fn open_editor(&self, owner: &str) -> EditorSession {
        EditorSession::open(
            owner,
            self.store.clone(),
            self.store.clone(),
            Arc::clone(&self.generator),
            Arc::clone(&self.catalog),
        )
        .await
    }

    pub fn guest_viewer(&self) -> GuestViewer {
        GuestViewer::new(
            self.store.clone(),
            self.store.clone(),
            Arc::clone(&self.catalog),
        )
    }
}
