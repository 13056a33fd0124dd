//! Shared application state for the Axum server.

use std::path::PathBuf;
use std::sync::Arc;

use signpose_core::SignError;
use signpose_lexicon::LexiconIndex;
use signpose_resolve::GlossToPose;
use signpose_translate::GlosserRegistry;

use crate::render::RenderConfig;
use crate::tasks::TaskStore;

/// Server construction parameters.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory of lexicon CSV files and their clips.
    pub lexicon_dir: PathBuf,
    /// Directory for produced pose files and videos.
    pub output_dir: PathBuf,
    /// Rendering commands; `None` means conversions stop at the pose
    /// file and return its location as the result.
    pub render: Option<RenderConfig>,
}

impl ServerConfig {
    /// Config with rendering disabled.
    pub fn new(lexicon_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            lexicon_dir: lexicon_dir.into(),
            output_dir: output_dir.into(),
            render: None,
        }
    }
}

/// Shared application state, passed to all route handlers via Axum
/// `State`.
///
/// The lexicon index is built once here and shared read-only — lookups
/// need no locking. A rebuild would construct a fresh [`AppState`] and
/// swap it at the router level, never mutate this one. The [`TaskStore`]
/// is the only mutable state, and it guards itself.
pub struct AppState {
    /// The glossing strategy table, fixed at startup.
    pub glossers: GlosserRegistry,
    /// The gloss→pose resolver over the lexicon index.
    pub resolver: Arc<GlossToPose>,
    /// Status of every submitted conversion task.
    pub tasks: TaskStore,
    /// Where produced pose files land.
    pub poses_dir: PathBuf,
    /// Where rendered videos land.
    pub videos_dir: PathBuf,
    /// Rendering commands, when video output is enabled.
    pub render: Option<RenderConfig>,
}

impl AppState {
    /// Builds the state: lexicon index, glosser registry seeded with
    /// the lexicon's vocabulary, resolver, and output directories.
    ///
    /// # Errors
    ///
    /// [`SignError::StorageRead`] when the lexicon directory cannot be
    /// scanned; [`SignError::StorageWrite`] when an output directory
    /// cannot be created.
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, SignError> {
        let index = Arc::new(LexiconIndex::build(&config.lexicon_dir)?);
        if index.is_empty() {
            tracing::warn!(
                lexicon = %config.lexicon_dir.display(),
                "lexicon index is empty; every conversion will fail"
            );
        }

        let glossers = GlosserRegistry::with_defaults(index.words());
        let resolver = Arc::new(GlossToPose::new(index));

        let poses_dir = config.output_dir.join("poses");
        let videos_dir = config.output_dir.join("videos");
        for dir in [&poses_dir, &videos_dir] {
            std::fs::create_dir_all(dir).map_err(|e| SignError::StorageWrite {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;
        }

        Ok(Arc::new(Self {
            glossers,
            resolver,
            tasks: TaskStore::new(),
            poses_dir,
            videos_dir,
            render: config.render,
        }))
    }
}
