//! Application context for BrandHub.
//!
//! Loads settings, installs logging, opens the database and caches, and wires the brand and
//! auth services on top of them.
mod logger;

pub use brandhub_error::{BHError, BHResult};
pub use logger::{parse_level, Logger};

use brandhub_core::{AuthService, BrandService, DbCredentialVerifier};
use brandhub_models::{
    settings::{Settings, SqlType},
    CacheProvider, CredentialVerifier, DbManager, MediaStore,
};
use brandhub_storage::{CacheSessionStore, FsMediaStore};
use std::{path::Path, sync::Arc, time::Duration};
use tracing::{info, instrument, warn, Level};

pub struct BHAppContext {
    /// Global settings
    settings: Settings,
    /// Global logger
    logger: Logger,
    /// Database manager
    db_manager: Arc<dyn DbManager>,
    brand_service: BrandService,
    auth_service: AuthService,
}

impl BHAppContext {
    /// Builds the context from the configuration file at `config`.
    ///
    /// Settings are loaded first so the runtime directory and log location apply before
    /// anything else touches the filesystem.
    pub async fn init<D, P>(config: String) -> BHResult<Self>
    where
        D: DbManager + 'static,
        P: CacheProvider + 'static,
    {
        let settings = Settings::new(config)?;
        apply_runtime_dir(&settings.general.runtime_dir)?;

        let level = parse_level(&settings.log.level);
        let mut logger = Logger::new(level);
        logger.initialize(&settings.log.dir, &settings.log.file)?;
        if level.is_none() {
            warn!(
                "Unknown log level {:?}, falling back to info",
                settings.log.level
            );
        }

        Self::init_with::<D, P>(settings, logger).await
    }

    /// Builds the context from already loaded settings and an already installed logger.
    #[instrument(name = "init-app", skip_all)]
    pub async fn init_with<D, P>(settings: Settings, logger: Logger) -> BHResult<Self>
    where
        D: DbManager + 'static,
        P: CacheProvider + 'static,
    {
        ensure_runtime_directories(&settings)?;

        let db_manager = D::init(&settings).await?;
        info!("Database initialized successfully.");
        let cache_provider = P::init(&settings).await?;
        info!("Cache provider initialized successfully.");

        let db = db_manager.get_connection()?;
        let sessions = CacheSessionStore::from_provider(
            cache_provider.as_ref(),
            Duration::from_secs(settings.session.retention),
        )?;
        let media: Arc<dyn MediaStore> = Arc::new(FsMediaStore::new(&settings.media.dir).await?);
        let credentials: Arc<dyn CredentialVerifier> =
            Arc::new(DbCredentialVerifier::new(db.clone()));

        let brand_service = BrandService::new(db.clone(), media, Arc::clone(&credentials));
        let auth_service = AuthService::new(
            db,
            credentials,
            Arc::new(sessions),
            chrono::Duration::seconds(settings.session.lifetime),
        );
        info!("Services initialized successfully.");

        Ok(BHAppContext {
            settings,
            logger,
            db_manager,
            brand_service,
            auth_service,
        })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn db_manager(&self) -> Arc<dyn DbManager> {
        Arc::clone(&self.db_manager)
    }

    #[inline]
    pub fn brands(&self) -> &BrandService {
        &self.brand_service
    }

    #[inline]
    pub fn auth(&self) -> &AuthService {
        &self.auth_service
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        self.logger.set_level(level);
    }

    #[instrument(name = "shutdown", skip_all)]
    pub async fn shutdown(&self) -> BHResult<()> {
        self.db_manager.close().await?;
        info!("Shutdown completed");
        Ok(())
    }
}

/// Switch the working directory so relative paths (`./data`, `./media`, `./logs`) resolve
/// under the configured runtime root.
fn apply_runtime_dir(runtime_dir: &str) -> BHResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| BHError::from(format!("Failed to create runtime_dir {}: {}", dir, e)))?;
    std::env::set_current_dir(dir).map_err(|e| {
        BHError::from(format!(
            "Failed to set current_dir to runtime_dir {}: {}",
            dir, e
        ))
    })?;
    Ok(())
}

/// Create the database, media and log directories named by `settings`.
fn ensure_runtime_directories(settings: &Settings) -> BHResult<()> {
    let mut dirs = vec![settings.media.dir.clone(), settings.log.dir.clone()];
    if settings.db.kind == SqlType::Sqlite && settings.db.sqlite.auto_create {
        dirs.push(settings.db.sqlite.db_dir());
    }

    for dir in dirs {
        std::fs::create_dir_all(Path::new(&dir)).map_err(|e| {
            BHError::from(format!("Failed to create directory {}: {}", dir, e))
        })?;
    }
    Ok(())
}
