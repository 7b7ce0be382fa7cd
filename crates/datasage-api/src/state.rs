//! Application state wiring the pipeline together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. The chat service is generic over store/provider traits; AppState
//! pins it to the concrete infra implementations. This replaces the
//! ambient globals of a script-style implementation: every dependency is
//! constructed once here and injected.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Mutex;

use datasage_core::service::ChatService;
use datasage_core::session::SessionManager;
use datasage_infra::config::load_global_config;
use datasage_infra::llm::gemini::GeminiProvider;
use datasage_infra::secret::env::{API_KEY_VAR, EnvSecretProvider};
use datasage_infra::sqlite::pool::DatabasePool;
use datasage_infra::sqlite::turns::SqliteMessageStore;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteMessageStore, GeminiProvider>;

/// Shared application state.
///
/// The session manager sits behind a tokio `Mutex`; the chat handler holds
/// the guard across the whole pipeline, which is what serializes
/// submissions for the interaction context.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub session: Arc<Mutex<SessionManager>>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to the DB, load config,
    /// resolve the credential, wire the service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("datasage.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let config = load_global_config(&data_dir).await;

        // The one required credential; fail fast instead of at first call.
        let api_key = EnvSecretProvider::new()
            .get(API_KEY_VAR)
            .with_context(|| format!("{API_KEY_VAR} is not set (required for the completion endpoint)"))?;

        let provider = GeminiProvider::new(api_key, &config);
        let store = SqliteMessageStore::new(db_pool);
        let chat_service = ChatService::new(store, provider);

        Ok(Self {
            chat_service: Arc::new(chat_service),
            session: Arc::new(Mutex::new(SessionManager::new())),
            data_dir,
        })
    }
}

/// Resolve the data directory: `DATASAGE_DATA_DIR` env var, falling back to
/// `~/.datasage`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DATASAGE_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".datasage"))
        .unwrap_or_else(|| PathBuf::from(".datasage"))
}
