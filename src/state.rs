use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenService;
use crate::config::Config;
use crate::store::{IdentityStore, PgIdentityStore, PgTaskStore, TaskStore};

/// Shared application state handed to every handler.
///
/// Stores are behind trait objects so the same routing and service code runs
/// against Postgres in production and the in-memory stores in tests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn IdentityStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(
        users: Arc<dyn IdentityStore>,
        tasks: Arc<dyn TaskStore>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            tasks,
            tokens,
        }
    }

    /// Builds the production state: Postgres-backed stores and a token service
    /// keyed from configuration.
    pub fn postgres(pool: PgPool, config: &Config) -> Self {
        Self::new(
            Arc::new(PgIdentityStore::new(pool.clone())),
            Arc::new(PgTaskStore::new(pool)),
            TokenService::from_config(config),
        )
    }
}
