//! Estado compartilhado da aplicação.
//!
//! O `AppState` é compartilhado entre todos os handlers via o extractor
//! `State` do Axum, embrulhado em `Arc`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use prodados_core::config::CacheConfig;
use prodados_data::provider::{AgregadosClient, SidraClient};

/// Estado compartilhado entre os handlers.
#[derive(Clone)]
pub struct AppState {
    /// Pool de conexões PostgreSQL (datasets e cache de dados de pesquisa).
    /// `None` quando `DATABASE_URL` não está configurada; o endpoint de
    /// pesquisa responde com erro nesse caso.
    pub db_pool: Option<PgPool>,

    /// Cliente da API de agregados do IBGE (indicadores econômicos)
    pub agregados: Arc<AgregadosClient>,

    /// Cliente da API SIDRA (tabelas de valores)
    pub sidra: Arc<SidraClient>,

    /// Configuração do cache (TTL e limite de linhas)
    pub cache: CacheConfig,

    /// Versão da API (do Cargo.toml)
    pub version: String,

    /// Momento de início do servidor (uptime)
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Cria o estado com os clientes dados e sem banco.
    pub fn new(agregados: AgregadosClient, sidra: SidraClient, cache: CacheConfig) -> Self {
        Self {
            db_pool: None,
            agregados: Arc::new(agregados),
            sidra: Arc::new(sidra),
            cache,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// Associa o pool de banco de dados.
    #[must_use]
    pub fn with_db_pool(mut self, pool: PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Uptime do servidor em segundos.
    pub fn uptime_secs(&self) -> i64 {
        Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }

    /// Verifica a saúde da conexão com o banco.
    pub async fn is_db_healthy(&self) -> bool {
        match &self.db_pool {
            Some(pool) => sqlx::query("SELECT 1").fetch_one(pool).await.is_ok(),
            None => false,
        }
    }
}

/// Estado para testes: clientes com URLs públicas e sem banco.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    let agregados = AgregadosClient::new().expect("cliente agregados");
    let sidra = SidraClient::new().expect("cliente sidra");
    AppState::new(agregados, sidra, CacheConfig::default())
}
