//! Rotas da API.
//!
//! Define todos os endpoints REST e monta o roteador.
//!
//! # Estrutura de rotas
//!
//! - `/health` - health check (liveness)
//! - `/health/ready` - health check detalhado (readiness)
//! - `/api/v1/economic-data` - indicadores econômicos agregados
//! - `/api/v1/research-data` - datasets de pesquisa com cache

pub mod economic;
pub mod health;
pub mod research;

pub use economic::{economic_router, EconomicDataResponse};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use research::{
    research_router, DatasetSummary, FetchResearchDataRequest, FetchResearchDataResponse,
};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// Monta o roteador completo da API.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Health check
        .nest("/health", health_router())
        // API v1
        .nest("/api/v1/economic-data", economic_router())
        .nest("/api/v1/research-data", research_router())
}
