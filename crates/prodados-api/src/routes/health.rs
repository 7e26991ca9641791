//! Endpoint de health check.
//!
//! Usado por load balancers e sistemas de orquestração para verificar
//! a disponibilidade do serviço e de suas dependências.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// Resposta do health check detalhado.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Estado geral ("healthy" | "degraded")
    pub status: String,

    /// Versão da API
    pub version: String,

    /// Uptime do servidor (segundos)
    pub uptime_secs: i64,

    /// Horário atual (ISO 8601)
    pub timestamp: String,

    /// Estado individual dos componentes
    pub components: ComponentHealth,
}

/// Estado individual dos componentes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Conexão com o banco de dados
    pub database: ComponentStatus,
}

/// Estado de um componente.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentStatus {
    /// Estado ("up" | "down" | "not_configured")
    pub status: String,

    /// Informação adicional (opcional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentStatus {
    /// Componente operacional.
    pub fn up() -> Self {
        Self {
            status: "up".to_string(),
            message: None,
        }
    }

    /// Componente indisponível.
    pub fn down(message: impl Into<String>) -> Self {
        Self {
            status: "down".to_string(),
            message: Some(message.into()),
        }
    }

    /// Componente não configurado.
    pub fn not_configured() -> Self {
        Self {
            status: "not_configured".to_string(),
            message: None,
        }
    }
}

/// Health check simples (liveness probe).
///
/// Confirma apenas que o servidor responde.
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Health check detalhado (readiness probe).
///
/// Verifica o estado das dependências (banco de dados).
/// GET /health/ready
pub async fn health_ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut overall_status = "healthy";
    let mut status_code = StatusCode::OK;

    // Estado do banco de dados
    let database_status = if state.db_pool.is_some() {
        if state.is_db_healthy().await {
            ComponentStatus::up()
        } else {
            overall_status = "degraded";
            status_code = StatusCode::SERVICE_UNAVAILABLE;
            ComponentStatus::down("Falha de conexão")
        }
    } else {
        // Sem banco o serviço responde só com dados ao vivo/sintéticos
        ComponentStatus::not_configured()
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: state.version.clone(),
        uptime_secs: state.uptime_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        components: ComponentHealth {
            database: database_status,
        },
    };

    (status_code, Json(response))
}

/// Roteador de health check.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health_check))
        .route("/ready", get(health_ready))
}
