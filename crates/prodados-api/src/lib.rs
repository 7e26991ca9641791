//! Servidor REST dos serviços de dados PRODADOS.
//!
//! Este crate fornece:
//! - API REST baseada em Axum
//! - Endpoint de snapshot de indicadores econômicos
//! - Endpoint de busca de datasets de pesquisa com cache em PostgreSQL
//! - Health check
//!
//! # Módulos
//!
//! - [`state`]: estado compartilhado da aplicação (AppState)
//! - [`routes`]: endpoints REST
//! - [`repository`]: acesso ao banco (datasets e cache de dados)
//! - [`error`]: envelope de erro das respostas

pub mod error;
pub mod repository;
pub mod routes;
pub mod state;

pub use error::{ApiResult, ErrorEnvelope};
pub use routes::*;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
