//! # Prodados Core
//!
//! Modelos de domínio e tipos centrais dos serviços de dados PRODADOS.
//!
//! Este crate fornece os tipos básicos usados em todo o sistema:
//! - Registros de indicadores econômicos e tendências
//! - Pontos de dados normalizados (observações de pesquisa)
//! - Descritores de dataset e entradas de cache
//! - Taxonomia de erros
//! - Gerenciamento de configuração
//! - Infraestrutura de logging

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;
