//! Coleta e normalização de dados externos.
//!
//! Este crate concentra as integrações de saída dos serviços PRODADOS:
//! - [`provider::AgregadosClient`]: API de agregados do IBGE (séries de
//!   indicadores econômicos)
//! - [`provider::SidraClient`]: API SIDRA do IBGE (tabelas de valores)
//! - [`provider::fgv`]: substituto sintético do índice de confiança FGV
//! - [`provider::inep`]: pontos curados do IDEB (substituto até existir
//!   integração real)
//! - [`sample`]: síntese de dados de exemplo por categoria
//! - [`snapshot`]: agregação concorrente dos quatro indicadores

pub mod error;
pub mod format;
pub mod provider;
pub mod sample;
pub mod snapshot;

pub use error::DataError;
pub use provider::{AgregadosClient, SidraClient};
pub use snapshot::fetch_indicator_snapshot;
