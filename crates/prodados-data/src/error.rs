//! Erros de coleta de dados externos.

use thiserror::Error;

/// Erro de coleta de dados.
///
/// Todas as variantes são recuperáveis no nível do handler: um indicador
/// que falha é descartado do snapshot, e um dataset que falha cai para a
/// síntese por categoria.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Falha ao criar cliente HTTP: {0}")]
    Connection(String),

    #[error("Requisição falhou ({endpoint}): {message}")]
    Api { endpoint: String, message: String },

    #[error("Falha ao interpretar resposta: {0}")]
    Parse(String),

    #[error("Série sem dados suficientes: {0}")]
    NoData(String),
}
