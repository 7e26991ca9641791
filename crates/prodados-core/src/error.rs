//! Tipos de erro dos serviços de dados.
//!
//! Este módulo define a taxonomia de erros usada em todo o sistema.
//! A política de propagação segue o contrato dos handlers: erros
//! recuperáveis (upstream, escrita de cache) degradam o resultado em vez
//! de falhar a chamada; apenas resolução de dataset e falhas inesperadas
//! chegam ao cliente como resposta de erro.

use thiserror::Error;

/// Erro central dos serviços PRODADOS.
#[derive(Debug, Error)]
pub enum ProdadosError {
    /// Dataset não encontrado (erro do chamador, aborta a chamada).
    /// A mensagem é contrato de resposta; o identificador fica fora dela.
    #[error("Dataset não encontrado")]
    DatasetNotFound(String),

    /// Falha em chamada a API externa (recuperável via fallback)
    #[error("Erro na fonte externa: {0}")]
    Upstream(String),

    /// Falha ao gravar no cache (registrada em log, não fatal)
    #[error("Erro ao gravar cache: {0}")]
    CacheWrite(String),

    /// Erro de banco de dados
    #[error("Erro de banco de dados: {0}")]
    Database(String),

    /// Erro de configuração
    #[error("Erro de configuração: {0}")]
    Config(String),

    /// Erro de serialização
    #[error("Erro de serialização: {0}")]
    Serialization(String),

    /// Erro interno inesperado
    #[error("Erro interno do servidor: {0}")]
    Internal(String),
}

/// Tipo Result para operações dos serviços.
pub type ProdadosResult<T> = Result<T, ProdadosError>;

impl ProdadosError {
    /// Verifica se o erro é recuperável dentro do handler.
    ///
    /// Erros recuperáveis nunca escapam como resposta não-200: o handler
    /// degrada o resultado (menos indicadores, dados sintéticos).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::CacheWrite(_))
    }
}

impl From<serde_json::Error> for ProdadosError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for ProdadosError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(ProdadosError::Upstream("timeout".into()).is_recoverable());
        assert!(ProdadosError::CacheWrite("conexão".into()).is_recoverable());
        assert!(!ProdadosError::DatasetNotFound("abc".into()).is_recoverable());
        assert!(!ProdadosError::Internal("panic".into()).is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = ProdadosError::DatasetNotFound("xyz".into());
        assert_eq!(err.to_string(), "Dataset não encontrado");

        let err = ProdadosError::Database("pool fechado".into());
        assert_eq!(err.to_string(), "Erro de banco de dados: pool fechado");
    }
}
