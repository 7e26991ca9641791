//! Envelope de erro das respostas da API.
//!
//! Toda falha visível ao cliente é um payload JSON com `success: false` e
//! mensagem legível, nunca um trace bruto. Erros recuperáveis (fonte
//! externa, escrita de cache) não chegam aqui: eles degradam o resultado
//! dentro do handler.

use serde::{Deserialize, Serialize};

use prodados_core::error::ProdadosError;

/// Envelope de erro.
///
/// # Exemplo
///
/// ```json
/// {
///   "success": false,
///   "error": "Dataset não encontrado"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Sempre `false`
    pub success: bool,
    /// Mensagem de erro legível
    pub error: String,
    /// Detalhe adicional (opcional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    /// Erro simples, apenas com a mensagem principal.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: None,
        }
    }

    /// Erro com detalhe adicional (falhas inesperadas).
    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

impl std::fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.error, message),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for ErrorEnvelope {}

/// Tipo Result dos handlers da API.
pub type ApiResult<T> = Result<T, (axum::http::StatusCode, axum::Json<ErrorEnvelope>)>;

/// Converte um erro de domínio na resposta HTTP correspondente.
pub fn domain_error(err: ProdadosError) -> (axum::http::StatusCode, axum::Json<ErrorEnvelope>) {
    match &err {
        ProdadosError::DatasetNotFound(_) => (
            axum::http::StatusCode::NOT_FOUND,
            axum::Json(ErrorEnvelope::new(err.to_string())),
        ),
        _ => internal_error(err.to_string()),
    }
}

/// Constrói a resposta de falha inesperada (500).
pub fn internal_error(detail: impl Into<String>) -> (axum::http::StatusCode, axum::Json<ErrorEnvelope>) {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(ErrorEnvelope::with_message(
            "Erro interno do servidor",
            detail,
        )),
    )
}
