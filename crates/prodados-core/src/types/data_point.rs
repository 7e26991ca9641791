//! Pontos de dados normalizados.
//!
//! Todo dado de pesquisa, venha da API SIDRA, de uma fonte curada ou de
//! síntese por categoria, é normalizado para `DataPoint` antes de ser
//! cacheado ou devolvido ao cliente.

use serde::{Deserialize, Serialize};

/// Origem de um dado retornado.
///
/// Fontes opcionais degradam graciosamente para dados sintéticos; a
/// variante marcada permite que consumidores (e testes) distingam medições
/// reais de substitutos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// Medição real obtida de uma API externa
    Live,
    /// Dado sintético estruturado (integração real ainda não existe)
    Synthetic,
    /// Marcador de último recurso ("dados não disponíveis")
    Placeholder,
}

/// Metadados opcionais de um ponto de dados.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointMetadata {
    /// Linha bruta da resposta tabular, para depuração
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<serde_json::Value>,

    /// Meta oficial do indicador (ex: meta IDEB)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Valor do ano anterior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_year: Option<String>,

    /// Valor estimado (não é medição oficial)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated: Option<bool>,

    /// Marcador de ausência de dados
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<bool>,

    /// URL da fonte oficial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Observação normalizada de um dataset de pesquisa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Região da observação (ex: "Brasil", "Ceará", "Fortaleza")
    pub region: String,

    /// Nome do indicador
    pub name: String,

    /// Valor como string formatada no locale da fonte (ex: "215.000.000")
    pub value: String,

    /// Unidade de medida (ex: "habitantes", "%", "índice")
    pub unit: String,

    /// Período de referência (ex: "2024")
    pub period: String,

    /// Origem do dado (real, sintético ou marcador)
    pub origin: DataOrigin,

    /// Metadados opcionais
    #[serde(default)]
    pub metadata: PointMetadata,
}
