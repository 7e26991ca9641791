//! Descritores de dataset e entradas de cache.
//!
//! `DatasetDescriptor` é propriedade do banco (tabela `research_datasets`
//! com join em `research_categories`); este núcleo apenas lê.
//! `CacheEntry` corresponde à tabela `research_data`, identificada pela
//! tripla `(dataset_id, region, period)` sob restrição UNIQUE composta.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DataPoint;

/// Categoria de pesquisa associada a um dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchCategory {
    /// Nome de exibição (ex: "Educação")
    pub name: String,
    /// Slug estável usado na síntese por categoria (ex: "educacao")
    pub slug: String,
}

/// Descritor de um dataset de pesquisa (somente leitura para este núcleo).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    /// Identificador do dataset
    pub id: Uuid,

    /// Título de exibição
    pub title: String,

    /// Nome livre do provedor (ex: "IBGE", "INEP")
    pub source: String,

    /// Fragmento de caminho da API do provedor, quando configurado
    pub api_endpoint: Option<String>,

    /// URL da fonte oficial
    pub source_url: Option<String>,

    /// Categoria associada
    pub category: ResearchCategory,
}

/// Entrada do cache de dados de pesquisa.
///
/// Criada na primeira busca bem-sucedida para uma tripla
/// `(dataset_id, region, period)`; sobrescrita (dados + timestamp) a cada
/// busca subsequente; nunca removida por este núcleo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Dataset associado
    pub dataset_id: Uuid,

    /// Região da coleta
    pub region: String,

    /// Período de referência
    pub period: String,

    /// Pontos de dados armazenados (jsonb)
    pub data: Vec<DataPoint>,

    /// Momento da última atualização
    pub last_updated: DateTime<Utc>,
}

impl CacheEntry {
    /// Verifica se a entrada ainda é válida para o TTL dado.
    ///
    /// Uma entrada mais nova que o TTL curto-circuita a busca remota.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl_hours: i64) -> bool {
        now.signed_duration_since(self.last_updated) < chrono::Duration::hours(ttl_hours)
    }
}
