//! Endpoint de dados de pesquisa.
//!
//! Resolve o dataset solicitado, serve do cache quando fresco e, caso
//! contrário, busca na fonte (SIDRA, INEP ou síntese por categoria) e
//! grava o resultado para as próximas 24 horas.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use prodados_core::types::{DataPoint, DatasetDescriptor};
use prodados_data::provider::inep::ideb_sample_points;
use prodados_data::sample::sample_by_category;

use prodados_core::error::ProdadosError;

use crate::error::{domain_error, internal_error, ApiResult};
use crate::repository::{DatasetRepository, ResearchDataRepository};
use crate::state::AppState;

/// Região padrão quando a requisição não especifica uma.
fn default_region() -> String {
    "Brasil".to_string()
}

/// Corpo da requisição de busca de dataset.
#[derive(Debug, Deserialize)]
pub struct FetchResearchDataRequest {
    /// Identificador do dataset cadastrado
    #[serde(rename = "datasetId")]
    pub dataset_id: uuid::Uuid,

    /// Região de interesse (padrão: "Brasil")
    #[serde(default = "default_region")]
    pub region: String,
}

/// Resumo do dataset na resposta.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: uuid::Uuid,
    pub title: String,
    pub source: String,
    pub category: String,
}

impl From<&DatasetDescriptor> for DatasetSummary {
    fn from(descriptor: &DatasetDescriptor) -> Self {
        Self {
            id: descriptor.id,
            title: descriptor.title.clone(),
            source: descriptor.source.clone(),
            category: descriptor.category.name.clone(),
        }
    }
}

/// Resposta da busca de dataset.
#[derive(Debug, Serialize, Deserialize)]
pub struct FetchResearchDataResponse {
    pub success: bool,

    pub dataset: DatasetSummary,

    /// Pontos de dados normalizados
    pub data: Vec<DataPoint>,

    pub count: usize,

    pub region: String,

    /// Se a resposta veio do cache sem consultar a fonte
    pub cached: bool,

    /// Horário da última atualização (ISO 8601)
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

/// Busca os dados de um dataset, com cache de 24 horas.
///
/// Fluxo: resolve o dataset, serve do cache se a entrada tiver menos
/// de 24 horas, senão despacha pela fonte cadastrada, sintetiza por
/// categoria quando a fonte não retorna nada e grava o resultado.
///
/// POST /api/v1/research-data/fetch
pub async fn fetch_research_data(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FetchResearchDataRequest>,
) -> ApiResult<Json<FetchResearchDataResponse>> {
    let pool = state
        .db_pool
        .as_ref()
        .ok_or_else(|| internal_error("Banco de dados não configurado"))?;

    // Resolução do dataset
    let descriptor = DatasetRepository::find_by_id(pool, request.dataset_id)
        .await
        .map_err(|e| domain_error(ProdadosError::Database(e.to_string())))?
        .ok_or_else(|| {
            domain_error(ProdadosError::DatasetNotFound(request.dataset_id.to_string()))
        })?;

    // Curto-circuito de frescor: entrada com menos de 24h dispensa a fonte
    match ResearchDataRepository::find_latest(pool, descriptor.id, &request.region).await {
        Ok(Some(entry)) if entry.is_fresh(chrono::Utc::now(), state.cache.ttl_hours) => {
            info!(
                dataset_id = %descriptor.id,
                region = %request.region,
                "Servindo do cache"
            );
            let count = entry.data.len();
            return Ok(Json(FetchResearchDataResponse {
                success: true,
                dataset: DatasetSummary::from(&descriptor),
                data: entry.data,
                count,
                region: request.region,
                cached: true,
                last_updated: entry.last_updated.to_rfc3339(),
            }));
        }
        Ok(_) => {}
        // Falha de leitura vira cache miss, mas nunca silenciosa
        Err(e) => {
            warn!(
                erro = %e,
                dataset_id = %descriptor.id,
                "Falha na leitura do cache, buscando na fonte"
            );
        }
    }

    // Despacho pela fonte cadastrada
    let mut points = dispatch_source(&state, &descriptor, &request.region).await;

    // Fonte vazia: síntese por categoria garante resposta não vazia
    if points.is_empty() {
        points = sample_by_category(&descriptor.category.slug, &request.region);
    }

    let period = cache_period(&points);

    // Gravação best-effort: falha de cache não invalida a resposta
    let last_updated = match ResearchDataRepository::upsert(
        pool,
        descriptor.id,
        &request.region,
        &period,
        &points,
    )
    .await
    {
        Ok(ts) => ts,
        Err(e) => {
            warn!(erro = %e, dataset_id = %descriptor.id, "Falha ao gravar cache");
            chrono::Utc::now()
        }
    };

    info!(
        dataset_id = %descriptor.id,
        region = %request.region,
        count = points.len(),
        "Dataset atualizado"
    );

    let count = points.len();
    Ok(Json(FetchResearchDataResponse {
        success: true,
        dataset: DatasetSummary::from(&descriptor),
        data: points,
        count,
        region: request.region,
        cached: false,
        last_updated: last_updated.to_rfc3339(),
    }))
}

/// Período representativo da gravação no cache.
///
/// O primeiro ponto define o período; lista vazia cai no rótulo fixo
/// "2024".
fn cache_period(points: &[DataPoint]) -> String {
    points
        .first()
        .map(|p| p.period.clone())
        .unwrap_or_else(|| "2024".to_string())
}

/// Despacha a coleta pela fonte do dataset.
///
/// - "IBGE" com `api_endpoint`: API SIDRA (falha vira lista vazia)
/// - "INEP": pontos IDEB curados
/// - demais fontes: síntese pela categoria
async fn dispatch_source(
    state: &AppState,
    descriptor: &DatasetDescriptor,
    region: &str,
) -> Vec<DataPoint> {
    match (descriptor.source.as_str(), descriptor.api_endpoint.as_deref()) {
        ("IBGE", Some(endpoint)) => {
            match state
                .sidra
                .fetch_data_points(
                    endpoint,
                    region,
                    descriptor.source_url.as_deref(),
                    state.cache.max_rows,
                )
                .await
            {
                Ok(points) => points,
                Err(e) => {
                    warn!(
                        erro = %e,
                        dataset_id = %descriptor.id,
                        "Falha na API SIDRA, usando síntese"
                    );
                    Vec::new()
                }
            }
        }
        ("INEP", _) => ideb_sample_points(descriptor.source_url.as_deref()),
        _ => sample_by_category(&descriptor.category.slug, region),
    }
}

/// Roteador de dados de pesquisa.
pub fn research_router() -> Router<Arc<AppState>> {
    Router::new().route("/fetch", post(fetch_research_data))
}
