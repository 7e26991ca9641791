//! Endpoint de indicadores econômicos.
//!
//! Agrega os indicadores de conjuntura (IPCA, produção industrial,
//! desemprego e confiança do consumidor) em uma única resposta.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use prodados_core::types::IndicatorRecord;
use prodados_data::snapshot::fetch_indicator_snapshot;

use crate::state::AppState;

/// Resposta do endpoint de indicadores econômicos.
#[derive(Debug, Serialize, Deserialize)]
pub struct EconomicDataResponse {
    pub success: bool,

    /// Indicadores na ordem de coleta (IPCA, PIM, PNAD, FGV)
    pub data: Vec<IndicatorRecord>,

    /// Horário da coleta (ISO 8601)
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

/// Coleta e retorna o retrato atual dos indicadores.
///
/// Indicadores cuja fonte falhar são omitidos da resposta; a chamada
/// só retorna erro se nenhuma coleta for possível (o que não ocorre,
/// pois o indicador FGV é sempre sintetizado).
///
/// GET /api/v1/economic-data
/// POST /api/v1/economic-data
pub async fn fetch_economic_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let records = fetch_indicator_snapshot(&state.agregados).await;

    info!(count = records.len(), "Indicadores econômicos coletados");

    Json(EconomicDataResponse {
        success: true,
        data: records,
        last_updated: chrono::Utc::now().to_rfc3339(),
    })
}

/// Roteador de indicadores econômicos.
pub fn economic_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(fetch_economic_data).post(fetch_economic_data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodados_core::types::{DataOrigin, Trend};

    #[test]
    fn test_economic_data_response_serializacao() {
        let response = EconomicDataResponse {
            success: true,
            data: vec![IndicatorRecord {
                title: "IPCA".to_string(),
                source: "IBGE".to_string(),
                date: "agosto de 2026".to_string(),
                value: "5.23%".to_string(),
                trend: Trend::Down,
                description: "Índice de Preços ao Consumidor Amplo".to_string(),
                origin: DataOrigin::Live,
            }],
            last_updated: "2026-08-30T12:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0]["trend"], "down");
        // Contrato de resposta usa camelCase
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("last_updated").is_none());
    }
}
