//! Cliente da API SIDRA do IBGE (`/values`).
//!
//! A API SIDRA devolve uma estrutura tabular: um array externo em que o
//! primeiro elemento é o cabeçalho e os demais são linhas. Cada linha é
//! mapeada posicionalmente para um [`DataPoint`]
//! (`região, nome, valor, unidade, período`), com a linha bruta preservada
//! em `metadata.raw_data`. O resultado é limitado para conter o tamanho da
//! resposta.

use std::time::Duration;
use tracing::debug;

use prodados_core::types::{DataOrigin, DataPoint, PointMetadata};

use crate::error::DataError;

/// URL base pública da API SIDRA.
pub const DEFAULT_BASE_URL: &str = "https://apisidra.ibge.gov.br";

/// Cliente da API SIDRA.
#[derive(Clone)]
pub struct SidraClient {
    client: reqwest::Client,
    base_url: String,
}

impl SidraClient {
    /// Cria um cliente com a URL base pública e timeout padrão.
    pub fn new() -> Result<Self, DataError> {
        Self::with_base_url(DEFAULT_BASE_URL, super::ibge_agregados::DEFAULT_TIMEOUT_SECS)
    }

    /// Cria um cliente com URL base e timeout customizados (teste/config).
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, DataError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DataError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Busca uma tabela SIDRA e normaliza as linhas em pontos de dados.
    ///
    /// # Arguments
    /// * `api_endpoint` - fragmento de caminho do dataset (ex: "/t/6579/n1/all/v/all/p/last")
    /// * `default_region` - região usada quando a linha não traz uma
    /// * `source_url` - URL da fonte, propagada nos metadados
    /// * `max_rows` - limite de linhas normalizadas
    pub async fn fetch_data_points(
        &self,
        api_endpoint: &str,
        default_region: &str,
        source_url: Option<&str>,
        max_rows: usize,
    ) -> Result<Vec<DataPoint>, DataError> {
        let url = format!("{}/values{}", self.base_url, api_endpoint);

        debug!(url = %url, "Requisição à API SIDRA");

        let response = self.client.get(&url).send().await.map_err(|e| {
            DataError::Api {
                endpoint: api_endpoint.to_string(),
                message: e.to_string(),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(DataError::Api {
                endpoint: api_endpoint.to_string(),
                message: format!("status {}", status),
            });
        }

        let rows: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        if rows.len() <= 1 {
            return Ok(Vec::new());
        }

        // Primeira linha é cabeçalho
        let points: Vec<DataPoint> = rows[1..]
            .iter()
            .take(max_rows)
            .map(|row| map_row(row, default_region, source_url))
            .collect();

        debug!(count = points.len(), "Linhas SIDRA normalizadas");
        Ok(points)
    }
}

/// Mapeia uma linha tabular posicionalmente para um `DataPoint`.
///
/// Colunas fixas: `região(0), nome(1), valor(2), unidade(3), período(4)`.
/// Células ausentes recebem os mesmos padrões da origem; a linha inteira
/// fica preservada em `metadata.raw_data`.
fn map_row(row: &serde_json::Value, default_region: &str, source_url: Option<&str>) -> DataPoint {
    DataPoint {
        region: cell(row, 0).unwrap_or_else(|| default_region.to_string()),
        name: cell(row, 1).unwrap_or_else(|| "Sem nome".to_string()),
        value: cell(row, 2).unwrap_or_else(|| "0".to_string()),
        unit: cell(row, 3).unwrap_or_default(),
        period: cell(row, 4).unwrap_or_else(|| "2024".to_string()),
        origin: DataOrigin::Live,
        metadata: PointMetadata {
            raw_data: Some(row.clone()),
            source_url: source_url.map(str::to_string),
            ..Default::default()
        },
    }
}

/// Extrai a célula de índice `idx` de uma linha-array como string.
fn cell(row: &serde_json::Value, idx: usize) -> Option<String> {
    let value = row.as_array()?.get(idx)?;
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_row_posicional() {
        let row = json!(["Ceará", "PIB per capita", "20.025", "R$", "2023", "extra"]);
        let point = map_row(&row, "Brasil", Some("https://sidra.ibge.gov.br"));

        assert_eq!(point.region, "Ceará");
        assert_eq!(point.name, "PIB per capita");
        assert_eq!(point.value, "20.025");
        assert_eq!(point.unit, "R$");
        assert_eq!(point.period, "2023");
        assert_eq!(point.origin, DataOrigin::Live);
        assert!(point.metadata.raw_data.is_some());
        assert_eq!(
            point.metadata.source_url.as_deref(),
            Some("https://sidra.ibge.gov.br")
        );
    }

    #[test]
    fn test_map_row_celulas_ausentes() {
        let row = json!(["", "Indicador"]);
        let point = map_row(&row, "Brasil", None);

        assert_eq!(point.region, "Brasil");
        assert_eq!(point.name, "Indicador");
        assert_eq!(point.value, "0");
        assert_eq!(point.unit, "");
        assert_eq!(point.period, "2024");
    }

    #[tokio::test]
    async fn test_fetch_data_points_pula_cabecalho_e_limita() {
        let mut server = mockito::Server::new_async().await;

        // Cabeçalho + 5 linhas, limite 3
        let mut rows = vec![json!(["Território", "Variável", "Valor", "Unidade", "Ano"])];
        for i in 0..5 {
            rows.push(json!([
                "Brasil",
                format!("Indicador {}", i),
                "1.0",
                "%",
                "2024"
            ]));
        }
        let body = serde_json::to_string(&rows).unwrap();

        let mock = server
            .mock("GET", "/values/t/6579/n1/all")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = SidraClient::with_base_url(server.url(), 5).unwrap();
        let points = client
            .fetch_data_points("/t/6579/n1/all", "Brasil", None, 3)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].name, "Indicador 0");
    }

    #[tokio::test]
    async fn test_fetch_data_points_somente_cabecalho() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/values/t/1/n1/all")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[["Território", "Valor"]]"#)
            .create_async()
            .await;

        let client = SidraClient::with_base_url(server.url(), 5).unwrap();
        let points = client
            .fetch_data_points("/t/1/n1/all", "Brasil", None, 1000)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(points.is_empty());
    }
}
