//! Cliente da API de agregados do IBGE (v3).
//!
//! Consulta séries temporais de variáveis agregadas
//! (`/api/v3/agregados/{agregado}/periodos/{periodos}/variaveis/{variavel}`)
//! usadas pelos indicadores econômicos: IPCA, PIM-PF e PNAD Contínua.
//!
//! # Ordenação de períodos
//!
//! A resposta traz a série como um mapa `{periodo: valor}`. A ordem de
//! iteração de um mapa não é contrato; a série é normalizada para pares
//! `(periodo, valor)` ordenados pelo identificador do período antes de
//! extrair os dois pontos mais recentes.
//!
//! # Uso
//!
//! ```rust,ignore
//! use prodados_data::provider::AgregadosClient;
//!
//! let client = AgregadosClient::new()?;
//! let serie = client.fetch_series(1737, "-12", 63).await?;
//! let (periodo, valor) = serie.last().unwrap();
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::error::DataError;

/// URL base pública da API de agregados.
pub const DEFAULT_BASE_URL: &str = "https://servicodados.ibge.gov.br";

/// Timeout padrão por requisição (segundos).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Cliente da API de agregados do IBGE.
#[derive(Clone)]
pub struct AgregadosClient {
    client: reqwest::Client,
    base_url: String,
}

/// Resposta bruta da API de agregados.
#[derive(Debug, Deserialize)]
struct RawAggregate {
    resultados: Vec<RawResultado>,
}

#[derive(Debug, Deserialize)]
struct RawResultado {
    series: Vec<RawSeries>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    /// Mapa {periodo: valor}; valores vêm como string ("4.23", "...", "-")
    serie: HashMap<String, String>,
}

impl AgregadosClient {
    /// Cria um cliente com a URL base pública e timeout padrão.
    pub fn new() -> Result<Self, DataError> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
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

    /// Busca uma série temporal e a devolve ordenada cronologicamente.
    ///
    /// # Arguments
    /// * `aggregate` - id do agregado (ex: 1737 para o IPCA)
    /// * `periods` - especificador de períodos (ex: "-12" = últimos 12)
    /// * `variable` - id da variável (ex: 63)
    ///
    /// # Returns
    /// Pares `(periodo, valor)` ordenados do mais antigo para o mais
    /// recente. Valores não numéricos ("...", "-") são descartados.
    pub async fn fetch_series(
        &self,
        aggregate: u32,
        periods: &str,
        variable: u32,
    ) -> Result<Vec<(String, f64)>, DataError> {
        let url = format!(
            "{}/api/v3/agregados/{}/periodos/{}/variaveis/{}?localidades=N1[all]",
            self.base_url, aggregate, periods, variable
        );

        debug!(aggregate = aggregate, variable = variable, url = %url, "Requisição à API de agregados");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DataError::Api {
                endpoint: format!("agregados/{}", aggregate),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(DataError::Api {
                endpoint: format!("agregados/{}", aggregate),
                message: format!("status {}", status),
            });
        }

        let payload: Vec<RawAggregate> = response
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let serie = payload
            .first()
            .and_then(|a| a.resultados.first())
            .and_then(|r| r.series.first())
            .map(|s| &s.serie)
            .ok_or_else(|| {
                DataError::NoData(format!("agregado {} sem série na resposta", aggregate))
            })?;

        Ok(sort_series(serie))
    }

    /// Extrai os dois pontos mais recentes de uma série ordenada.
    ///
    /// # Returns
    /// `(anterior, mais_recente)`.
    pub fn last_two(serie: &[(String, f64)]) -> Result<(f64, f64), DataError> {
        if serie.len() < 2 {
            return Err(DataError::NoData(format!(
                "série com {} ponto(s), mínimo 2",
                serie.len()
            )));
        }

        let latest = serie[serie.len() - 1].1;
        let previous = serie[serie.len() - 2].1;
        Ok((previous, latest))
    }
}

/// Normaliza o mapa da série em pares ordenados por período.
///
/// Identificadores de período do IBGE são numéricos ("202401", "2024");
/// a ordenação numérica é usada quando possível, com comparação lexical
/// como último recurso.
fn sort_series(serie: &HashMap<String, String>) -> Vec<(String, f64)> {
    let mut points: Vec<(String, f64)> = serie
        .iter()
        .filter_map(|(period, value)| {
            let parsed = value.trim().parse::<f64>().ok()?;
            Some((period.clone(), parsed))
        })
        .collect();

    points.sort_by(|a, b| match (a.0.parse::<u64>(), b.0.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.0.cmp(&b.0),
    });

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serie_de(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_sort_series_ordena_por_periodo() {
        // A ordem de inserção no mapa é irrelevante
        let serie = serie_de(&[("202403", "4.5"), ("202401", "4.1"), ("202402", "4.3")]);
        let sorted = sort_series(&serie);

        assert_eq!(
            sorted,
            vec![
                ("202401".to_string(), 4.1),
                ("202402".to_string(), 4.3),
                ("202403".to_string(), 4.5),
            ]
        );
    }

    #[test]
    fn test_sort_series_descarta_valores_nao_numericos() {
        let serie = serie_de(&[("202401", "4.1"), ("202402", "..."), ("202403", "-")]);
        let sorted = sort_series(&serie);
        assert_eq!(sorted.len(), 1);
    }

    #[test]
    fn test_last_two() {
        let serie = vec![
            ("202401".to_string(), 8.0),
            ("202402".to_string(), 8.3),
        ];
        let (previous, latest) = AgregadosClient::last_two(&serie).unwrap();
        assert_eq!(previous, 8.0);
        assert_eq!(latest, 8.3);
    }

    #[test]
    fn test_last_two_serie_curta() {
        let serie = vec![("202401".to_string(), 8.0)];
        assert!(AgregadosClient::last_two(&serie).is_err());
    }

    #[tokio::test]
    async fn test_fetch_series_mock() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"[{
            "resultados": [{
                "series": [{
                    "serie": {"202312": "4.62", "202401": "4.51", "202402": "4.50"}
                }]
            }]
        }]"#;

        let mock = server
            .mock(
                "GET",
                "/api/v3/agregados/1737/periodos/-12/variaveis/63?localidades=N1[all]",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = AgregadosClient::with_base_url(server.url(), 5).unwrap();
        let serie = client.fetch_series(1737, "-12", 63).await.unwrap();

        mock.assert_async().await;
        assert_eq!(serie.len(), 3);
        // Ordenado cronologicamente, independente da ordem do mapa
        assert_eq!(serie[0].0, "202312");
        assert_eq!(serie[2].0, "202402");
    }

    #[tokio::test]
    async fn test_fetch_series_resposta_malformada() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/api/v3/agregados/4099/periodos/-6/variaveis/4099?localidades=N1[all]",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"resultados": []}]"#)
            .create_async()
            .await;

        let client = AgregadosClient::with_base_url(server.url(), 5).unwrap();
        let result = client.fetch_series(4099, "-6", 4099).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(DataError::NoData(_))));
    }

    #[tokio::test]
    async fn test_fetch_series_erro_http() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/api/v3/agregados/8888/periodos/-6/variaveis/11600?localidades=N1[all]",
            )
            .with_status(500)
            .create_async()
            .await;

        let client = AgregadosClient::with_base_url(server.url(), 5).unwrap();
        let result = client.fetch_series(8888, "-6", 11600).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(DataError::Api { .. })));
    }

    /// Teste de integração contra a API pública do IBGE.
    /// Executar com: cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn test_fetch_series_ipca_integration() {
        let client = AgregadosClient::new().unwrap();
        let serie = client.fetch_series(1737, "-12", 63).await.unwrap();

        assert!(serie.len() >= 2, "IPCA deve ter ao menos 2 pontos");
        let (previous, latest) = AgregadosClient::last_two(&serie).unwrap();
        assert!(latest.is_finite());
        assert!(previous.is_finite());
    }
}
