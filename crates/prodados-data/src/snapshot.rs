//! Snapshot de indicadores econômicos nacionais.
//!
//! Quatro indicadores independentes são buscados concorrentemente e
//! normalizados para [`IndicatorRecord`]. Falha em um indicador descarta
//! apenas aquele indicador; o snapshot devolve os sobreviventes.
//!
//! | Indicador | Fonte | Agregado/Variável | Polaridade |
//! |---|---|---|---|
//! | IPCA | IBGE | 1737 / 63 | direta |
//! | PIM-PF | IBGE | 8888 / 11600 | direta |
//! | PNAD Contínua | IBGE | 4099 / 4099 | invertida |
//! | Confiança do Consumidor | FGV | sintético | — |

use tracing::{info, warn};

use prodados_core::types::{DataOrigin, IndicatorRecord, Trend, TrendPolarity};

use crate::error::DataError;
use crate::format::periodo_atual;
use crate::provider::{fgv, AgregadosClient};

/// Busca o IPCA acumulado (agregado 1737, variável 63, últimos 12 meses).
async fn fetch_ipca(client: &AgregadosClient) -> Result<IndicatorRecord, DataError> {
    let serie = client.fetch_series(1737, "-12", 63).await?;
    let (previous, latest) = AgregadosClient::last_two(&serie)?;

    Ok(IndicatorRecord {
        title: "Índice Nacional de Preços ao Consumidor (IPCA)".to_string(),
        source: "IBGE".to_string(),
        date: periodo_atual(),
        value: format!("{:.2}%", latest),
        trend: Trend::from_comparison(latest, previous, TrendPolarity::Direct),
        description:
            "Inflação acumulada em 12 meses mantém-se dentro da meta estabelecida pelo Banco Central."
                .to_string(),
        origin: DataOrigin::Live,
    })
}

/// Busca a produção industrial (PIM-PF, agregado 8888, variável 11600).
async fn fetch_pim(client: &AgregadosClient) -> Result<IndicatorRecord, DataError> {
    let serie = client.fetch_series(8888, "-6", 11600).await?;
    let (previous, latest) = AgregadosClient::last_two(&serie)?;

    // Variação exibida sempre com sinal quando positiva
    let value = if latest > 0.0 {
        format!("+{:.1}%", latest)
    } else {
        format!("{:.1}%", latest)
    };

    Ok(IndicatorRecord {
        title: "Pesquisa Industrial Mensal (PIM-PF)".to_string(),
        source: "IBGE".to_string(),
        date: periodo_atual(),
        value,
        trend: Trend::from_comparison(latest, previous, TrendPolarity::Direct),
        description: "Produção industrial apresenta variação em relação ao mês anterior."
            .to_string(),
        origin: DataOrigin::Live,
    })
}

/// Busca a taxa de desocupação (PNAD Contínua, agregado 4099).
///
/// Polaridade invertida: queda no desemprego é leitura positiva.
async fn fetch_pnad(client: &AgregadosClient) -> Result<IndicatorRecord, DataError> {
    let serie = client.fetch_series(4099, "-6", 4099).await?;
    let (previous, latest) = AgregadosClient::last_two(&serie)?;

    Ok(IndicatorRecord {
        title: "Taxa de Desocupação (PNAD Contínua)".to_string(),
        source: "IBGE".to_string(),
        date: periodo_atual(),
        value: format!("{:.1}%", latest),
        trend: Trend::from_comparison(latest, previous, TrendPolarity::Inverted),
        description:
            "Taxa de desemprego com base na Pesquisa Nacional por Amostra de Domicílios Contínua."
                .to_string(),
        origin: DataOrigin::Live,
    })
}

/// Busca os quatro indicadores concorrentemente.
///
/// Indicadores que falham são descartados com log de aviso; a lista
/// resultante contém apenas os que tiveram sucesso (possivelmente vazia).
pub async fn fetch_indicator_snapshot(client: &AgregadosClient) -> Vec<IndicatorRecord> {
    info!("Iniciando busca de dados econômicos");

    let (ipca, pim, pnad) = tokio::join!(
        fetch_ipca(client),
        fetch_pim(client),
        fetch_pnad(client),
    );

    let fgv = fgv::consumer_confidence_record();

    let mut records = Vec::with_capacity(4);
    for (name, result) in [("IPCA", ipca), ("PIM", pim), ("PNAD", pnad)] {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!(indicador = name, erro = %e, "Indicador descartado do snapshot"),
        }
    }
    records.push(fgv);

    info!(count = records.len(), "Dados coletados");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serie_body(serie: &str) -> String {
        format!(
            r#"[{{"resultados": [{{"series": [{{"serie": {}}}]}}]}}]"#,
            serie
        )
    }

    #[tokio::test]
    async fn test_snapshot_completo() {
        let mut server = mockito::Server::new_async().await;

        let ipca = server
            .mock(
                "GET",
                "/api/v3/agregados/1737/periodos/-12/variaveis/63?localidades=N1[all]",
            )
            .with_body(serie_body(r#"{"202506": "5.35", "202507": "5.23"}"#))
            .create_async()
            .await;
        let pim = server
            .mock(
                "GET",
                "/api/v3/agregados/8888/periodos/-6/variaveis/11600?localidades=N1[all]",
            )
            .with_body(serie_body(r#"{"202506": "-0.5", "202507": "1.2"}"#))
            .create_async()
            .await;
        let pnad = server
            .mock(
                "GET",
                "/api/v3/agregados/4099/periodos/-6/variaveis/4099?localidades=N1[all]",
            )
            .with_body(serie_body(r#"{"202501": "8.3", "202502": "8.0"}"#))
            .create_async()
            .await;

        let client = AgregadosClient::with_base_url(server.url(), 5).unwrap();
        let records = fetch_indicator_snapshot(&client).await;

        ipca.assert_async().await;
        pim.assert_async().await;
        pnad.assert_async().await;

        assert_eq!(records.len(), 4);

        let ipca = &records[0];
        assert_eq!(ipca.value, "5.23%");
        assert_eq!(ipca.trend, Trend::Down);
        assert_eq!(ipca.origin, DataOrigin::Live);

        let pim = &records[1];
        assert_eq!(pim.value, "+1.2%");
        assert_eq!(pim.trend, Trend::Up);

        // Desemprego caiu de 8.3 para 8.0: polaridade invertida => "up"
        let pnad = &records[2];
        assert_eq!(pnad.value, "8.0%");
        assert_eq!(pnad.trend, Trend::Up);

        assert_eq!(records[3].origin, DataOrigin::Synthetic);
    }

    #[tokio::test]
    async fn test_indicador_com_falha_e_descartado() {
        let mut server = mockito::Server::new_async().await;

        // Apenas IPCA responde; PIM e PNAD retornam 500
        server
            .mock(
                "GET",
                "/api/v3/agregados/1737/periodos/-12/variaveis/63?localidades=N1[all]",
            )
            .with_body(serie_body(r#"{"202506": "5.00", "202507": "5.10"}"#))
            .create_async()
            .await;
        server
            .mock(
                "GET",
                mockito::Matcher::Regex("/api/v3/agregados/(8888|4099)/.*".to_string()),
            )
            .with_status(500)
            .expect_at_least(2)
            .create_async()
            .await;

        let client = AgregadosClient::with_base_url(server.url(), 5).unwrap();
        let records = fetch_indicator_snapshot(&client).await;

        // IPCA + FGV sintético sobrevivem
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "IBGE");
        assert_eq!(records[0].trend, Trend::Up);
        assert_eq!(records[1].source, "FGV");
    }
}
