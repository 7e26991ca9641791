//! Pontos curados do IDEB (INEP).
//!
//! O INEP não expõe uma API tabular genérica; datasets com essa fonte
//! recebem um conjunto fixo de pontos estruturados segundo o IDEB real,
//! marcados como sintéticos até existir integração direta.

use prodados_core::types::{DataOrigin, DataPoint, PointMetadata};

const NOME_IDEB: &str = "IDEB - Anos Iniciais do Ensino Fundamental - Rede Pública";

/// Pontos curados do IDEB 2023 (Brasil, Ceará e Fortaleza).
pub fn ideb_sample_points(source_url: Option<&str>) -> Vec<DataPoint> {
    let ponto = |region: &str, value: &str, target: &str, previous: &str| DataPoint {
        region: region.to_string(),
        name: NOME_IDEB.to_string(),
        value: value.to_string(),
        unit: "índice".to_string(),
        period: "2023".to_string(),
        origin: DataOrigin::Synthetic,
        metadata: PointMetadata {
            target: Some(target.to_string()),
            previous_year: Some(previous.to_string()),
            source_url: source_url.map(str::to_string),
            ..Default::default()
        },
    };

    vec![
        ponto("Brasil", "6.0", "6.2", "5.9"),
        ponto("Ceará", "6.8", "6.5", "6.6"),
        ponto("Fortaleza", "6.2", "6.0", "6.0"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tres_regioes_curadas() {
        let points = ideb_sample_points(Some("https://www.gov.br/inep"));
        assert_eq!(points.len(), 3);

        let regioes: Vec<&str> = points.iter().map(|p| p.region.as_str()).collect();
        assert_eq!(regioes, vec!["Brasil", "Ceará", "Fortaleza"]);

        for point in &points {
            assert_eq!(point.origin, DataOrigin::Synthetic);
            assert!(point.metadata.target.is_some());
            assert!(point.metadata.previous_year.is_some());
        }
    }
}
