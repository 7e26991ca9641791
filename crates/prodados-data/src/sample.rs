//! Síntese de dados de exemplo por categoria.
//!
//! Datasets sem provedor configurado recebem 1-2 pontos sintéticos por
//! categoria, com valores distintos para as três regiões conhecidas
//! (Brasil, Ceará, Fortaleza). Qualquer outra região cai no marcador de
//! último recurso (`metadata.placeholder = true`, valor "0").

use prodados_core::types::{DataOrigin, DataPoint, PointMetadata};

use crate::format::{ano_anterior, ano_atual};

/// Valores de um indicador de exemplo para as três regiões conhecidas.
struct SampleIndicator {
    name: &'static str,
    unit: &'static str,
    /// (Brasil, Ceará, Fortaleza)
    values: (&'static str, &'static str, &'static str),
    /// Período: ano corrente, ano anterior ou fixo
    period: SamplePeriod,
    /// Meta oficial, quando o indicador tem uma
    target: Option<&'static str>,
    estimated: bool,
}

enum SamplePeriod {
    CurrentYear,
    PreviousYear,
    Fixed(&'static str),
}

impl SamplePeriod {
    fn resolve(&self) -> String {
        match self {
            Self::CurrentYear => ano_atual(),
            Self::PreviousYear => ano_anterior(),
            Self::Fixed(s) => s.to_string(),
        }
    }
}

/// Tabela de indicadores de exemplo por slug de categoria.
fn indicators_for(slug: &str) -> Option<&'static [SampleIndicator]> {
    const DEMOGRAFIA: &[SampleIndicator] = &[
        SampleIndicator {
            name: "População Total",
            unit: "habitantes",
            values: ("215.000.000", "9.240.000", "2.700.000"),
            period: SamplePeriod::CurrentYear,
            target: None,
            estimated: true,
        },
        SampleIndicator {
            name: "Densidade Demográfica",
            unit: "hab/km²",
            values: ("25,06", "62,07", "2.651,35"),
            period: SamplePeriod::CurrentYear,
            target: None,
            estimated: true,
        },
    ];

    const ECONOMIA: &[SampleIndicator] = &[
        SampleIndicator {
            name: "PIB",
            unit: "R$ (milhões)",
            values: ("10.900.000.000.000", "185.000.000.000", "72.000.000.000"),
            period: SamplePeriod::PreviousYear,
            target: None,
            estimated: true,
        },
        SampleIndicator {
            name: "PIB per capita",
            unit: "R$",
            values: ("50.700", "20.025", "26.667"),
            period: SamplePeriod::PreviousYear,
            target: None,
            estimated: true,
        },
    ];

    const EDUCACAO: &[SampleIndicator] = &[
        SampleIndicator {
            name: "IDEB - Anos Iniciais",
            unit: "índice",
            values: ("6.0", "6.8", "6.2"),
            period: SamplePeriod::Fixed("2023"),
            target: Some("6.5"),
            estimated: false,
        },
        SampleIndicator {
            name: "Taxa de Alfabetização",
            unit: "%",
            values: ("93.2", "82.4", "95.8"),
            period: SamplePeriod::CurrentYear,
            target: None,
            estimated: true,
        },
    ];

    const SAUDE: &[SampleIndicator] = &[
        SampleIndicator {
            name: "Expectativa de Vida",
            unit: "anos",
            values: ("76.8", "74.2", "77.5"),
            period: SamplePeriod::CurrentYear,
            target: None,
            estimated: true,
        },
        SampleIndicator {
            name: "Mortalidade Infantil",
            unit: "por 1000 nascidos vivos",
            values: ("12.4", "13.8", "10.2"),
            period: SamplePeriod::CurrentYear,
            target: None,
            estimated: true,
        },
    ];

    match slug {
        "demografia" => Some(DEMOGRAFIA),
        "economia" => Some(ECONOMIA),
        "educacao" => Some(EDUCACAO),
        "saude" => Some(SAUDE),
        _ => None,
    }
}

/// Gera pontos de exemplo para a categoria e região dadas.
///
/// Slug desconhecido ou região fora da tabela devolvem um único ponto
/// marcador ("Dados não disponíveis", valor "0").
pub fn sample_by_category(slug: &str, region: &str) -> Vec<DataPoint> {
    let Some(indicators) = indicators_for(slug) else {
        return vec![placeholder_point(region)];
    };

    let pick = |ind: &SampleIndicator| -> Option<&'static str> {
        match region {
            "Brasil" => Some(ind.values.0),
            "Ceará" => Some(ind.values.1),
            "Fortaleza" => Some(ind.values.2),
            _ => None,
        }
    };

    let points: Vec<DataPoint> = indicators
        .iter()
        .filter_map(|ind| {
            let value = pick(ind)?;
            Some(DataPoint {
                region: region.to_string(),
                name: ind.name.to_string(),
                value: value.to_string(),
                unit: ind.unit.to_string(),
                period: ind.period.resolve(),
                origin: DataOrigin::Synthetic,
                metadata: PointMetadata {
                    target: ind.target.map(str::to_string),
                    estimated: ind.estimated.then_some(true),
                    ..Default::default()
                },
            })
        })
        .collect();

    if points.is_empty() {
        return vec![placeholder_point(region)];
    }

    points
}

/// Ponto marcador de último recurso.
fn placeholder_point(region: &str) -> DataPoint {
    DataPoint {
        region: region.to_string(),
        name: "Dados não disponíveis".to_string(),
        value: "0".to_string(),
        unit: String::new(),
        period: ano_atual(),
        origin: DataOrigin::Placeholder,
        metadata: PointMetadata {
            placeholder: Some(true),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categoria_conhecida_regioes_conhecidas() {
        for region in ["Brasil", "Ceará", "Fortaleza"] {
            let points = sample_by_category("demografia", region);
            assert_eq!(points.len(), 2, "região {}", region);
            assert!(points.iter().all(|p| p.origin == DataOrigin::Synthetic));
            assert!(points.iter().all(|p| p.region == region));
        }
    }

    #[test]
    fn test_valores_distintos_por_regiao() {
        let brasil = sample_by_category("economia", "Brasil");
        let ceara = sample_by_category("economia", "Ceará");

        assert_eq!(brasil[0].name, "PIB");
        assert_eq!(brasil[0].value, "10.900.000.000.000");
        assert_eq!(ceara[0].value, "185.000.000.000");
    }

    #[test]
    fn test_regiao_desconhecida_vira_marcador() {
        let points = sample_by_category("educacao", "Acre");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, "0");
        assert_eq!(points[0].origin, DataOrigin::Placeholder);
        assert_eq!(points[0].metadata.placeholder, Some(true));
    }

    #[test]
    fn test_slug_desconhecido_vira_marcador() {
        let points = sample_by_category("meio-ambiente", "Brasil");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "Dados não disponíveis");
        assert_eq!(points[0].metadata.placeholder, Some(true));
    }

    #[test]
    fn test_ideb_tem_meta() {
        let points = sample_by_category("educacao", "Brasil");
        assert_eq!(points[0].metadata.target.as_deref(), Some("6.5"));
        assert_eq!(points[0].period, "2023");
    }
}
