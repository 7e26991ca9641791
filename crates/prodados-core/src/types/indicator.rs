//! Registros de indicadores econômicos.
//!
//! Um `IndicatorRecord` é o formato comum para o qual cada indicador
//! (IPCA, PIM-PF, PNAD Contínua, confiança do consumidor) é normalizado.
//! Registros são transientes: construídos a cada snapshot, nunca
//! persistidos.

use serde::{Deserialize, Serialize};

use crate::types::DataOrigin;

/// Direção da tendência de um indicador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Leitura positiva (alta, ou queda em indicador invertido)
    Up,
    /// Leitura negativa
    Down,
}

/// Polaridade da comparação de tendência.
///
/// Para a maioria dos indicadores um valor maior é reportado como alta.
/// Para a taxa de desocupação a polaridade é invertida: queda no
/// desemprego é leitura positiva.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPolarity {
    /// Maior valor => "up"
    Direct,
    /// Menor valor => "up" (ex: taxa de desocupação)
    Inverted,
}

impl Trend {
    /// Calcula a tendência comparando o valor mais recente com o anterior.
    pub fn from_comparison(latest: f64, previous: f64, polarity: TrendPolarity) -> Self {
        let rising = latest > previous;
        match polarity {
            TrendPolarity::Direct => {
                if rising {
                    Self::Up
                } else {
                    Self::Down
                }
            }
            TrendPolarity::Inverted => {
                if latest < previous {
                    Self::Up
                } else {
                    Self::Down
                }
            }
        }
    }
}

/// Registro normalizado de um indicador econômico.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorRecord {
    /// Título do indicador (ex: "Índice Nacional de Preços ao Consumidor (IPCA)")
    pub title: String,

    /// Fonte (IBGE, FGV)
    pub source: String,

    /// Rótulo do período por extenso (ex: "agosto de 2026")
    pub date: String,

    /// Valor formatado (ex: "4.23%")
    pub value: String,

    /// Tendência em relação ao período anterior
    pub trend: Trend,

    /// Frase descritiva fixa do indicador
    pub description: String,

    /// Origem do dado (real ou sintético)
    pub origin: DataOrigin,
}
