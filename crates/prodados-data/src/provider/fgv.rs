//! Substituto sintético do Índice de Confiança do Consumidor (FGV).
//!
//! A FGV não oferece API pública genérica para o índice; até existir uma
//! integração real, o registro é gerado dentro da faixa histórica do
//! indicador e marcado explicitamente como [`DataOrigin::Synthetic`] para
//! que consumidores não o confundam com medição real.

use rand::Rng;

use prodados_core::types::{DataOrigin, IndicatorRecord, Trend};

use crate::format::periodo_atual;

/// Faixa histórica plausível do índice (pontos).
const FAIXA_MIN: f64 = 85.0;
const FAIXA_MAX: f64 = 95.0;

/// Gera o registro sintético do índice de confiança do consumidor.
pub fn consumer_confidence_record() -> IndicatorRecord {
    let mut rng = rand::thread_rng();
    let value: f64 = rng.gen_range(FAIXA_MIN..FAIXA_MAX);
    let trend = if rng.gen_bool(0.5) {
        Trend::Up
    } else {
        Trend::Down
    };

    IndicatorRecord {
        title: "Índice de Confiança do Consumidor".to_string(),
        source: "FGV".to_string(),
        date: periodo_atual(),
        value: format!("{:.1}", value),
        trend,
        description: "Índice de confiança do consumidor medido pela Fundação Getúlio Vargas."
            .to_string(),
        origin: DataOrigin::Synthetic,
    }
}
