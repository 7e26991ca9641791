//! Formatação de rótulos e valores no padrão pt-BR.

use chrono::{Datelike, Utc};

const MESES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Rótulo de período por extenso para mês/ano dados (ex: "agosto de 2026").
pub fn periodo_por_extenso(month: u32, year: i32) -> String {
    let nome = MESES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("janeiro");
    format!("{} de {}", nome, year)
}

/// Rótulo de período do mês corrente.
pub fn periodo_atual() -> String {
    let now = Utc::now();
    periodo_por_extenso(now.month(), now.year())
}

/// Ano corrente como string (período padrão da síntese de exemplos).
pub fn ano_atual() -> String {
    Utc::now().year().to_string()
}

/// Ano anterior como string.
pub fn ano_anterior() -> String {
    (Utc::now().year() - 1).to_string()
}
