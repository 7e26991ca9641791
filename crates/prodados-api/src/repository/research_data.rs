//! Repository do cache de dados de pesquisa.
//!
//! A tabela `research_data` guarda uma entrada por tripla
//! `(dataset_id, region, period)` sob restrição UNIQUE composta
//! (ver `schema.sql`). A reconciliação é um upsert único: chamadas
//! concorrentes para a mesma tripla resultam em last-writer-wins sem
//! linhas duplicadas.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use prodados_core::types::{CacheEntry, DataPoint};

/// Linha da tabela `research_data`.
#[derive(Debug, FromRow)]
struct CacheRow {
    dataset_id: Uuid,
    region: String,
    period: String,
    data: serde_json::Value,
    last_updated: DateTime<Utc>,
}

impl CacheRow {
    fn into_entry(self) -> Result<CacheEntry, serde_json::Error> {
        Ok(CacheEntry {
            dataset_id: self.dataset_id,
            region: self.region,
            period: self.period,
            data: serde_json::from_value(self.data)?,
            last_updated: self.last_updated,
        })
    }
}

/// Repository do cache de dados de pesquisa.
pub struct ResearchDataRepository;

impl ResearchDataRepository {
    /// Busca a entrada mais recente para `(dataset_id, region)`.
    ///
    /// Usada pelo curto-circuito de frescor: uma entrada com menos de
    /// 24 horas dispensa a busca remota.
    pub async fn find_latest(
        pool: &PgPool,
        dataset_id: Uuid,
        region: &str,
    ) -> Result<Option<CacheEntry>, sqlx::Error> {
        let row: Option<CacheRow> = sqlx::query_as(
            r#"
            SELECT dataset_id, region, period, data, last_updated
            FROM research_data
            WHERE dataset_id = $1 AND region = $2
            ORDER BY last_updated DESC
            LIMIT 1
            "#,
        )
        .bind(dataset_id)
        .bind(region)
        .fetch_optional(pool)
        .await?;

        match row {
            Some(row) => match row.into_entry() {
                Ok(entry) => Ok(Some(entry)),
                // Payload ilegível conta como cache miss, não como falha
                Err(e) => {
                    debug!(erro = %e, "Entrada de cache ilegível, tratando como miss");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Grava (ou sobrescreve) a entrada da tripla `(dataset_id, region, period)`.
    ///
    /// Upsert sobre a restrição UNIQUE composta: se a linha existe, dados e
    /// timestamp são sobrescritos; senão, uma nova linha é inserida.
    ///
    /// # Returns
    /// O timestamp gravado.
    pub async fn upsert(
        pool: &PgPool,
        dataset_id: Uuid,
        region: &str,
        period: &str,
        points: &[DataPoint],
    ) -> Result<DateTime<Utc>, sqlx::Error> {
        let data = serde_json::to_value(points)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO research_data (dataset_id, region, period, data, last_updated)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (dataset_id, region, period) DO UPDATE SET
                data = EXCLUDED.data,
                last_updated = EXCLUDED.last_updated
            "#,
        )
        .bind(dataset_id)
        .bind(region)
        .bind(period)
        .bind(&data)
        .bind(now)
        .execute(pool)
        .await?;

        debug!(
            dataset_id = %dataset_id,
            region = region,
            period = period,
            count = points.len(),
            "Cache de pesquisa atualizado"
        );

        Ok(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodados_core::types::DataOrigin;
    use serde_json::json;

    #[test]
    fn test_cache_row_into_entry() {
        let row = CacheRow {
            dataset_id: Uuid::new_v4(),
            region: "Brasil".to_string(),
            period: "2024".to_string(),
            data: json!([{
                "region": "Brasil",
                "name": "População Total",
                "value": "215.000.000",
                "unit": "habitantes",
                "period": "2024",
                "origin": "synthetic",
                "metadata": {"estimated": true}
            }]),
            last_updated: Utc::now(),
        };

        let entry = row.into_entry().unwrap();
        assert_eq!(entry.data.len(), 1);
        assert_eq!(entry.data[0].origin, DataOrigin::Synthetic);
    }

    #[test]
    fn test_cache_row_payload_ilegivel() {
        let row = CacheRow {
            dataset_id: Uuid::new_v4(),
            region: "Brasil".to_string(),
            period: "2024".to_string(),
            data: json!({"não": "é uma lista"}),
            last_updated: Utc::now(),
        };

        assert!(row.into_entry().is_err());
    }

    /// Teste de integração contra um PostgreSQL real (requer schema.sql).
    /// Executar com: DATABASE_URL=... cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn test_upsert_idempotente_integration() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
        let pool = sqlx::PgPool::connect(&url).await.unwrap();

        // Dataset temporário (FK exige categoria e descritor)
        let category_id: Uuid =
            sqlx::query_scalar("SELECT id FROM research_categories WHERE slug = 'economia'")
                .fetch_one(&pool)
                .await
                .unwrap();
        let dataset_id: Uuid = sqlx::query_scalar(
            "INSERT INTO research_datasets (title, source, category_id) \
             VALUES ('Teste upsert', 'OUTRO', $1) RETURNING id",
        )
        .bind(category_id)
        .fetch_one(&pool)
        .await
        .unwrap();

        let points = vec![DataPoint {
            region: "Brasil".to_string(),
            name: "PIB".to_string(),
            value: "1".to_string(),
            unit: "R$".to_string(),
            period: "2024".to_string(),
            origin: DataOrigin::Synthetic,
            metadata: Default::default(),
        }];

        let first = ResearchDataRepository::upsert(&pool, dataset_id, "Brasil", "2024", &points)
            .await
            .unwrap();
        let second = ResearchDataRepository::upsert(&pool, dataset_id, "Brasil", "2024", &points)
            .await
            .unwrap();

        assert!(second >= first);

        // Uma única linha para a tripla, com o timestamp da segunda gravação
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM research_data \
             WHERE dataset_id = $1 AND region = 'Brasil' AND period = '2024'",
        )
        .bind(dataset_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);

        sqlx::query("DELETE FROM research_data WHERE dataset_id = $1")
            .bind(dataset_id)
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM research_datasets WHERE id = $1")
            .bind(dataset_id)
            .execute(&pool)
            .await
            .unwrap();
    }
}
