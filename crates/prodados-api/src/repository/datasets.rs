//! Repository de descritores de dataset.
//!
//! A tabela `research_datasets` é propriedade do site; este serviço
//! apenas lê, sempre com join na categoria.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use prodados_core::types::{DatasetDescriptor, ResearchCategory};

/// Linha do join dataset + categoria.
#[derive(Debug, FromRow)]
struct DatasetRow {
    id: Uuid,
    title: String,
    source: String,
    api_endpoint: Option<String>,
    source_url: Option<String>,
    category_name: String,
    category_slug: String,
}

impl From<DatasetRow> for DatasetDescriptor {
    fn from(row: DatasetRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            source: row.source,
            api_endpoint: row.api_endpoint,
            source_url: row.source_url,
            category: ResearchCategory {
                name: row.category_name,
                slug: row.category_slug,
            },
        }
    }
}

/// Repository de datasets de pesquisa.
pub struct DatasetRepository;

impl DatasetRepository {
    /// Resolve um descritor pelo id, com a categoria associada.
    ///
    /// # Returns
    /// `None` quando o dataset não existe.
    pub async fn find_by_id(
        pool: &PgPool,
        dataset_id: Uuid,
    ) -> Result<Option<DatasetDescriptor>, sqlx::Error> {
        let row: Option<DatasetRow> = sqlx::query_as(
            r#"
            SELECT d.id, d.title, d.source, d.api_endpoint, d.source_url,
                   c.name AS category_name, c.slug AS category_slug
            FROM research_datasets d
            JOIN research_categories c ON c.id = d.category_id
            WHERE d.id = $1
            "#,
        )
        .bind(dataset_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(DatasetDescriptor::from))
    }
}
