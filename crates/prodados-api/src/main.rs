//! Servidor HTTP da PRODADOS.
//!
//! Expõe os endpoints de indicadores econômicos e de datasets de
//! pesquisa. O banco de dados é opcional: sem `DATABASE_URL` o serviço
//! sobe em modo degradado, só com os indicadores ao vivo.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use prodados_api::routes::create_api_router;
use prodados_api::state::AppState;
use prodados_core::config::AppConfig;
use prodados_core::logging::{init_logging, LogConfig};
use prodados_data::provider::{AgregadosClient, SidraClient};

/// Carrega a configuração da aplicação.
///
/// Tenta `config/default.toml` (mais sobrescritas `PRODADOS__*`); na
/// ausência do arquivo, usa os padrões embutidos. A falha é devolvida
/// como aviso porque o logging ainda não está inicializado aqui.
fn load_config() -> (AppConfig, Option<String>) {
    match AppConfig::load_default() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e.to_string())),
    }
}

/// Constrói o estado da aplicação.
///
/// Conecta ao PostgreSQL quando `DATABASE_URL` está definida; a falha
/// de conexão degrada o serviço em vez de impedir a subida.
async fn create_app_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let agregados = AgregadosClient::with_base_url(
        &config.ibge.agregados_base_url,
        config.ibge.request_timeout_secs,
    )?;
    let sidra = SidraClient::with_base_url(
        &config.ibge.sidra_base_url,
        config.ibge.request_timeout_secs,
    )?;

    let mut state = AppState::new(agregados, sidra, config.cache.clone());

    if let Ok(database_url) = std::env::var("DATABASE_URL") {
        match PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.connection_timeout_secs))
            .connect(&database_url)
            .await
        {
            Ok(pool) => {
                // Teste de conexão
                if sqlx::query("SELECT 1").fetch_one(&pool).await.is_ok() {
                    info!("Conectado ao PostgreSQL");
                    state = state.with_db_pool(pool);
                } else {
                    error!("Falha ao verificar a conexão com o banco");
                }
            }
            Err(e) => {
                error!(erro = %e, "Falha ao conectar ao banco de dados");
            }
        }
    } else {
        warn!("DATABASE_URL não definida, cache de pesquisa desabilitado");
    }

    Ok(state)
}

/// Camada CORS.
///
/// Com `CORS_ORIGINS` definida, só as origens listadas são aceitas;
/// sem ela, modo de desenvolvimento com qualquer origem.
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS definida mas sem origens válidas, aceitando qualquer origem");
                AllowOrigin::any()
            } else {
                info!(count = origins.len(), "CORS restrito às origens configuradas");
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS não definida, aceitando qualquer origem (desenvolvimento)");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ])
}

/// Monta o roteador completo com middlewares.
fn create_router(state: Arc<AppState>) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Timeout global (30s): cobre a pior cadeia de chamadas externas
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors_layer())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Ctrl+C recebido, iniciando shutdown");
        }
        _ = terminate => {
            warn!("SIGTERM recebido, iniciando shutdown");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Carrega .env se existir
    let _ = dotenvy::dotenv();

    let (config, config_warning) = load_config();

    init_logging(LogConfig::from_settings(&config.logging))?;

    info!("Iniciando servidor PRODADOS...");

    if let Some(erro) = config_warning {
        warn!(erro = %erro, "Arquivo de configuração ausente, usando padrões");
    }

    let state = Arc::new(create_app_state(&config).await?);

    info!(
        version = %state.version,
        has_db = state.db_pool.is_some(),
        "Estado da aplicação inicializado"
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(%addr, "Servidor escutando");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Servidor encerrado");

    Ok(())
}
