//! Gerenciamento de configuração.
//!
//! Este módulo define e gerencia a configuração da aplicação.
//! A configuração é carregada de um arquivo TOML e pode ser sobrescrita
//! por variáveis de ambiente com prefixo `PRODADOS__`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuração da aplicação.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Configuração do servidor
    #[serde(default)]
    pub server: ServerConfig,
    /// Configuração do banco de dados
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Configuração das APIs do IBGE
    #[serde(default)]
    pub ibge: IbgeConfig,
    /// Configuração do cache de dados de pesquisa
    #[serde(default)]
    pub cache: CacheConfig,
    /// Configuração de logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuração do servidor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host de bind
    pub host: String,
    /// Porta de escuta
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Configuração do banco de dados.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Número máximo de conexões
    pub max_connections: u32,
    /// Timeout de conexão (segundos)
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connection_timeout_secs: 10,
        }
    }
}

/// Configuração das APIs do IBGE.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IbgeConfig {
    /// URL base da API de agregados (indicadores econômicos)
    pub agregados_base_url: String,
    /// URL base da API SIDRA (tabelas de valores)
    pub sidra_base_url: String,
    /// Timeout por requisição externa (segundos)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for IbgeConfig {
    fn default() -> Self {
        Self {
            agregados_base_url: "https://servicodados.ibge.gov.br".to_string(),
            sidra_base_url: "https://apisidra.ibge.gov.br".to_string(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Configuração do cache de dados de pesquisa.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Validade de uma entrada de cache (horas)
    pub ttl_hours: i64,
    /// Limite de linhas retornadas por busca tabular
    pub max_rows: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_hours: 24,
            max_rows: 1000,
        }
    }
}

/// Configuração de logging.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Nível de log
    pub level: String,
    /// Formato de log (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Carrega a configuração de um arquivo e de variáveis de ambiente.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("PRODADOS")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Carrega a configuração do caminho padrão.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}
