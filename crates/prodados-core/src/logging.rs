//! Infraestrutura de logging baseada em tracing.
//!
//! Este módulo fornece logging estruturado com múltiplos formatos de saída:
//! - **pretty**: formato legível para desenvolvimento
//! - **json**: formato JSON para produção/agregação de logs
//! - **compact**: formato de uma linha para reduzir volume

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Formato de saída de log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Formato legível com cores (desenvolvimento)
    Pretty,
    /// Formato JSON para agregação (produção)
    Json,
    /// Formato compacto de uma linha
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::Pretty
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(format!("Formato de log desconhecido: {}", s)),
        }
    }
}

/// Configuração de logging.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filtro de nível de log (ex: "info", "debug", "prodados_data=debug")
    pub level: String,
    /// Formato de saída
    pub format: LogFormat,
    /// Incluir eventos de span (entrada/saída)
    pub with_span_events: bool,
    /// Incluir nome de arquivo e número de linha
    pub with_file: bool,
    /// Incluir alvo (caminho do módulo)
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            with_span_events: false,
            with_file: true,
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Cria uma nova configuração de log.
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    /// Define o formato de log.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Cria a configuração a partir da seção `[logging]` carregada.
    ///
    /// As variáveis de ambiente têm precedência sobre o arquivo:
    /// - `RUST_LOG`: nível de log
    /// - `LOG_FORMAT`: "pretty" | "json" | "compact"
    pub fn from_settings(settings: &crate::config::LoggingConfig) -> Self {
        let level = std::env::var("RUST_LOG").unwrap_or_else(|_| settings.level.clone());
        let format = std::env::var("LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .or_else(|| settings.format.parse().ok())
            .unwrap_or_default();

        Self {
            level,
            format,
            ..Default::default()
        }
    }
}

/// Inicializa o sistema de logging com a configuração dada.
///
/// # Exemplo
///
/// ```no_run
/// use prodados_core::logging::{init_logging, LogConfig, LogFormat};
///
/// init_logging(LogConfig::default()).unwrap();
/// ```
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let span_events = if config.with_span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    match config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_file(config.with_file)
                .with_line_number(config.with_file)
                .with_target(config.with_target)
                .with_span_events(span_events);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_file(config.with_file)
                .with_line_number(config.with_file)
                .with_target(config.with_target)
                .with_span_events(span_events);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_file(config.with_file)
                .with_line_number(config.with_file)
                .with_target(config.with_target)
                .with_span_events(span_events);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    tracing::info!(
        format = ?config.format,
        level = %config.level,
        "Logging inicializado"
    );

    Ok(())
}
