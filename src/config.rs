//! Process configuration.
//!
//! Every setting can be given as a command-line flag or an environment
//! variable. The configuration is parsed once at startup and passed down
//! explicitly; nothing reads the environment after that.

use clap::{Args, Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::assist::adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::assist::services::DEFAULT_LANGUAGE;

/// Storage backend for task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// `PostgreSQL` via a pooled diesel connection.
    Postgres,
    /// Process-local memory; contents are lost on exit.
    Memory,
}

/// Top-level server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskwise", version, about = "Task API with model-assisted helpers")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Task storage backend.
    #[arg(long, env = "TASKWISE_STORE", value_enum, default_value_t = StoreBackend::Postgres)]
    pub store: StoreBackend,

    /// Allowed CORS origin; any origin is allowed when unset.
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Completion provider settings.
    #[command(flatten)]
    pub assist: AssistConfig,
}

impl ServerConfig {
    /// Returns the socket address to bind.
    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// `PostgreSQL` connection settings.
///
/// `DATABASE_URL` wins when present; otherwise the URL is assembled from the
/// individual parts.
#[derive(Debug, Clone, Args)]
pub struct DatabaseConfig {
    /// Full connection URL.
    #[arg(long = "database-url", env = "DATABASE_URL", hide_env_values = true)]
    pub url: Option<String>,

    /// Database host.
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port.
    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database user.
    #[arg(long = "database-username", env = "DATABASE_USERNAME", default_value = "postgres")]
    pub username: String,

    /// Database password.
    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    /// Database name.
    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "task_app")]
    pub name: String,

    /// Maximum pooled connections.
    #[arg(long = "database-pool-size", env = "DATABASE_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,
}

impl DatabaseConfig {
    /// Returns the connection URL.
    #[must_use]
    pub fn connection_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.name
            )
        })
    }
}

/// Completion provider settings.
#[derive(Debug, Clone, Args)]
pub struct AssistConfig {
    /// Gemini API key.
    #[arg(long = "google-ai-api-key", env = "GOOGLE_AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for every completion.
    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API base URL.
    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Language the model is asked to reply in.
    #[arg(long = "assist-language", env = "ASSIST_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::{ServerConfig, StoreBackend};
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn explicit_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "taskwise",
            "--port",
            "8080",
            "--store",
            "memory",
            "--database-url",
            "postgres://app:secret@db:5432/tasks",
            "--gemini-model",
            "gemini-test",
            "--assist-language",
            "inglés",
        ])
        .expect("valid flags");

        assert_eq!(config.port, 8080);
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(
            config.database.connection_url(),
            "postgres://app:secret@db:5432/tasks"
        );
        assert_eq!(config.assist.model, "gemini-test");
        assert_eq!(config.assist.language, "inglés");
    }

    #[rstest]
    fn connection_url_is_assembled_from_parts() {
        let config = ServerConfig::try_parse_from([
            "taskwise",
            "--database-host",
            "pg.internal",
            "--database-port",
            "6543",
            "--database-username",
            "svc",
            "--database-password",
            "pw",
            "--database-name",
            "tasks",
        ])
        .expect("valid flags");

        let mut database = config.database;
        database.url = None;
        assert_eq!(
            database.connection_url(),
            "postgres://svc:pw@pg.internal:6543/tasks"
        );
    }

    #[rstest]
    fn rejects_unknown_store_backend() {
        assert!(ServerConfig::try_parse_from(["taskwise", "--store", "sqlite"]).is_err());
    }
}
