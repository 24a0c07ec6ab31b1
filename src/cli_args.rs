use std::net::SocketAddr;

use clap::{Args, Parser, ValueEnum};
use derivative::Derivative;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::ErrorVerbosity;

#[derive(Parser, Debug)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Address the HTTP server binds to.
    #[arg(long, env = "SERVER_ADDRESS", default_value = "0.0.0.0:8000")]
    pub address: SocketAddr,

    /// How much detail error responses carry.
    #[arg(long, env = "ERROR_VERBOSITY", value_enum, default_value_t = ErrorVerbosity::Message)]
    pub error_verbosity: ErrorVerbosity,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Args, Derivative, Clone)]
#[derivative(Debug)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DB_HOST")]
    pub host: String,

    #[arg(long = "db-port", env = "DB_PORT")]
    pub port: u16,

    #[arg(long = "db-user", env = "DB_USER")]
    pub user: String,

    #[derivative(Debug(format_with = "mask"))]
    #[arg(long = "db-password", env = "DB_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(long = "db-name", env = "DB_NAME")]
    pub name: String,

    #[arg(long = "db-ssl-mode", env = "DB_SSL_MODE", value_enum)]
    pub ssl_mode: SslMode,

    /// Upper bound of pooled connections.
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode.into())
    }
}

fn mask<T>(_: &T, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str("...")
}

/// PostgreSQL `sslmode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SslMode {
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Allow => PgSslMode::Allow,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
            SslMode::VerifyCa => PgSslMode::VerifyCa,
            SslMode::VerifyFull => PgSslMode::VerifyFull,
        }
    }
}
