use std::sync::Arc;

use anyhow::Context;
use books_api::{
    cli_args::CliArgs,
    server::{Server, ServerConfig},
    store::postgres::{self, PgBookRepository},
};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var(
            "RUST_LOG",
            "server=info,books_api=debug,tower_http=info,sqlx=warn",
        );
    }

    init_tracing()?;

    let args = CliArgs::parse();

    tracing::info!(database = ?args.database, "Starting ...");

    let pool = postgres::connect(&args.database)
        .await
        .context("Error connecting to database")?;

    postgres::migrate(&pool)
        .await
        .context("Error while migrating database")?;

    let books = Arc::new(PgBookRepository::new(pool));

    let server_config = ServerConfig::new(args.address, args.error_verbosity);
    let server = Server::new(server_config, books);

    server.run().await?;

    Ok(())
}
