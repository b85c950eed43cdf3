use anyhow::Context;
use bizdesk_entrypoint::BizdeskEntrypoint;
use bizdesk_env::Environment;
use bizdesk_service::api;
use bizdesk_service::config::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

async fn connect_to_database(config: &Config) -> anyhow::Result<PgPool> {
    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (1, 25),
        Environment::Local => (1, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;
    Ok(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    BizdeskEntrypoint::default().init();

    let config = Config::from_env().context("expected to be able to generate config")?;

    let db = connect_to_database(&config).await?;

    sqlx::migrate!("../bizdesk_db_client/migrations")
        .run(&db)
        .await
        .context("failed to run migrations")?;

    api::setup_and_serve(&config, db).await?;
    Ok(())
}
